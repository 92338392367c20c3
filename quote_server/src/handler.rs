//! HTTP surface of the quote server.
//!
//! The router is built explicitly by [`create_router`] and owns its state, so tests
//! can drive it with `tower::ServiceExt::oneshot` without binding a socket.
//!
//! Per request the handler runs fetch → map → insert → respond and stops at the
//! first failure with a `500` carrying the error text. The quote is persisted
//! before the response is written, so a `200` always corresponds to a stored row.
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use quote_common::net::QUOTE_ENDPOINT;
use quote_common::{CurrencyPair, QuoteError, QuoteResponse};

use crate::fetcher::QuoteSource;
use crate::model::record::QuoteRecord;
use crate::store::QuoteStore;

/// Application state shared across handlers.
pub struct AppState {
    /// Where quotes are fetched from.
    pub source: Arc<dyn QuoteSource>,
    /// History every served quote is appended to.
    pub store: QuoteStore,
    /// Pair requested from the source on every call.
    pub pair: CurrencyPair,
}

impl AppState {
    /// Bundle the handler dependencies.
    pub fn new(source: Arc<dyn QuoteSource>, store: QuoteStore, pair: CurrencyPair) -> Self {
        AppState {
            source,
            store,
            pair,
        }
    }
}

/// Any pipeline failure, rendered as `500` with the error text as body.
#[derive(Debug)]
pub struct ApiError(
    /// The failure being reported.
    pub QuoteError,
);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Failed to serve quote: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Create the router with the single quote route and a 404 fallback.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_ENDPOINT, get(get_dollar_quote))
        .fallback(not_found)
        .with_state(state)
}

/// GET /get-dollar-quote
pub async fn get_dollar_quote(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let quote = state.source.fetch(state.pair).await?;
    let record = QuoteRecord::from_upstream(&quote)?;
    state.store.insert(&record).await?;

    let response = QuoteResponse::from(&quote);
    let body = serde_json::to_vec(&response).map_err(|e| QuoteError::Encode(e.to_string()))?;
    info!("Served {} bid {} (record {})", state.pair, response.dolar, record.id);

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    info!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, "404 not found.")
}
