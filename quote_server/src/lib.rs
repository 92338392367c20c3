//! USD-BRL quote server.
//!
//! On every `GET /get-dollar-quote` the server fetches the latest quote from the
//! upstream currency API, stores it as one row of an append-only SQLite history and
//! returns `{"dolar": "<bid>"}`. The pieces are:
//!
//! - `fetcher` — `QuoteSource` trait and the `reqwest`-based upstream client.
//! - `model` — `QuoteRecord` and the string-to-decimal conversion of upstream fields.
//! - `store` — SQLite history table, opened and migrated once at startup.
//! - `handler` — axum router, shared `AppState`, and the request pipeline.
#![warn(missing_docs)]
pub mod fetcher;
pub mod handler;
pub mod model;
pub mod store;

pub use fetcher::{AwesomeApiFetcher, QuoteSource};
pub use handler::{AppState, create_router};
pub use model::record::QuoteRecord;
pub use store::QuoteStore;
