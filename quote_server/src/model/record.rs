//! Persisted quote record and the upstream-to-record conversion.
//!
//! The upstream API sends every number as text. [`QuoteRecord::from_upstream`]
//! is the only place that text is turned into decimals; it fails on the first
//! field that does not parse, so a record either exists fully populated or not
//! at all.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use quote_common::{QuoteError, UpstreamQuote};
use rust_decimal::Decimal;
use uuid::Uuid;

/// One historical snapshot of a fetched quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    /// Random UUID generated per record.
    pub id: String,
    /// Bid price.
    pub value: Decimal,
    /// Base currency code.
    pub code: String,
    /// Quote currency code.
    pub codein: String,
    /// Day high.
    pub high: Decimal,
    /// Day low.
    pub low: Decimal,
    /// Display name of the pair.
    pub name: String,
    /// Percent change.
    pub pct_change: Decimal,
    /// Insert time.
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at`; records are never updated.
    pub updated_at: DateTime<Utc>,
    /// Always `None`; records are never deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl QuoteRecord {
    /// Convert an upstream quote into a record with a fresh identifier.
    ///
    /// - quote: upstream entry for one currency pair.
    /// - Returns: the record, or `QuoteError::Parse` naming the first field
    ///   (`bid`, `high`, `low`, `pctChange`) that is not decimal text.
    pub fn from_upstream(quote: &UpstreamQuote) -> Result<QuoteRecord, QuoteError> {
        let value = parse_decimal("bid", &quote.bid)?;
        let high = parse_decimal("high", &quote.high)?;
        let low = parse_decimal("low", &quote.low)?;
        let pct_change = parse_decimal("pctChange", &quote.pct_change)?;
        let now = Utc::now();

        Ok(QuoteRecord {
            id: Uuid::new_v4().to_string(),
            value,
            code: quote.code.clone(),
            codein: quote.codein.clone(),
            high,
            low,
            name: quote.name.clone(),
            pct_change,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }
}

/// Base-10 decimal parsing, with scientific notation (`5.3e-1`) accepted.
///
/// The text must be an optional sign, digits with at most one `.`, and an optional
/// exponent. `Decimal::from_str` alone would skip `_` and read `5_32` as 532.
fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, QuoteError> {
    let canonical =
        canonical_decimal(raw).ok_or_else(|| QuoteError::parse(field, raw, "not a base-10 number"))?;
    let parsed = if canonical.contains('e') {
        Decimal::from_scientific(&canonical)
    } else {
        Decimal::from_str(&canonical)
    };
    parsed.map_err(|e| QuoteError::parse(field, raw, e))
}

/// Rewrites accepted number text as `[-]digits[.digits][e[-]digits]`, or `None`.
fn canonical_decimal(text: &str) -> Option<String> {
    let (negative, unsigned) = split_sign(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let mut canonical = String::with_capacity(text.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        canonical.push('.');
        canonical.push_str(fraction);
    }

    if let Some(exponent) = exponent {
        let (negative, digits) = split_sign(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
        canonical.push('e');
        if negative {
            canonical.push('-');
        }
        canonical.push_str(digits);
    }
    Some(canonical)
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
