//! Currency pairs understood by the upstream quote API.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of supported currency pairs.
///
/// The `Display`/`FromStr` form is the dashed path segment used in upstream
/// URLs (`USD-BRL`); the upstream JSON body is keyed by [`CurrencyPair::key`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum CurrencyPair {
    /// US dollar to Brazilian real.
    #[default]
    #[strum(serialize = "USD-BRL")]
    UsdBrl,
    /// Euro to Brazilian real.
    #[strum(serialize = "EUR-BRL")]
    EurBrl,
    /// Pound sterling to Brazilian real.
    #[strum(serialize = "GBP-BRL")]
    GbpBrl,
    /// Bitcoin to Brazilian real.
    #[strum(serialize = "BTC-BRL")]
    BtcBrl,
}

impl CurrencyPair {
    /// Key of this pair in the upstream JSON body, e.g. `USDBRL`.
    pub fn key(&self) -> String {
        self.to_string().replace('-', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_dashed_form() {
        assert_eq!(CurrencyPair::UsdBrl.to_string(), "USD-BRL");
        assert_eq!(CurrencyPair::BtcBrl.to_string(), "BTC-BRL");
    }

    #[test]
    fn key_drops_the_dash() {
        assert_eq!(CurrencyPair::UsdBrl.key(), "USDBRL");
        assert_eq!(CurrencyPair::EurBrl.key(), "EURBRL");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("usd-brl".parse::<CurrencyPair>().unwrap(), CurrencyPair::UsdBrl);
        assert_eq!("GBP-BRL".parse::<CurrencyPair>().unwrap(), CurrencyPair::GbpBrl);
        assert!("USD-EUR".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn default_is_usd_brl() {
        assert_eq!(CurrencyPair::default(), CurrencyPair::UsdBrl);
    }
}
