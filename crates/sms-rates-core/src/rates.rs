//! Static rate tables and lookups.
//!
//! Three tables drive every quote:
//!
//! - the **rate table**: per-country local currency and per-message unit
//!   costs for each message type,
//! - the **exchange-rate table**: units of each supported currency per
//!   one USD (the base currency, rate exactly 1),
//! - the **country-name table**: display names, presentational only.
//!
//! The tables are literal data sourced from international SMS market
//! rates. They are built once ([`RateBook::default`]) and never mutated;
//! every lookup is an exact-match read after code normalization, with no
//! fallback.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::codes::{CountryCode, CurrencyCode};
use crate::error::{QuoteError, Result};
use crate::quote::MessageType;

/// Per-country messaging rates.
///
/// Unit costs are denominated in the country's local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRate {
    /// Currency the unit costs are priced in.
    pub local_currency: CurrencyCode,
    /// Cost of one utility message.
    pub utility: Decimal,
    /// Cost of one marketing message.
    pub marketing: Decimal,
}

impl CountryRate {
    /// Return the unit cost for the given message type.
    #[must_use]
    pub const fn unit_cost(&self, message_type: MessageType) -> Decimal {
        match message_type {
            MessageType::Utility => self.utility,
            MessageType::Marketing => self.marketing,
        }
    }
}

const fn cc(code: [u8; 2]) -> CountryCode {
    CountryCode::from_ascii(code)
}

const fn cur(code: [u8; 3]) -> CurrencyCode {
    CurrencyCode::from_ascii(code)
}

/// Rate table rows: (country, local currency, utility cost, marketing cost).
const RATE_ROWS: &[(CountryCode, CurrencyCode, Decimal, Decimal)] = &[
    (cc(*b"AR"), cur(*b"USD"), dec!(0.0289), dec!(0.0618)),
    (cc(*b"BR"), cur(*b"USD"), dec!(0.0068), dec!(0.0625)),
    (cc(*b"CL"), cur(*b"USD"), dec!(0.0200), dec!(0.0889)),
    (cc(*b"CO"), cur(*b"USD"), dec!(0.0002), dec!(0.0125)),
    (cc(*b"EG"), cur(*b"USD"), dec!(0.0052), dec!(0.1073)),
    (cc(*b"FR"), cur(*b"USD"), dec!(0.0300), dec!(0.1432)),
    (cc(*b"DE"), cur(*b"USD"), dec!(0.0550), dec!(0.1365)),
    (cc(*b"IN"), cur(*b"USD"), dec!(0.0014), dec!(0.0107)),
    (cc(*b"ID"), cur(*b"USD"), dec!(0.0250), dec!(0.0411)),
    (cc(*b"IL"), cur(*b"USD"), dec!(0.0053), dec!(0.0353)),
    (cc(*b"IT"), cur(*b"USD"), dec!(0.0300), dec!(0.0691)),
    (cc(*b"MY"), cur(*b"USD"), dec!(0.0140), dec!(0.0860)),
    (cc(*b"MX"), cur(*b"USD"), dec!(0.0085), dec!(0.0436)),
    (cc(*b"NL"), cur(*b"USD"), dec!(0.0500), dec!(0.1597)),
    (cc(*b"NG"), cur(*b"USD"), dec!(0.0067), dec!(0.0516)),
    (cc(*b"PK"), cur(*b"USD"), dec!(0.0054), dec!(0.0473)),
    (cc(*b"PE"), cur(*b"USD"), dec!(0.0200), dec!(0.0703)),
    (cc(*b"RU"), cur(*b"USD"), dec!(0.0400), dec!(0.0802)),
    (cc(*b"US"), cur(*b"USD"), dec!(0.0079), dec!(0.05)),
    (cc(*b"UK"), cur(*b"GBP"), dec!(0.042), dec!(0.072)),
    (cc(*b"AU"), cur(*b"USD"), dec!(0.0185), dec!(0.03)),
];

/// Exchange-rate rows: units of the currency per one USD.
const EXCHANGE_ROWS: &[(CurrencyCode, Decimal)] = &[
    (cur(*b"USD"), dec!(1)),
    (cur(*b"GBP"), dec!(0.78)),
    (cur(*b"INR"), dec!(83)),
    (cur(*b"EUR"), dec!(0.93)),
];

/// Display names for the supported destination countries.
const NAME_ROWS: &[(CountryCode, &str)] = &[
    (cc(*b"AR"), "Argentina"),
    (cc(*b"BR"), "Brazil"),
    (cc(*b"CL"), "Chile"),
    (cc(*b"CO"), "Colombia"),
    (cc(*b"EG"), "Egypt"),
    (cc(*b"FR"), "France"),
    (cc(*b"DE"), "Germany"),
    (cc(*b"IN"), "India"),
    (cc(*b"ID"), "Indonesia"),
    (cc(*b"IL"), "Israel"),
    (cc(*b"IT"), "Italy"),
    (cc(*b"MY"), "Malaysia"),
    (cc(*b"MX"), "Mexico"),
    (cc(*b"NL"), "Netherlands"),
    (cc(*b"NG"), "Nigeria"),
    (cc(*b"PK"), "Pakistan"),
    (cc(*b"PE"), "Peru"),
    (cc(*b"RU"), "Russia"),
    (cc(*b"US"), "USA"),
    (cc(*b"UK"), "UK"),
    (cc(*b"AU"), "Australia"),
];

/// The aggregate of the three static tables.
///
/// Built once at startup and shared read-only; quoting never mutates it.
#[derive(Debug, Clone)]
pub struct RateBook {
    rates: HashMap<CountryCode, CountryRate>,
    exchange_rates: HashMap<CurrencyCode, Decimal>,
    country_names: HashMap<CountryCode, &'static str>,
}

impl Default for RateBook {
    fn default() -> Self {
        let rates = RATE_ROWS
            .iter()
            .map(|&(country, local_currency, utility, marketing)| {
                (
                    country,
                    CountryRate {
                        local_currency,
                        utility,
                        marketing,
                    },
                )
            })
            .collect();

        let exchange_rates = EXCHANGE_ROWS.iter().copied().collect();
        let country_names = NAME_ROWS.iter().copied().collect();

        Self {
            rates,
            exchange_rates,
            country_names,
        }
    }
}

impl RateBook {
    /// Look up how many units of `currency` one USD buys.
    ///
    /// A non-positive stored rate cannot convert anything and is treated
    /// the same as an absent entry.
    pub fn exchange_rate(&self, currency: CurrencyCode) -> Result<Decimal> {
        match self.exchange_rates.get(&currency) {
            Some(rate) if *rate > Decimal::ZERO => Ok(*rate),
            _ => Err(QuoteError::UnknownCurrency {
                code: currency.to_string(),
            }),
        }
    }

    /// Look up the rate entry for a destination country.
    pub fn country_rate(&self, country: CountryCode) -> Result<&CountryRate> {
        self.rates.get(&country).ok_or_else(|| QuoteError::UnknownCountry {
            code: country.to_string(),
        })
    }

    /// Display name for a country, if one is known.
    ///
    /// Missing names are not a failure; callers fall back to the code.
    #[must_use]
    pub fn country_name(&self, country: CountryCode) -> Option<&str> {
        self.country_names.get(&country).copied()
    }

    /// Supported destination countries, sorted by code.
    #[must_use]
    pub fn countries(&self) -> Vec<CountryCode> {
        let mut countries: Vec<_> = self.rates.keys().copied().collect();
        countries.sort_unstable();
        countries
    }

    /// Supported source currencies, sorted by code.
    #[must_use]
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut currencies: Vec<_> = self.exchange_rates.keys().copied().collect();
        currencies.sort_unstable();
        currencies
    }

    /// Verify the cross-table invariants.
    ///
    /// Every country's local currency must resolve to a positive exchange
    /// rate; otherwise quoting for that country could never succeed. Run
    /// at service startup and in tests.
    pub fn check_integrity(&self) -> Result<()> {
        for (currency, rate) in &self.exchange_rates {
            if *rate <= Decimal::ZERO {
                return Err(QuoteError::UnknownCurrency {
                    code: currency.to_string(),
                });
            }
        }
        for country_rate in self.rates.values() {
            self.exchange_rate(country_rate.local_currency)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_book_passes_integrity_check() {
        RateBook::default().check_integrity().unwrap();
    }

    #[test]
    fn default_book_covers_the_market_list() {
        let book = RateBook::default();
        assert_eq!(book.countries().len(), 21);
        assert_eq!(book.currencies().len(), 4);
    }

    #[test]
    fn known_country_lookup() {
        let book = RateBook::default();
        let rate = book.country_rate("IN".parse().unwrap()).unwrap();
        assert_eq!(rate.local_currency, "USD".parse().unwrap());
        assert_eq!(rate.utility, dec!(0.0014));
        assert_eq!(rate.marketing, dec!(0.0107));
    }

    #[test]
    fn uk_is_priced_in_gbp() {
        let book = RateBook::default();
        let rate = book.country_rate("UK".parse().unwrap()).unwrap();
        assert_eq!(rate.local_currency, "GBP".parse().unwrap());
    }

    #[test]
    fn unknown_country_is_an_error() {
        let book = RateBook::default();
        let err = book.country_rate("ZZ".parse().unwrap()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::UnknownCountry {
                code: "ZZ".to_string()
            }
        );
    }

    #[test]
    fn unknown_currency_is_an_error() {
        let book = RateBook::default();
        let err = book.exchange_rate("JPY".parse().unwrap()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::UnknownCurrency {
                code: "JPY".to_string()
            }
        );
    }

    #[test]
    fn usd_is_the_base_currency() {
        let book = RateBook::default();
        assert_eq!(book.exchange_rate("USD".parse().unwrap()).unwrap(), dec!(1));
    }

    #[test]
    fn country_names_are_presentational() {
        let book = RateBook::default();
        assert_eq!(book.country_name("IN".parse().unwrap()), Some("India"));
        assert_eq!(book.country_name("ZZ".parse().unwrap()), None);
    }

    #[test]
    fn countries_are_sorted() {
        let book = RateBook::default();
        let countries = book.countries();
        let mut sorted = countries.clone();
        sorted.sort_unstable();
        assert_eq!(countries, sorted);
        assert_eq!(countries[0].as_str(), "AR");
    }

    #[test]
    fn unit_cost_selects_by_message_type() {
        let book = RateBook::default();
        let rate = book.country_rate("US".parse().unwrap()).unwrap();
        assert_eq!(rate.unit_cost(MessageType::Utility), dec!(0.0079));
        assert_eq!(rate.unit_cost(MessageType::Marketing), dec!(0.05));
    }
}
