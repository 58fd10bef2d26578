//! Country and currency code types.
//!
//! This module provides strongly-typed, normalized codes for table
//! lookups. Parsing trims surrounding whitespace and uppercases, so
//! `" in "` and `"IN"` are the same country. A code that parses is not
//! necessarily supported; membership is decided by the [`RateBook`]
//! tables at lookup time.
//!
//! # Macro-based code types
//!
//! The `code_type!` macro reduces boilerplate for the fixed-width ASCII
//! code types, ensuring consistent implementation of normalization,
//! serialization, parsing, and display traits.
//!
//! [`RateBook`]: crate::rates::RateBook

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// Macro to define a fixed-width uppercase ASCII code type.
///
/// Generates a newtype wrapper around `[u8; LEN]` with implementations
/// for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as string)
/// - `FromStr` (trimming and uppercasing), `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`
macro_rules! code_type {
    ($name:ident, $len:literal, $variant:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name([u8; $len]);

        impl $name {
            /// Build a code from raw bytes.
            ///
            /// Callers must pass uppercase ASCII letters; this is only
            /// used for the static tables, where the literals are fixed.
            pub(crate) const fn from_ascii(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Return the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                // Invariant: constructed from validated ASCII letters.
                std::str::from_utf8(&self.0).expect("code bytes are ASCII")
            }
        }

        impl FromStr for $name {
            type Err = QuoteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let mut bytes = [0u8; $len];
                let ok = trimmed.len() == $len
                    && trimmed.bytes().all(|b| b.is_ascii_alphabetic());
                if !ok {
                    return Err(QuoteError::$variant {
                        code: trimmed.to_string(),
                    });
                }
                for (slot, b) in bytes.iter_mut().zip(trimmed.bytes()) {
                    *slot = b.to_ascii_uppercase();
                }
                Ok(Self(bytes))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = QuoteError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.as_str().to_string()
            }
        }
    };
}

code_type!(
    CountryCode,
    2,
    UnknownCountry,
    "A two-letter destination country code (e.g. `IN`, `US`).\n\nThe set of supported codes is defined by the rate table, not by this type."
);

code_type!(
    CurrencyCode,
    3,
    UnknownCurrency,
    "A three-letter currency code (e.g. `USD`, `GBP`)."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_roundtrip() {
        let code: CountryCode = "IN".parse().unwrap();
        assert_eq!(code.as_str(), "IN");
        assert_eq!(code.to_string(), "IN");
    }

    #[test]
    fn country_code_normalizes_case_and_whitespace() {
        let canonical: CountryCode = "IN".parse().unwrap();
        assert_eq!(" in ".parse::<CountryCode>().unwrap(), canonical);
        assert_eq!("In".parse::<CountryCode>().unwrap(), canonical);
    }

    #[test]
    fn country_code_rejects_bad_shapes() {
        assert!("".parse::<CountryCode>().is_err());
        assert!("I".parse::<CountryCode>().is_err());
        assert!("IND".parse::<CountryCode>().is_err());
        assert!("1N".parse::<CountryCode>().is_err());
        assert!("I N".parse::<CountryCode>().is_err());
    }

    #[test]
    fn country_code_parse_error_carries_input() {
        let err = "ind".parse::<CountryCode>().unwrap_err();
        assert_eq!(
            err,
            QuoteError::UnknownCountry {
                code: "ind".to_string()
            }
        );
    }

    #[test]
    fn currency_code_normalizes() {
        let canonical: CurrencyCode = "USD".parse().unwrap();
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), canonical);
        assert_eq!("  Usd".parse::<CurrencyCode>().unwrap(), canonical);
        assert!("US".parse::<CurrencyCode>().is_err());
        assert!("DOLLAR".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn codes_serde_as_strings() {
        let code: CountryCode = "UK".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"UK\"");
        let parsed: CountryCode = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(parsed, code);

        let currency: CurrencyCode = "EUR".parse().unwrap();
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"EUR\"");
    }
}
