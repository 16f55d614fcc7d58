//! ws_core — Core types, locale domains, and numeral formatting for the
//! ward statistics engine.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the engine (`ws_io`, `ws_algo`, `ws_report`, `ws_cli`).
//!
//! - Input rows: `Record` (ward number, category key, value)
//! - Locale domain: `Locale` (`ne`, `en`)
//! - Label lookup seam: `LabelSource`
//! - Numeral/percent formatting: `format` (Devanagari digit substitution,
//!   one-decimal percent strings)
//! - Closed dataset category domains: `datasets` (`Religion`, `DeathCause`)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod datasets;
pub mod format;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// Ward numbers are 1-based; zero is never a valid ward.
        InvalidWardNumber,
        /// Unrecognized locale tag.
        InvalidLocaleTag,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidWardNumber => write!(f, "invalid ward number (must be >= 1)"),
                CoreError::InvalidLocaleTag => write!(f, "invalid locale tag"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod locale {
    //! Target locales for labels, numerals, and narrative text.

    use crate::errors::CoreError;
    use core::fmt;
    use core::str::FromStr;

    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Output locale. `Ne` renders Devanagari numerals and Nepali prose;
    /// `En` renders ASCII numerals and English prose.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
    pub enum Locale {
        #[default]
        Ne,
        En,
    }

    impl Locale {
        pub fn as_tag(self) -> &'static str {
            match self {
                Locale::Ne => "ne",
                Locale::En => "en",
            }
        }
    }

    impl fmt::Display for Locale {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_tag())
        }
    }

    impl FromStr for Locale {
        type Err = CoreError;
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            // Accept common IETF-ish variants; normalize to the 2-letter form.
            match s {
                "ne" | "ne-NP" | "ne_NP" | "np" => Ok(Locale::Ne),
                "en" | "en-US" | "en_US" | "en-GB" => Ok(Locale::En),
                _ => Err(CoreError::InvalidLocaleTag),
            }
        }
    }
}

pub mod records {
    //! Raw input rows, normalized at construction.
    //!
    //! Upstream data entry errors (negative or missing values) must never
    //! crash a public statistics page, so `Record` clamps instead of
    //! rejecting. The only hard constraint is the 1-based ward number.

    use crate::errors::CoreError;

    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// One ward-level observation: `(ward_number, category, value)`.
    ///
    /// `category` is an opaque string key at this layer; closed per-dataset
    /// domains live in [`crate::datasets`]. Multiple records may share
    /// `(ward_number, category)` and are summed downstream, never overwritten.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Record {
        pub ward_number: u32,
        pub category: String,
        #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de_clamped_value"))]
        pub value: f64,
    }

    impl Record {
        /// Construct a record, clamping malformed values (negative or NaN → 0).
        pub fn new(ward_number: u32, category: impl Into<String>, value: f64) -> Result<Self, CoreError> {
            if ward_number < 1 {
                return Err(CoreError::InvalidWardNumber);
            }
            Ok(Self {
                ward_number,
                category: category.into(),
                value: clamp_value(value),
            })
        }
    }

    /// Negative and non-finite values are upstream entry errors; treat as 0.
    pub fn clamp_value(v: f64) -> f64 {
        if v.is_finite() && v > 0.0 {
            v
        } else {
            0.0
        }
    }

    #[cfg(feature = "serde")]
    fn de_clamped_value<'de, D>(de: D) -> Result<f64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Missing key is handled by `serde(default)`; an explicit null also
        // reads as 0 rather than failing the whole file.
        let v: Option<f64> = Option::deserialize(de)?;
        Ok(clamp_value(v.unwrap_or(0.0)))
    }

}

pub mod labels {
    //! Label lookup seam.
    //!
    //! Label dictionaries are externally maintained and may lag new category
    //! values; a miss is a soft condition. Consumers fall back to the raw
    //! category key verbatim.

    use std::collections::BTreeMap;

    /// `category key → display string`, locale-specific, possibly incomplete.
    pub trait LabelSource {
        fn label(&self, key: &str) -> Option<&str>;
    }

    impl LabelSource for BTreeMap<String, String> {
        fn label(&self, key: &str) -> Option<&str> {
            self.get(key).map(String::as_str)
        }
    }

    /// Empty dictionary: every lookup misses, every key is shown verbatim.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct NoLabels;

    impl LabelSource for NoLabels {
        fn label(&self, _key: &str) -> Option<&str> {
            None
        }
    }
}

// Commonly used items (stable symbols used across the workspace)
pub use datasets::OTHER_KEY;
pub use errors::CoreError;
pub use labels::{LabelSource, NoLabels};
pub use locale::Locale;
pub use records::Record;
