//! crates/ws_core/src/datasets.rs
//! Closed category domains for datasets whose category set is fixed at build
//! time, plus `LabelSource` adapters over their label tables.
//!
//! The aggregation engine keeps treating categories as opaque string keys;
//! these domains live at the edge where form values enter the system. Keys
//! that fall outside a domain are carried as `Unknown` instead of being
//! silently coerced — the raw key survives for display and round-tripping.

use crate::labels::LabelSource;
use crate::locale::Locale;

/// Synthetic key used by the aggregation layer for the fold-in bucket.
/// Label tables here resolve it so narrative text stays localized.
pub const OTHER_KEY: &str = "OTHER";

macro_rules! closed_domain {
    (
        $name:ident {
            $( $variant:ident => ($key:literal, $ne:literal, $en:literal) ),+ $(,)?
        }
    ) => {
        #[derive(Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// Key outside the closed set; the raw value is preserved.
            Unknown(String),
        }

        impl $name {
            /// Parse a stored form value. Never fails: unrecognized keys
            /// become `Unknown`.
            pub fn from_key(key: &str) -> Self {
                match key {
                    $( $key => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }

            pub fn key(&self) -> &str {
                match self {
                    $( Self::$variant => $key, )+
                    Self::Unknown(raw) => raw,
                }
            }

            /// Display label, or `None` for `Unknown` (callers show the raw
            /// key verbatim — label dictionaries may lag new form values).
            pub fn label(&self, locale: Locale) -> Option<&'static str> {
                match (self, locale) {
                    $( (Self::$variant, Locale::Ne) => Some($ne), )+
                    $( (Self::$variant, Locale::En) => Some($en), )+
                    (Self::Unknown(_), _) => None,
                }
            }
        }
    };
}

closed_domain! {
    Religion {
        Hindu => ("HINDU", "हिन्दू", "Hindu"),
        Buddhist => ("BUDDHIST", "बौद्ध", "Buddhist"),
        Kirant => ("KIRANT", "किराँत", "Kirant"),
        Christian => ("CHRISTIAN", "क्रिश्चियन", "Christian"),
        Islam => ("ISLAM", "इस्लाम", "Islam"),
        Nature => ("NATURE", "प्रकृति", "Nature worship"),
        Bon => ("BON", "बोन", "Bon"),
        Jain => ("JAIN", "जैन", "Jain"),
        Bahai => ("BAHAI", "बहाई", "Bahai"),
        Sikh => ("SIKH", "सिख", "Sikh"),
    }
}

closed_domain! {
    DeathCause {
        HeartDisease => ("HEART_RELATED_DISEASES", "मुटुसम्बन्धी रोग", "Heart-related diseases"),
        Cancer => ("CANCER", "क्यान्सर", "Cancer"),
        KidneyDisease => ("KIDNEY_RELATED_DISEASES", "मिर्गौलासम्बन्धी रोग", "Kidney-related diseases"),
        Pneumonia => ("PNEUMONIA", "निमोनिया", "Pneumonia"),
        Asthma => ("ASTHMA", "दम", "Asthma"),
        Diabetes => ("DIABETES", "मधुमेह", "Diabetes"),
        BloodPressure => ("BLOOD_PRESSURE", "रक्तचाप", "Blood pressure"),
        TrafficAccident => ("TRAFFIC_ACCIDENT", "सवारी दुर्घटना", "Traffic accident"),
        OtherAccident => ("OTHER_ACCIDENTS", "अन्य दुर्घटना", "Other accidents"),
        Suicide => ("SUICIDE", "आत्महत्या", "Suicide"),
        NaturalCause => ("NATURAL_CAUSE", "प्राकृतिक कारण", "Natural causes"),
    }
}

/// The localized "OTHER" bucket label shared by all datasets.
fn other_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ne => "अन्य",
        Locale::En => "Other",
    }
}

macro_rules! domain_labels {
    ($labels:ident, $domain:ident) => {
        /// `LabelSource` over the built-in label table for one locale.
        #[derive(Clone, Copy, Debug)]
        pub struct $labels(pub Locale);

        impl LabelSource for $labels {
            fn label(&self, key: &str) -> Option<&str> {
                if key == OTHER_KEY {
                    return Some(other_label(self.0));
                }
                match $domain::from_key(key) {
                    $domain::Unknown(_) => None,
                    known => known.label(self.0),
                }
            }
        }
    };
}

domain_labels!(ReligionLabels, Religion);
domain_labels!(DeathCauseLabels, DeathCause);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        assert_eq!(Religion::from_key("HINDU"), Religion::Hindu);
        assert_eq!(Religion::Hindu.key(), "HINDU");
        let unknown = Religion::from_key("NEWLY_ADDED");
        assert_eq!(unknown.key(), "NEWLY_ADDED");
        assert_eq!(unknown.label(Locale::Ne), None);
    }

    #[test]
    fn labels_resolve_per_locale() {
        assert_eq!(Religion::Buddhist.label(Locale::Ne), Some("बौद्ध"));
        assert_eq!(DeathCause::Cancer.label(Locale::En), Some("Cancer"));
    }

    #[test]
    fn label_source_soft_fails_on_unknown() {
        let src = ReligionLabels(Locale::Ne);
        assert_eq!(src.label("HINDU"), Some("हिन्दू"));
        assert_eq!(src.label("NOT_IN_DOMAIN"), None);
        assert_eq!(src.label(OTHER_KEY), Some("अन्य"));
    }
}
