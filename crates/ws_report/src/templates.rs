//! crates/ws_report/src/templates.rs
//! Template sets: named minijinja template strings per narrative slot.
//!
//! Built-in defaults exist for both locales as compile-time phrasebooks;
//! deployments override individual slots (or whole sets) through
//! configuration to give each dataset its own phrasing. Slot keys are stable
//! API — renaming one is a breaking change for every deployed template file.

use std::collections::BTreeMap;

use ws_core::Locale;

// ---- Stable slot keys -------------------------------------------------------

pub const NO_DATA: &str = "no_data";
pub const OVERALL: &str = "overall";
pub const DOMINANCE_CLEAR: &str = "dominance_clear";
pub const DOMINANCE_MAJORITY: &str = "dominance_majority";
pub const DOMINANCE_PLURALITY: &str = "dominance_plurality";
pub const SECONDARY: &str = "secondary";
pub const SECONDARY_ITEM: &str = "secondary_item";
pub const WARD_VARIATION: &str = "ward_variation";
pub const WARD_ITEM: &str = "ward_item";
pub const CLOSING: &str = "closing";

/// A named collection of sentence templates for one locale/dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateSet {
    templates: BTreeMap<String, String>,
}

impl TemplateSet {
    /// Built-in defaults for a locale. Every required slot is present.
    pub fn builtin(locale: Locale) -> Self {
        let phrases: &[(&str, &str)] = match locale {
            Locale::Ne => NE_DEFAULTS,
            Locale::En => EN_DEFAULTS,
        };
        let templates = phrases
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { templates }
    }

    pub fn from_map(templates: BTreeMap<String, String>) -> Self {
        Self { templates }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`: slots present in `other` win.
    /// Deployments start from [`TemplateSet::builtin`] and override the few
    /// slots a dataset phrases differently.
    pub fn merged_with(&self, other: &TemplateSet) -> Self {
        let mut templates = self.templates.clone();
        for (k, v) in &other.templates {
            templates.insert(k.clone(), v.clone());
        }
        Self { templates }
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }
}

// ---- Built-in phrasebooks ---------------------------------------------------
//
// Kept deliberately dataset-neutral; dataset-specific nouns come from
// per-dataset overrides. The `{{ ... }}` slots receive pre-formatted,
// locale-correct tokens (counts, percents, ward designations, joined lists).

const NE_DEFAULTS: &[(&str, &str)] = &[
    (NO_DATA, "यस शीर्षकमा हाल कुनै तथ्याङ्क उपलब्ध छैन ।"),
    (
        OVERALL,
        "गाउँपालिकामा कुल {{ total }} गणना {{ category_count }} वटा वर्ग र {{ ward_count }} वटा वडामा वितरित रहेको छ ।",
    ),
    (
        DOMINANCE_CLEAR,
        "{{ label }} वर्गको स्पष्ट बाहुल्य रहेको छ; कुल {{ total }} अर्थात् {{ share }} यसै वर्गमा पर्दछ ।",
    ),
    (
        DOMINANCE_MAJORITY,
        "{{ label }} वर्ग सापेक्षिक बहुमतका साथ अगाडि छ; कुल {{ total }} अर्थात् {{ share }} यस वर्गमा पर्दछ ।",
    ),
    (
        DOMINANCE_PLURALITY,
        "{{ label }} वर्ग सबैभन्दा ठूलो भए पनि यसको अंश {{ share }} मात्र छ, जसले उल्लेख्य विविधता देखाउँछ ।",
    ),
    (SECONDARY, "त्यसपछिका प्रमुख वर्गहरूमा {{ list }} रहेका छन् ।"),
    (SECONDARY_ITEM, "{{ label }} ({{ share }})"),
    (WARD_VARIATION, "वडागत रूपमा हेर्दा {{ items }} प्रमुख रहेको देखिन्छ ।"),
    (WARD_ITEM, "{{ ward }} मा {{ label }} ({{ share }})"),
    (
        CLOSING,
        "माथिका तथ्याङ्कले विविधता सूचकाङ्क {{ diversity }} देखाउँछन्; लक्षित नीति तथा कार्यक्रम तर्जुमा गर्दा वडागत भिन्नतालाई ध्यान दिनुपर्ने देखिन्छ ।",
    ),
];

const EN_DEFAULTS: &[(&str, &str)] = &[
    (NO_DATA, "No data is currently available under this heading."),
    (
        OVERALL,
        "The municipality records a total of {{ total }}, distributed across {{ category_count }} categories and {{ ward_count }} wards.",
    ),
    (
        DOMINANCE_CLEAR,
        "{{ label }} is clearly dominant, accounting for {{ total }} ({{ share }}) of the overall figure.",
    ),
    (
        DOMINANCE_MAJORITY,
        "{{ label }} holds a relative majority with {{ total }} ({{ share }}) of the overall figure.",
    ),
    (
        DOMINANCE_PLURALITY,
        "{{ label }} is the largest category, yet at only {{ share }} — a sign of considerable diversity.",
    ),
    (SECONDARY, "The next largest categories are {{ list }}."),
    (SECONDARY_ITEM, "{{ label }} ({{ share }})"),
    (WARD_VARIATION, "Across wards, the leading category is {{ items }}."),
    (WARD_ITEM, "{{ label }} ({{ share }}) in {{ ward }}"),
    (
        CLOSING,
        "These figures show a diversity index of {{ diversity }}; targeted policies and programmes should take the ward-level variation into account.",
    ),
];
