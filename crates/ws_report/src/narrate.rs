//! crates/ws_report/src/narrate.rs
//! Composes the narrative paragraphs from a [`Summary`] in fixed order:
//! overall → dominance → secondary → ward variation → indicators → closing.
//!
//! Every numeric token is formatted (and digit-localized) here, before
//! substitution; templates never see raw numbers.

use std::collections::BTreeMap;

use minijinja::{context, Environment};

use ws_algo::Summary;
use ws_core::format::{format_count, format_percent_1dp, format_ward, localize_digits};
use ws_core::Locale;

use crate::templates::{self, TemplateSet};
use crate::ReportError;

/// Dominance tier of the leading category, by its share of the grand total.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DominanceTier {
    /// Share above 40%.
    ClearDominance,
    /// Share in 25–40% (inclusive on both ends).
    RelativeMajority,
    /// Share below 25%.
    RelativePlurality,
}

impl DominanceTier {
    pub fn classify(share_percent: f64) -> Self {
        if share_percent > 40.0 {
            DominanceTier::ClearDominance
        } else if share_percent >= 25.0 {
            DominanceTier::RelativeMajority
        } else {
            DominanceTier::RelativePlurality
        }
    }

    pub fn template_key(self) -> &'static str {
        match self {
            DominanceTier::ClearDominance => templates::DOMINANCE_CLEAR,
            DominanceTier::RelativeMajority => templates::DOMINANCE_MAJORITY,
            DominanceTier::RelativePlurality => templates::DOMINANCE_PLURALITY,
        }
    }
}

/// One caller-supplied indicator paragraph: a template slot name plus the
/// precomputed values to substitute. The narrator never computes indicator
/// values itself.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorParagraph {
    pub template: String,
    pub values: BTreeMap<String, String>,
}

/// Render the full narrative for a summary.
///
/// Returns the template set's single "no data" sentence when the summary is
/// the zero state; otherwise a non-empty paragraph sequence joined by blank
/// lines.
pub fn describe(
    summary: &Summary,
    templates: &TemplateSet,
    locale: Locale,
    indicators: &[IndicatorParagraph],
) -> Result<String, ReportError> {
    let env = Environment::new();

    if summary.is_empty() {
        return render(&env, templates, self::templates::NO_DATA, context! {});
    }

    let mut paragraphs: Vec<String> = Vec::with_capacity(6 + indicators.len());

    // (1) Overall total.
    paragraphs.push(render(
        &env,
        templates,
        self::templates::OVERALL,
        context! {
            total => format_count(summary.grand_total, locale),
            category_count => localize_digits(&summary.categories.len().to_string(), locale),
            ward_count => localize_digits(&summary.wards.len().to_string(), locale),
        },
    )?);

    // (2) Dominance statement, tiered by share.
    if let Some(dom) = &summary.dominant {
        let tier = DominanceTier::classify(dom.percentage_of_grand_total);
        paragraphs.push(render(
            &env,
            templates,
            tier.template_key(),
            context! {
                label => dom.label.clone(),
                total => format_count(dom.total, locale),
                share => format_percent_1dp(dom.percentage_of_grand_total, locale),
            },
        )?);
    }

    // (3) Secondary categories (ranks 2–5).
    let secondary = summary.secondary_categories();
    if !secondary.is_empty() {
        let items: Vec<String> = secondary
            .iter()
            .map(|c| {
                render(
                    &env,
                    templates,
                    self::templates::SECONDARY_ITEM,
                    context! {
                        label => c.label.clone(),
                        share => format_percent_1dp(c.percentage_of_grand_total, locale),
                    },
                )
            })
            .collect::<Result<_, _>>()?;
        paragraphs.push(render(
            &env,
            templates,
            self::templates::SECONDARY,
            context! { list => join_list(&items, locale) },
        )?);
    }

    // (4) Ward variation.
    if !summary.wards.is_empty() {
        let items: Vec<String> = summary
            .wards
            .iter()
            .map(|w| {
                render(
                    &env,
                    templates,
                    self::templates::WARD_ITEM,
                    context! {
                        ward => format_ward(w.ward_number, locale),
                        label => label_for(summary, &w.dominant_category),
                        share => format_percent_1dp(w.dominant_share_percent, locale),
                    },
                )
            })
            .collect::<Result<_, _>>()?;
        paragraphs.push(render(
            &env,
            templates,
            self::templates::WARD_VARIATION,
            context! { items => join_list(&items, locale) },
        )?);
    }

    // (5) Caller-supplied indicator paragraphs (opaque slots).
    for ind in indicators {
        paragraphs.push(render(
            &env,
            templates,
            &ind.template,
            minijinja::Value::from_serialize(&ind.values),
        )?);
    }

    // (6) Closing policy paragraph.
    paragraphs.push(render(
        &env,
        templates,
        self::templates::CLOSING,
        context! {
            diversity => localize_digits(&format!("{:.3}", summary.diversity_index), locale),
        },
    )?);

    Ok(paragraphs.join("\n\n"))
}

fn render(
    env: &Environment<'_>,
    set: &TemplateSet,
    key: &str,
    ctx: minijinja::Value,
) -> Result<String, ReportError> {
    let source = set
        .get(key)
        .ok_or_else(|| ReportError::MissingTemplate(key.to_string()))?;
    env.render_str(source, ctx)
        .map_err(|e| ReportError::Render(format!("{key}: {e}")))
}

/// Display label for a category key: resolved stats carry labels already;
/// a ward-dominant category outside the global top-N falls back to its raw
/// key verbatim (label dictionaries may lag new form values).
fn label_for(summary: &Summary, key: &str) -> String {
    summary
        .categories
        .iter()
        .find(|c| c.category == key)
        .map(|c| c.label.clone())
        .unwrap_or_else(|| key.to_string())
}

/// Join a list for prose: comma-separated with a locale conjunction before
/// the final item.
fn join_list(items: &[String], locale: Locale) -> String {
    let conj = match locale {
        Locale::Ne => " र ",
        Locale::En => " and ",
    };
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        n => format!("{}{conj}{}", items[..n - 1].join(", "), items[n - 1]),
    }
}
