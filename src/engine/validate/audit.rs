//! Whole-design audit of a free-text description.

use serde::Serialize;

use crate::catalog::{format_px, CategoryMap, ComponentSpec, DesignTokens};

use super::scan::{
    matching_components, nearest_grid, on_grid, Scan, CONTRAST_WORDS, FOCUS_WORDS, RESPONSIVE_WORDS,
    TEXT_WORDS,
};
use super::{rating, Rating, ValidationError};

/// Score and findings of one audit category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditCategory {
    /// Category name.
    pub category: &'static str,
    /// 0-100, starting from 100.
    pub score: u32,
    /// Findings that cost points.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

/// Outcome of [`audit_design`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Rounded mean of the category scores.
    pub overall_score: u32,
    /// Band of `overall_score`.
    pub rating: Rating,
    /// Colors, typography, spacing, accessibility, responsiveness and components, in that order.
    pub categories: Vec<AuditCategory>,
}

impl AuditReport {
    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&AuditCategory> {
        self.categories.iter().find(|c| c.category == name)
    }
}

struct Tally {
    category: &'static str,
    penalty: u32,
    issues: Vec<String>,
}

impl Tally {
    const fn new(category: &'static str) -> Self {
        Self {
            category,
            penalty: 0,
            issues: Vec::new(),
        }
    }

    fn deduct(&mut self, points: u32, issue: String) {
        self.penalty += points;
        self.issues.push(issue);
    }

    fn finish(self) -> AuditCategory {
        AuditCategory {
            category: self.category,
            score: 100u32.saturating_sub(self.penalty),
            issues: self.issues,
        }
    }
}

/// Audits a design description across six categories.
///
/// Each category starts at 100:
///
/// - colors: -10 if any hex, `rgb(` or `hsl(` literal or raw hue name appears
/// - typography: -10 if a known font outside the token stacks is named
/// - spacing: -10 if any `Npx` value is off the 4px grid
/// - accessibility: -5 without focus or keyboard wording, -5 without
///   contrast wording when text content is described
/// - responsiveness: -10 without mobile or responsive wording
/// - components: -10 per UI noun with no matching component spec
///
/// # Errors
///
/// Returns [`ValidationError::Pattern`] if a scanning pattern fails to compile.
pub fn audit_design(
    tokens: &DesignTokens,
    components: &CategoryMap<ComponentSpec>,
    description: &str,
) -> Result<AuditReport, ValidationError> {
    let scan = Scan::new(description);

    let mut colors = Tally::new("colors");
    let literals = scan.color_literals()?;
    let hues = scan.raw_hues();
    if !literals.is_empty() || !hues.is_empty() {
        let found: Vec<String> = literals
            .into_iter()
            .chain(hues.into_iter().map(str::to_string))
            .collect();
        colors.deduct(10, format!("Raw color values used: {}", found.join(", ")));
    }

    let mut typography = Tally::new("typography");
    let fonts = scan.foreign_fonts(tokens);
    if !fonts.is_empty() {
        typography.deduct(10, format!("Fonts outside the token font stacks: {}", fonts.join(", ")));
    }

    let mut spacing = Tally::new("spacing");
    let off_grid: Vec<String> = scan
        .px_values()?
        .into_iter()
        .filter(|px| !on_grid(*px))
        .map(|px| format!("{} (use {})", format_px(px), format_px(nearest_grid(px))))
        .collect();
    if !off_grid.is_empty() {
        spacing.deduct(10, format!("Spacing off the 4px grid: {}", off_grid.join(", ")));
    }

    let mut accessibility = Tally::new("accessibility");
    if !scan.has_any(FOCUS_WORDS) {
        accessibility.deduct(5, "No focus or keyboard interaction described".to_string());
    }
    if scan.has_any(TEXT_WORDS) && !scan.has_any(CONTRAST_WORDS) {
        accessibility.deduct(5, "Text content described without contrast requirements".to_string());
    }

    let mut responsiveness = Tally::new("responsiveness");
    if !scan.has_any(RESPONSIVE_WORDS) {
        responsiveness.deduct(10, "No mobile or responsive behaviour described".to_string());
    }

    let mut coverage = Tally::new("components");
    for noun in scan.nouns() {
        if matching_components(components, noun).is_empty() {
            coverage.deduct(10, format!("No component spec covers '{noun}'"));
        }
    }

    let categories: Vec<AuditCategory> = [colors, typography, spacing, accessibility, responsiveness, coverage]
        .into_iter()
        .map(Tally::finish)
        .collect();

    let overall_score = mean(&categories);
    Ok(AuditReport {
        overall_score,
        rating: rating(overall_score),
        categories,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn mean(categories: &[AuditCategory]) -> u32 {
    let total: u32 = categories.iter().map(|c| c.score).sum();
    (f64::from(total) / categories.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn audit(description: &str) -> AuditReport {
        let store = CatalogStore::embedded();
        audit_design(store.tokens().unwrap(), store.components().unwrap(), description).unwrap()
    }

    fn score(report: &AuditReport, category: &str) -> u32 {
        report.category(category).unwrap().score
    }

    #[test]
    fn categories_are_reported_in_order() {
        let report = audit("anything");
        let names: Vec<_> = report.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            names,
            ["colors", "typography", "spacing", "accessibility", "responsiveness", "components"]
        );
    }

    #[test]
    fn raw_hue_and_off_grid_spacing() {
        let report = audit("A blue hero with 13px padding");
        assert_eq!(score(&report, "colors"), 90);
        assert_eq!(score(&report, "spacing"), 90);
        assert_eq!(score(&report, "responsiveness"), 90);
        assert_eq!(score(&report, "accessibility"), 95);
        assert_eq!(score(&report, "typography"), 100);
        assert_eq!(score(&report, "components"), 100);
        // (90 + 100 + 90 + 95 + 90 + 100) / 6 = 94.17
        assert_eq!(report.overall_score, 94);
        assert_eq!(report.rating, Rating::Good);
    }

    #[test]
    fn color_literals_are_penalised_once() {
        let report = audit("Header #ff0000, footer rgb(0 0 0), links hsl(200 50% 50%)");
        assert_eq!(score(&report, "colors"), 90);
        assert_eq!(report.category("colors").unwrap().issues.len(), 1);
    }

    #[test]
    fn text_without_contrast_costs_accessibility() {
        let report = audit("Large heading text, keyboard navigable, mobile first");
        assert_eq!(score(&report, "accessibility"), 95);

        let report = audit("Large heading text with WCAG contrast, keyboard navigable, mobile first");
        assert_eq!(score(&report, "accessibility"), 100);
    }

    #[test]
    fn foreign_fonts_cost_typography() {
        assert_eq!(score(&audit("Body set in Roboto"), "typography"), 90);
        assert_eq!(score(&audit("Body set in Inter"), "typography"), 100);
    }

    #[test]
    fn uncovered_nouns_cost_components() {
        let report = audit("A carousel, an accordion and a button");
        assert_eq!(score(&report, "components"), 80);
    }

    #[test]
    fn well_described_design_is_clean() {
        let report = audit(
            "Primary buttons and cards on a 16px grid, visible focus rings, keyboard support, \
             responsive down to mobile",
        );
        assert!(report.categories.iter().all(|c| c.score == 100));
        assert_eq!(report.overall_score, 100);
    }
}
