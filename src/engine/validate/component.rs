//! Heuristic review of a component description.

use serde::Serialize;

use crate::catalog::{format_px, CategoryMap, ComponentSpec};

use super::scan::{matching_components, nearest_grid, on_grid, Scan, ACCESSIBILITY_WORDS, RESPONSIVE_WORDS};
use super::{rating, Rating, ValidationError};

const HUE_PENALTY: u32 = 5;
const OFF_GRID_PENALTY: u32 = 3;

/// Outcome of [`validate_component`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReview {
    /// 0-100, starting from 100.
    pub score: u32,
    /// Band of `score`.
    pub rating: Rating,
    /// Problems that cost points.
    pub issues: Vec<String>,
    /// Advice that costs nothing.
    pub suggestions: Vec<String>,
}

/// Reviews a free-text component description against the design system.
///
/// Raw hue names cost 5 points each unless a semantic color role is also
/// mentioned, and every `Npx` value off the 4px grid costs 3. UI nouns with
/// a matching spec, missing accessibility wording and missing responsive
/// wording only add suggestions.
///
/// # Errors
///
/// Returns [`ValidationError::Pattern`] if a scanning pattern fails to compile.
pub fn validate_component(
    components: &CategoryMap<ComponentSpec>,
    description: &str,
) -> Result<ComponentReview, ValidationError> {
    let scan = Scan::new(description);
    let mut penalty = 0;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    for hue in scan.raw_hues() {
        penalty += HUE_PENALTY;
        issues.push(format!(
            "Raw color '{hue}' used; reference a semantic token such as primary or accent instead"
        ));
    }

    for noun in scan.nouns() {
        let specs = matching_components(components, noun);
        if !specs.is_empty() {
            suggestions.push(format!(
                "Build the {noun} from the existing component spec: {}",
                specs.join(", ")
            ));
        }
    }

    for px in scan.px_values()? {
        if !on_grid(px) {
            penalty += OFF_GRID_PENALTY;
            issues.push(format!(
                "{} is off the 4px grid; use {}",
                format_px(px),
                format_px(nearest_grid(px))
            ));
        }
    }

    if !scan.has_any(ACCESSIBILITY_WORDS) {
        suggestions.push("Describe focus states, keyboard interaction and ARIA labelling".to_string());
    }
    if !scan.has_any(RESPONSIVE_WORDS) {
        suggestions.push("Describe how the component adapts to mobile and other breakpoints".to_string());
    }

    let score = 100u32.saturating_sub(penalty);
    Ok(ComponentReview {
        score,
        rating: rating(score),
        issues,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn review(description: &str) -> ComponentReview {
        let store = CatalogStore::embedded();
        validate_component(store.components().unwrap(), description).unwrap()
    }

    #[test]
    fn clean_description_scores_full_marks() {
        let result = review(
            "A primary button with 16px padding, visible focus ring, keyboard support and a responsive layout",
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.rating, Rating::Good);
        assert!(result.issues.is_empty());
        assert_eq!(
            result.suggestions,
            ["Build the button from the existing component spec: button"]
        );
    }

    #[test]
    fn hues_and_off_grid_values_cost_points() {
        let result = review("A blue and red banner with 13px and 10px gaps on mobile, keyboard friendly");
        assert_eq!(result.score, 100 - 5 - 5 - 3 - 3);
        assert_eq!(result.issues.len(), 4);
        assert!(result.issues.contains(&"13px is off the 4px grid; use 12px".to_string()));
        assert!(result.issues.contains(&"10px is off the 4px grid; use 12px".to_string()));
    }

    #[test]
    fn missing_accessibility_and_responsive_wording_only_suggests() {
        let result = review("A plain panel");
        assert_eq!(result.score, 100);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn score_floors_at_zero() {
        let description = "13px ".repeat(40);
        let result = review(&description);
        assert_eq!(result.score, 0);
        assert_eq!(result.rating, Rating::Poor);
    }
}
