//! Conformance checks against the token system.
//!
//! Value validation ([`validate_colors`], [`validate_spacing`]) is an exact
//! lookup with nearest-neighbour suggestions on a miss. Description checks
//! ([`validate_component`], [`audit_design`]) are keyword heuristics that
//! produce a 0-100 score banded by [`rating`].
//!
//! Distances are deliberately simple: Euclidean distance in RGB space for
//! colors and the absolute pixel delta of the leading number for spacing.
//! Neither is perceptual or unit-aware.

mod audit;
mod colors;
mod component;
mod scan;
mod spacing;

pub use audit::{audit_design, AuditCategory, AuditReport};
pub use colors::validate_colors;
pub use component::{validate_component, ComponentReview};
pub use spacing::validate_spacing;

use serde::Serialize;
use thiserror::Error;

/// Errors from validation operations.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// A list-valued input was empty.
    #[error("At least one {what} value is required")]
    EmptyInput {
        /// What the list holds ("color", "spacing").
        what: &'static str,
    },

    /// A built-in scanning pattern failed to compile.
    #[error("Invalid scanning pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Conformance band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    /// 80 and above.
    Good,
    /// 60 to 79.
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    /// Below 60.
    Poor,
}

/// Bands a score: `>= 80` good, `>= 60` needs improvement, otherwise poor.
#[must_use]
pub const fn rating(score: u32) -> Rating {
    if score >= 80 {
        Rating::Good
    } else if score >= 60 {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

/// A candidate token for an invalid value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Token key.
    pub token_name: String,
    /// Token value.
    pub value: String,
    /// Distance from the input, rounded to two decimals.
    pub distance: f64,
}

/// Outcome for one input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The value as given.
    pub input: String,
    /// Whether the value is a token value.
    pub is_valid: bool,
    /// Matching token key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    /// Up to three nearest tokens, closest first. Empty when valid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

/// Aggregate counts over a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Number of inputs.
    pub total: usize,
    /// Inputs that matched a token.
    pub valid: usize,
    /// Inputs that did not.
    pub invalid: usize,
    /// `round(100 * valid / total)`.
    pub score: u32,
}

/// Per-value results plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// One result per input, in input order.
    pub results: Vec<ValidationResult>,
    /// Aggregate counts.
    pub summary: ValidationSummary,
}

/// Number of suggestions returned for a miss.
const MAX_SUGGESTIONS: usize = 3;

impl ValidationReport {
    fn new(results: Vec<ValidationResult>) -> Self {
        let total = results.len();
        let valid = results.iter().filter(|r| r.is_valid).count();
        Self {
            summary: ValidationSummary {
                total,
                valid,
                invalid: total - valid,
                score: percentage(valid, total),
            },
            results,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}

/// Sorts candidates closest first, ties by token name, and keeps the best few.
fn rank(mut candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    candidates.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.token_name.cmp(&b.token_name))
    });
    candidates.truncate(MAX_SUGGESTIONS);
    for suggestion in &mut candidates {
        suggestion.distance = (suggestion.distance * 100.0).round() / 100.0;
    }
    candidates
}
