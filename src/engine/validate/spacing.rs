//! Spacing validation against the spacing scale.

use std::collections::HashMap;

use crate::catalog::{format_px, length_to_px, DesignTokens};

use super::{rank, Suggestion, ValidationError, ValidationReport, ValidationResult};

/// Validates each spacing value against the spacing scale.
///
/// A value is accepted if it equals a scale value (`1rem`) or converts to
/// the same pixel length as one (`16px`, `12.0px`). On a miss, the leading
/// signed number of the input is read as pixels and the three nearest scale
/// entries are suggested; inputs without a leading number get no
/// suggestions. Units other than `px` and `rem` are not converted, so `2em`
/// is compared as 2px.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `values` is empty.
pub fn validate_spacing(tokens: &DesignTokens, values: &[String]) -> Result<ValidationReport, ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyInput { what: "spacing" });
    }

    let scale = &tokens.spacing.scale;

    let mut accepted: HashMap<String, &str> = HashMap::new();
    for (name, value) in scale {
        accepted.entry(value.trim().to_lowercase()).or_insert(name.as_str());
        if let Some(px) = length_to_px(value) {
            accepted.entry(format_px(px)).or_insert(name.as_str());
        }
    }

    let results = values
        .iter()
        .map(|input| {
            let matched = accepted.get(&input.trim().to_lowercase()).or_else(|| {
                length_to_px(input).and_then(|px| accepted.get(&format_px(px)))
            });
            if let Some(name) = matched {
                return ValidationResult {
                    input: input.clone(),
                    is_valid: true,
                    token_name: Some((*name).to_string()),
                    suggestions: Vec::new(),
                };
            }

            let suggestions = leading_number(input).map_or_else(Vec::new, |px| {
                rank(
                    scale
                        .iter()
                        .filter_map(|(name, value)| {
                            length_to_px(value).map(|scale_px| Suggestion {
                                token_name: name.clone(),
                                value: value.clone(),
                                distance: (scale_px - px).abs(),
                            })
                        })
                        .collect(),
                )
            });

            ValidationResult {
                input: input.clone(),
                is_valid: false,
                token_name: None,
                suggestions,
            }
        })
        .collect();

    Ok(ValidationReport::new(results))
}

/// Reads the leading decimal number of a value (`13` from `13px`, `-4`
/// from `-4px`).
fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    let end = value.len() - digits.len()
        + digits
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(digits.len());
    value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn tokens() -> DesignTokens {
        CatalogStore::embedded().tokens().unwrap().clone()
    }

    fn values(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn accepts_scale_values_and_pixel_equivalents() {
        let report = validate_spacing(&tokens(), &values(&["1rem", "16px", " 0.5REM ", "0", "0px"])).unwrap();
        assert!(report.results.iter().all(|r| r.is_valid));
        assert_eq!(report.results[0].token_name.as_deref(), Some("4"));
        assert_eq!(report.results[1].token_name.as_deref(), Some("4"));
        assert_eq!(report.results[2].token_name.as_deref(), Some("2"));
        assert_eq!(report.summary.score, 100);
    }

    #[test]
    fn off_grid_value_suggests_nearest_scale_entries() {
        let report = validate_spacing(&tokens(), &values(&["13px"])).unwrap();
        let result = &report.results[0];
        assert!(!result.is_valid);

        let suggested: Vec<_> = result
            .suggestions
            .iter()
            .map(|s| (s.value.as_str(), s.distance))
            .collect();
        assert_eq!(suggested, [("0.75rem", 1.0), ("1rem", 3.0), ("0.5rem", 5.0)]);
    }

    #[test]
    fn equal_pixel_length_is_accepted() {
        let report = validate_spacing(&tokens(), &values(&["12.0px", "+8px", "0.0rem"])).unwrap();
        let tokens: Vec<_> = report.results.iter().map(|r| r.token_name.as_deref()).collect();
        assert_eq!(tokens, [Some("3"), Some("2"), Some("0")]);
        assert!(report.results.iter().all(|r| r.is_valid && r.suggestions.is_empty()));
    }

    #[test]
    fn signed_value_gets_suggestions() {
        let report = validate_spacing(&tokens(), &values(&["-4px", "+13px"])).unwrap();

        let suggested: Vec<_> = report.results[0]
            .suggestions
            .iter()
            .map(|s| (s.value.as_str(), s.distance))
            .collect();
        assert_eq!(suggested, [("0", 4.0), ("0.25rem", 8.0), ("0.5rem", 12.0)]);

        assert!(!report.results[1].is_valid);
        assert_eq!(report.results[1].suggestions[0].value, "0.75rem");
    }

    #[test]
    fn non_numeric_value_has_no_suggestions() {
        let report = validate_spacing(&tokens(), &values(&["auto", "large"])).unwrap();
        assert!(report.results.iter().all(|r| !r.is_valid && r.suggestions.is_empty()));
        assert_eq!(report.summary.score, 0);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = validate_spacing(&tokens(), &[]).unwrap_err();
        assert_eq!(err.to_string(), "At least one spacing value is required");
    }

    #[test]
    fn leading_number_parsing() {
        assert_eq!(leading_number("13px"), Some(13.0));
        assert_eq!(leading_number(" 1.5rem"), Some(1.5));
        assert_eq!(leading_number("-4px"), Some(-4.0));
        assert_eq!(leading_number("+8px"), Some(8.0));
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("auto"), None);
    }
}
