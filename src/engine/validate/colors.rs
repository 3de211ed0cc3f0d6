//! Color validation against the light and semantic palettes.

use std::collections::HashMap;

use crate::catalog::DesignTokens;

use super::{rank, Suggestion, ValidationError, ValidationReport, ValidationResult};

/// Validates each color against the light and semantic palettes.
///
/// Inputs are trimmed and lower-cased before the exact match. A miss on a
/// well-formed `#rrggbb` value is answered with the three nearest tokens by
/// Euclidean RGB distance; other misses get no suggestions. RGB distance
/// is not perceptual, so the ranking is approximate.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `colors` is empty.
pub fn validate_colors(tokens: &DesignTokens, colors: &[String]) -> Result<ValidationReport, ValidationError> {
    if colors.is_empty() {
        return Err(ValidationError::EmptyInput { what: "color" });
    }

    let palettes = [&tokens.colors.light, &tokens.colors.semantic];

    // Normalised value -> token name; the first palette wins on a shared value.
    let mut index: HashMap<String, &str> = HashMap::new();
    for (name, token) in palettes.iter().flat_map(|p| p.iter()) {
        index.entry(normalize(&token.value)).or_insert(name.as_str());
    }

    let results = colors
        .iter()
        .map(|input| {
            let normalized = normalize(input);
            if let Some(name) = index.get(&normalized) {
                return ValidationResult {
                    input: input.clone(),
                    is_valid: true,
                    token_name: Some((*name).to_string()),
                    suggestions: Vec::new(),
                };
            }

            let suggestions = parse_hex(&normalized).map_or_else(Vec::new, |rgb| {
                rank(
                    palettes
                        .iter()
                        .flat_map(|p| p.iter())
                        .filter_map(|(name, token)| {
                            parse_hex(&normalize(&token.value)).map(|candidate| Suggestion {
                                token_name: name.clone(),
                                value: token.value.clone(),
                                distance: distance(rgb, candidate),
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

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parses a normalised `#rrggbb` color.
fn parse_hex(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (f64::from(*x) - f64::from(y)).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn tokens() -> DesignTokens {
        CatalogStore::embedded().tokens().unwrap().clone()
    }

    fn colors(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn every_palette_value_round_trips() {
        let tokens = tokens();
        for palette in [&tokens.colors.light, &tokens.colors.semantic] {
            for (name, token) in palette {
                let report = validate_colors(&tokens, &[token.value.clone()]).unwrap();
                let result = &report.results[0];
                assert!(result.is_valid, "{name} rejected");
                assert_eq!(result.token_name.as_deref(), Some(name.as_str()));
            }
        }
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let report = validate_colors(&tokens(), &colors(&["  #0D2872 "])).unwrap();
        assert!(report.results[0].is_valid);
        assert_eq!(report.results[0].token_name.as_deref(), Some("primary"));
    }

    #[test]
    fn misses_get_ranked_suggestions() {
        let report = validate_colors(&tokens(), &colors(&["#ff0001"])).unwrap();
        let result = &report.results[0];
        assert!(!result.is_valid);
        assert_eq!(result.suggestions.len(), 3);
        assert!(result
            .suggestions
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance));
        // Closest to pure red is the destructive red.
        assert_eq!(result.suggestions[0].token_name, "destructive");
    }

    #[test]
    fn malformed_colors_get_no_suggestions() {
        let report = validate_colors(&tokens(), &colors(&["#fff", "rebeccapurple", "#gg0000"])).unwrap();
        assert!(report.results.iter().all(|r| !r.is_valid && r.suggestions.is_empty()));
    }

    #[test]
    fn summary_counts() {
        let report = validate_colors(&tokens(), &colors(&["#0d2872", "#16a34a", "#123456"])).unwrap();
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.valid, 2);
        assert_eq!(report.summary.invalid, 1);
        assert_eq!(report.summary.score, 67);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = validate_colors(&tokens(), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyInput { what: "color" }));
    }

    #[test]
    fn hex_parsing_and_distance() {
        assert_eq!(parse_hex("#0d2872"), Some([0x0d, 0x28, 0x72]));
        assert_eq!(parse_hex("0d2872"), None);
        assert!((distance([0, 0, 0], [3, 4, 0]) - 5.0).abs() < f64::EPSILON);
    }
}
