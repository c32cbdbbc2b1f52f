//! Header normalization and label-column lookup

/// Canonical form of a column header
///
/// Trims, lowercases and collapses internal whitespace runs into a single
/// `_`, so `" Predicted  Label "` becomes `predicted_label`. A leading
/// byte-order mark is dropped.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Index of the header matching `wanted`
///
/// `headers` must already be normalized. An exact match wins; otherwise the
/// first header containing `wanted` is taken, so `actual` finds
/// `actual_label`.
pub fn resolve_column(headers: &[String], wanted: &str) -> Option<usize> {
    let wanted = normalize_header(wanted);
    if wanted.is_empty() {
        return None;
    }
    headers
        .iter()
        .position(|h| *h == wanted)
        .or_else(|| headers.iter().position(|h| h.contains(&wanted)))
}

/// Label cell value with surrounding whitespace removed
pub fn normalize_label(raw: &str, lowercase: bool) -> String {
    let trimmed = raw.trim();
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| normalize_header(h)).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Predicted  Label "), "predicted_label");
        assert_eq!(normalize_header("ACTUAL"), "actual");
        assert_eq!(normalize_header("\u{feff}id"), "id");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_exact_match_preferred() {
        let h = headers(&["actual_label", "actual", "predicted"]);
        assert_eq!(resolve_column(&h, "actual"), Some(1));
    }

    #[test]
    fn test_substring_fallback() {
        let h = headers(&["Sample ID", "Actual Label", "Predicted Label"]);
        assert_eq!(resolve_column(&h, "actual"), Some(1));
        assert_eq!(resolve_column(&h, "Predicted"), Some(2));
        assert_eq!(resolve_column(&h, "score"), None);
    }

    #[test]
    fn test_wanted_name_is_normalized() {
        let h = headers(&["ground_truth", "model_output"]);
        assert_eq!(resolve_column(&h, "Ground Truth"), Some(0));
        assert_eq!(resolve_column(&h, "  "), None);
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Flu ", false), "Flu");
        assert_eq!(normalize_label("  Flu ", true), "flu");
        assert_eq!(normalize_label(" \t", false), "");
    }
}
