//! Labels for path segments that have no menu entry.

/// Turn a path segment into a display label.
///
/// `-` and `_` become spaces and the first character is upper-cased; the
/// rest of the segment is left as-is.
///
/// ```
/// use navcrumb::breadcrumb::humanize;
/// assert_eq!(humanize("digital-channels"), "Digital channels");
/// assert_eq!(humanize("mobile_banking"), "Mobile banking");
/// ```
pub fn humanize(segment: &str) -> String {
    let spaced = segment.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_basic() {
        assert_eq!(humanize("unknown"), "Unknown");
        assert_eq!(humanize("route"), "Route");
        assert_eq!(humanize("a-b_c"), "A b c");
    }

    #[test]
    fn test_humanize_keeps_rest_of_case() {
        assert_eq!(humanize("izi-SMART"), "Izi SMART");
        assert_eq!(humanize("Already"), "Already");
    }

    #[test]
    fn test_humanize_non_ascii_and_edge() {
        assert_eq!(humanize("início"), "Início");
        assert_eq!(humanize("ágio"), "Ágio");
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("-x"), " x");
        assert_eq!(humanize("123-abc"), "123 abc");
    }
}
