//! Small shared helpers.

pub mod hash;

/// `"s"` unless `n` is exactly one.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `"1 item"`, `"3 items"`, `"0 items"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "path"), "0 paths");
        assert_eq!(plural_count(1, "path"), "1 path");
        assert_eq!(plural_count(4, "link"), "4 links");
    }
}
