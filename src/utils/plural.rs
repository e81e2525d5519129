//! Pluralization for log messages.

/// `"s"` unless `n == 1`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "asset")` -> `"3 assets"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "asset"), "0 assets");
        assert_eq!(plural_count(1, "asset"), "1 asset");
        assert_eq!(plural_count(100, "star"), "100 stars");
    }
}
