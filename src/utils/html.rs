//! HTML escaping for values interpolated into the page.
//!
//! - `escape()` - text content (`<`, `>`, `&`)
//! - `escape_attr()` - double-quoted attribute values (adds `"` and `'`)
//! - `escape_script_str()` - JS string literal contents inside an inline `<script>`

use std::borrow::Cow;

const TEXT_CHARS: &[char] = &['<', '>', '&'];
const ATTR_CHARS: &[char] = &['<', '>', '&', '"', '\''];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape text content. Borrows when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, TEXT_CHARS)
}

/// Escape a value placed inside `attr="..."`.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, ATTR_CHARS)
}

fn escape_with<'a>(s: &'a str, set: &[char]) -> Cow<'a, str> {
    if !s.contains(set) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c).filter(|_| set.contains(&c)) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a value placed inside a JS string literal (either quote style)
/// of an inline `<script>`. `<` is written as `\u003c` so `</script>`
/// cannot close the element.
pub fn escape_script_str(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '"', '\'', '<', '\n', '\r', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\u003c"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrowed_when_clean() {
        assert!(matches!(escape("Bui Tri Tinh"), Cow::Borrowed(_)));
        assert!(matches!(escape_attr("/avt.jpg"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(escape("it's \"fine\""), "it's \"fine\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("say \"hi\" it's"), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_escape_script_str() {
        assert!(matches!(escape_script_str("./pkg/app.js"), Cow::Borrowed(_)));
        assert_eq!(
            escape_script_str(r#"a"b'c\d</script>"#),
            r#"a\"b\'c\\d\u003c/script>"#
        );
        assert_eq!(escape_script_str("a\nb"), r"a\nb");
    }
}
