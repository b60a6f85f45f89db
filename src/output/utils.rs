//! Shared escaping helpers for output formatting

use std::borrow::Cow;

/// Quote a CSV field if it contains a delimiter, quote or line break.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Escape text content of an XML element.
pub fn xml_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a double-quoted XML attribute value.
///
/// Whitespace control characters become character references so they survive
/// attribute value normalization.
pub fn xml_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#09;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field(""), "");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
        assert!(matches!(csv_field("with space"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_xml_text() {
        assert_eq!(xml_text("Thu Oct  1"), "Thu Oct  1");
        assert_eq!(xml_text("a<b>&c"), "a&lt;b&gt;&amp;c");
        // Quotes are fine in text content
        assert_eq!(xml_text("\"q\""), "\"q\"");
    }

    #[test]
    fn test_xml_attr() {
        assert_eq!(xml_attr("/tmp/dir"), "/tmp/dir");
        assert_eq!(xml_attr("a\"b"), "a&quot;b");
        assert_eq!(xml_attr("x\ny\rz\t"), "x&#10;y&#13;z&#09;");
        assert_eq!(xml_attr("R&D"), "R&amp;D");
    }
}
