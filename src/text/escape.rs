//! Failure-message escaping for Markdown table cells.
//!
//! The entity strings are double-escaped (`&amp;lt;` rather than `&lt;`).
//! The comment renderer consumes them verbatim, so this table must not be
//! swapped for a standard HTML escaper.

/// Literal replacements, tried in order at every scan position.
///
/// ORDER MATTERS: `\r\n` must come before `\n` so a Windows line ending
/// collapses into a single `<br>`.
pub const ESCAPES: &[(&str, &str)] = &[
    ("\r\n", "<br>"),
    ("\n", "<br>"),
    ("\"", "&amp;quot;"),
    ("'", "&amp;apos;"),
    ("<", "&amp;lt;"),
    (">", "&amp;gt;"),
    ("&", "&amp;"),
];

/// Escape `message` in a single left-to-right pass.
///
/// Replacement output is never re-scanned, so `<br>` stays intact and a
/// literal `&` becomes `&amp;` exactly once.
pub fn escape_failure_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    let mut rest = message;

    'scan: while let Some(ch) = rest.chars().next() {
        for (from, to) in ESCAPES {
            if let Some(tail) = rest.strip_prefix(from) {
                escaped.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        escaped.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_failure_message;

    #[test]
    fn escapes_every_table_entry() {
        assert_eq!(
            escape_failure_message("\"'<>&\r\n"),
            "&amp;quot;&amp;apos;&amp;lt;&amp;gt;&amp;<br>"
        );
    }

    #[test]
    fn leaves_backslashes_alone() {
        assert_eq!(escape_failure_message("\\ \\n \n"), "\\ \\n <br>");
    }

    #[test]
    fn does_not_rescan_replacements() {
        assert_eq!(escape_failure_message("&lt;"), "&amp;lt;");
        assert_eq!(escape_failure_message("a & b"), "a &amp; b");
        assert_eq!(escape_failure_message("<br>"), "&amp;lt;br&amp;gt;");
    }

    #[test]
    fn each_newline_becomes_a_break() {
        assert_eq!(escape_failure_message("a\n\nb"), "a<br><br>b");
        assert_eq!(escape_failure_message("a\r\n\r\nb"), "a<br><br>b");
        assert_eq!(escape_failure_message("a\r\n\nb"), "a<br><br>b");
    }

    #[test]
    fn lone_carriage_return_passes_through() {
        assert_eq!(escape_failure_message("a\rb"), "a\rb");
        assert_eq!(escape_failure_message("a\r\r\nb"), "a\r<br>b");
    }

    #[test]
    fn no_ampersand_is_introduced_outside_the_table() {
        let input = "plain text: with (parens), /paths/and\\back\tslashes ✓";
        let escaped = escape_failure_message(input);
        assert_eq!(escaped, input);
        assert!(!escaped.contains('&'));
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(escape_failure_message("héllo <wörld>"), "héllo &amp;lt;wörld&amp;gt;");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(escape_failure_message(""), "");
    }
}
