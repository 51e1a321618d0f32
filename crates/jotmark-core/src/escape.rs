/// Escapes `"`, `<` and `>` for use inside an attribute value.
///
/// This is deliberately narrow: `&` and quotes other than `"` pass through.
pub fn encode_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Strips the leading whitespace of the first indented line from every line
/// that starts with it.
///
/// Lines indented by less than that prefix are left alone.
pub fn outdent(text: &str) -> String {
    let prefix = text.split('\n').find_map(|line| {
        let width = line.len() - line.trim_start_matches([' ', '\t']).len();
        (width > 0).then(|| &line[..width])
    });
    let Some(prefix) = prefix else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.strip_prefix(prefix).unwrap_or(line));
    }
    out
}

/// Drops newlines at the very start and end of `text`.
pub(crate) fn trim_blank_lines(text: &str) -> &str {
    text.trim_matches('\n')
}

/// True when `prev` ends in an odd run of backslashes, i.e. the character
/// that follows it is escaped.
pub(crate) fn ends_with_escape(prev: &str) -> bool {
    let run = prev.len() - prev.trim_end_matches('\\').len();
    run % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::{encode_attr, ends_with_escape, outdent, trim_blank_lines};

    #[test]
    fn encode_attr_escapes_three_characters() {
        assert_eq!(encode_attr("<a>\""), "&lt;a&gt;&quot;");
        assert_eq!(encode_attr("a & 'b'"), "a & 'b'");
    }

    #[test]
    fn outdent_strips_first_indentation() {
        assert_eq!(outdent("  a\n  b\n    c"), "a\nb\n  c");
        assert_eq!(outdent("\t\tx\n\ty"), "x\n\ty");
    }

    #[test]
    fn outdent_uses_first_indented_line() {
        assert_eq!(outdent("top\n  a\n  b"), "top\na\nb");
        assert_eq!(outdent("plain\ntext"), "plain\ntext");
    }

    #[test]
    fn trims_only_newlines() {
        assert_eq!(trim_blank_lines("\n\n  a\n\n"), "  a");
    }

    #[test]
    fn odd_backslash_runs_escape() {
        assert!(ends_with_escape("foo\\"));
        assert!(!ends_with_escape("foo\\\\"));
        assert!(ends_with_escape("\\\\\\"));
        assert!(!ends_with_escape("foo"));
        assert!(!ends_with_escape(""));
    }
}
