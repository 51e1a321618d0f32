use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::escape::{encode_attr, outdent, trim_blank_lines};
use crate::options::Options;
use crate::parser::render;
use crate::references::LinkTable;

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+").expect("ordinal regex"));
static LINE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[>*+.-]").expect("line marker regex"));

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Container {
    Quote,
    Ordered,
    Unordered,
}

impl Container {
    fn of(block: &str) -> Self {
        match block.trim_start().chars().next() {
            Some('>') => Self::Quote,
            Some(ch) if ch.is_ascii_digit() => Self::Ordered,
            _ => Self::Unordered,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Quote => "blockquote",
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }
}

/// Renders a fenced or indented code block as `<pre>`.
///
/// `class` is the fence language, `poetry` for indented blocks, or empty for
/// a fence without a language.
pub(crate) fn code_block(body: &str, class: &str, options: &Options) -> String {
    if let Some(replacement) = &options.replace_code_with_emoji {
        return replacement.clone();
    }
    let content = encode_attr(trim_blank_lines(&outdent(body)));
    if class.is_empty() {
        format!("<pre>{content}</pre>")
    } else {
        format!("<pre class=\"{}\">{content}</pre>", class.to_lowercase())
    }
}

pub(crate) fn inline_code(code: &str, options: &Options) -> String {
    match &options.replace_code_with_emoji {
        Some(replacement) => replacement.clone(),
        None => format!("<code>{}</code>", encode_attr(code)),
    }
}

/// Renders a run of `>`, `*`, `+`, `-` or `1.` lines.
///
/// The first line's marker picks the wrapper. Markers are stripped, the
/// block is outdented and rendered again one level deeper; for lists every
/// line of that output becomes one item.
pub(crate) fn quote_or_list(
    block: &str,
    links: &LinkTable,
    options: &Options,
    depth: usize,
) -> String {
    let block = trim_blank_lines(block);
    let container = Container::of(block);

    let stripped = match container {
        Container::Ordered => ORDINAL.replace_all(block, ""),
        Container::Quote | Container::Unordered => Cow::Borrowed(block),
    };
    let stripped = LINE_MARKER.replace_all(&stripped, "");
    let inner = render(&outdent(&stripped), links, options, depth + 1);

    let tag = container.tag();
    let mut out = format!("<{tag}>");
    if container == Container::Quote {
        out.push_str(&inner);
    } else {
        for line in inner.split('\n') {
            out.push_str("<li>");
            out.push_str(line);
            out.push_str("</li>");
        }
    }
    out.push_str(&format!("</{tag}>"));
    out
}

pub(crate) fn heading(
    level: u8,
    text: &str,
    links: &LinkTable,
    options: &Options,
    depth: usize,
) -> String {
    let inner = render(text, links, options, depth + 1);
    format!("<h{level}>{inner}</h{level}>")
}
