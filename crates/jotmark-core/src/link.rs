use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::encode_attr;
use crate::options::LinkStyle;
use crate::references::LinkTable;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*)|(?:".+"))@(?:(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(?:(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex")
});

/// A `[` whose anchor tag is not known yet.
///
/// Nothing is written for it until the matching `]` arrives; the anchor is
/// then spliced in at `out_offset`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PendingLink {
    /// Where the opening tag goes in the output buffer.
    pub out_offset: usize,
    /// Start of the bracketed text in the source.
    pub label_start: usize,
    /// Formatting depth when the link opened.
    pub context_depth: usize,
}

/// Picks the raw target for a closed link: the inline `(url)` when present,
/// else the reference named by the bracketed text.
pub(crate) fn resolve_target<'a>(
    inline_url: Option<&'a str>,
    label: &str,
    links: &'a LinkTable,
) -> Option<&'a str> {
    inline_url.or_else(|| links.get(label))
}

/// Gives a raw link target a scheme: `http(s)://` targets are kept,
/// address-like targets get `mailto:`, anything else gets `http://`.
pub(crate) fn normalize_target(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else if EMAIL.is_match(raw) {
        format!("mailto:{raw}")
    } else {
        format!("http://{raw}")
    }
}

pub(crate) fn anchor_open(raw_target: &str, style: LinkStyle) -> String {
    let href = encode_attr(&normalize_target(raw_target));
    match style {
        LinkStyle::Href => format!("<a href=\"{href}\">"),
        LinkStyle::WindowOpen => {
            format!("<a href=\"#\" onclick=\"window.open('{href}', '_system')\">")
        }
    }
}

pub(crate) fn image(alt: &str, url: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\">",
        encode_attr(url),
        encode_attr(alt)
    )
}
