/// How a resolved link is written into the output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LinkStyle {
    /// `<a href="URL">`
    #[default]
    Href,
    /// `<a href="#" onclick="window.open('URL', '_system')">`, for hosts that
    /// intercept navigation themselves.
    WindowOpen,
}

/// Feature toggles for one top-level [`parse`](crate::parse) call.
///
/// The same value is handed unchanged to every nested render. Constructs whose
/// toggle is off are still recognised by the scanner, but are written out as
/// their literal source text.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    pub indent_blocks: bool,
    pub links: bool,
    pub images: bool,
    pub headings: bool,
    pub code: bool,
    /// Substituted verbatim for every code block and inline code span.
    pub replace_code_with_emoji: Option<String>,
    pub inline: bool,
    pub quotes_and_lists: bool,
    pub link_style: LinkStyle,
    /// Nesting limit for quotes, lists and headings. Deeper blocks are
    /// emitted as literal text.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent_blocks: true,
            links: true,
            images: true,
            headings: true,
            code: true,
            replace_code_with_emoji: None,
            inline: true,
            quotes_and_lists: true,
            link_style: LinkStyle::default(),
            max_depth: 16,
        }
    }
}
