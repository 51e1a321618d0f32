use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::options::Options;
use crate::span::Span;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($re).expect(concat!(stringify!($name), " regex")));
    };
}

pattern!(THEMATIC_BREAK, r"(?m)(?:^|\n+)(?:\n---+|\* \*(?: \*)+)\n");
pattern!(FENCED_CODE, r"(?m)^``` *(\w*)\n([\s\S]*?)\n```$");
pattern!(INDENTED_BLOCK, r"(?m)(?:(?:^|\n+)(?:\t| {2,}).+)+\n*");
pattern!(QUOTE_OR_LIST, r"(?m)(?:(?:^|\n)(?:[>*+-]|\d+\.)\s+.*)+");
pattern!(IMAGE, r"!\[([^\]]*?)\]\(([^)]+?)\)");
pattern!(LINK_OPEN, r"\[");
pattern!(LINK_CLOSE, r"\](?:\(([^)]+?)\))?");
pattern!(SETEXT_HEADING, r"(?m)(?:^|\n+)([^\s].*)\n(-{3,}|={3,})(?:\n+|$)");
pattern!(ATX_HEADING, r"(?m)(?:^|\n+)(#{1,6})\s*(.+)(?:\n+|$)");
pattern!(INLINE_CODE, r"`([^`].*?)`");
pattern!(INLINE_MARKER, r"  \n\n*|\n{2,}|__|\*\*|[_*]|~~");

/// What a [`Token`] is, with the pieces of it the handlers need.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind<'a> {
    ThematicBreak,
    FencedCode { language: &'a str, body: &'a str },
    IndentedBlock,
    QuoteOrList,
    Image { alt: &'a str, url: &'a str },
    LinkOpen,
    LinkClose { url: Option<&'a str> },
    SetextHeading { level: u8, text: &'a str },
    AtxHeading { level: u8, text: &'a str },
    InlineCode { code: &'a str },
    /// Emphasis, strong, strike and break markers; see [`Token::text`].
    InlineMarker,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
    /// The matched source text, including any newlines the token swallowed.
    pub text: &'a str,
}

type Matcher = for<'a> fn(&'a str, usize) -> Option<Token<'a>>;

// Priority order: at equal start offsets the earlier matcher wins.
const MATCHERS: [Matcher; 11] = [
    thematic_break,
    fenced_code,
    indented_block,
    quote_or_list,
    image,
    link_open,
    link_close,
    setext_heading,
    atx_heading,
    inline_code,
    inline_marker,
];

const INDENTED_BLOCK_SLOT: usize = 2;

fn token<'a>(caps: &Captures<'a>, kind: TokenKind<'a>) -> Option<Token<'a>> {
    let whole = caps.get(0)?;
    Some(Token {
        kind,
        span: whole.into(),
        text: whole.as_str(),
    })
}

fn find<'a>(re: &Regex, text: &'a str, from: usize, kind: TokenKind<'a>) -> Option<Token<'a>> {
    re.find_at(text, from).map(|m| Token {
        kind,
        span: m.into(),
        text: m.as_str(),
    })
}

fn group<'a>(caps: &Captures<'a>, idx: usize) -> &'a str {
    caps.get(idx).map_or("", |m| m.as_str())
}

fn thematic_break(text: &str, from: usize) -> Option<Token<'_>> {
    find(&THEMATIC_BREAK, text, from, TokenKind::ThematicBreak)
}

fn fenced_code(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = FENCED_CODE.captures_at(text, from)?;
    let kind = TokenKind::FencedCode {
        language: group(&caps, 1),
        body: group(&caps, 2),
    };
    token(&caps, kind)
}

fn indented_block(text: &str, from: usize) -> Option<Token<'_>> {
    find(&INDENTED_BLOCK, text, from, TokenKind::IndentedBlock)
}

fn quote_or_list(text: &str, from: usize) -> Option<Token<'_>> {
    find(&QUOTE_OR_LIST, text, from, TokenKind::QuoteOrList)
}

fn image(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = IMAGE.captures_at(text, from)?;
    let kind = TokenKind::Image {
        alt: group(&caps, 1),
        url: group(&caps, 2),
    };
    token(&caps, kind)
}

fn link_open(text: &str, from: usize) -> Option<Token<'_>> {
    find(&LINK_OPEN, text, from, TokenKind::LinkOpen)
}

fn link_close(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = LINK_CLOSE.captures_at(text, from)?;
    let kind = TokenKind::LinkClose {
        url: caps.get(1).map(|m| m.as_str()),
    };
    token(&caps, kind)
}

fn setext_heading(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = SETEXT_HEADING.captures_at(text, from)?;
    let level = if group(&caps, 2).starts_with('=') { 1 } else { 2 };
    let kind = TokenKind::SetextHeading {
        level,
        text: group(&caps, 1),
    };
    token(&caps, kind)
}

fn atx_heading(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = ATX_HEADING.captures_at(text, from)?;
    // At most six hashes, so the cast cannot truncate.
    let level = group(&caps, 1).len() as u8;
    let kind = TokenKind::AtxHeading {
        level,
        text: group(&caps, 2),
    };
    token(&caps, kind)
}

fn inline_code(text: &str, from: usize) -> Option<Token<'_>> {
    let caps = INLINE_CODE.captures_at(text, from)?;
    let kind = TokenKind::InlineCode {
        code: group(&caps, 1),
    };
    token(&caps, kind)
}

fn inline_marker(text: &str, from: usize) -> Option<Token<'_>> {
    find(&INLINE_MARKER, text, from, TokenKind::InlineMarker)
}

#[derive(Clone, Copy, Debug)]
enum Slot<'a> {
    Stale,
    Exhausted,
    Ready(Token<'a>),
}

/// Yields the tokens of `text` in document order.
///
/// Each step returns the leftmost match of any matcher at or after the end
/// of the previous token, breaking ties by matcher priority. A matcher's
/// last result is reused while it still lies ahead of the cursor, so each
/// matcher searches the text roughly once.
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    slots: [Slot<'a>; MATCHERS.len()],
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            slots: [Slot::Stale; MATCHERS.len()],
        }
    }

    /// A scanner that leaves out constructs whose detection `options` turns
    /// off, so their text is tokenized by the remaining matchers.
    pub fn with_options(text: &'a str, options: &Options) -> Self {
        let mut scanner = Self::new(text);
        if !options.indent_blocks {
            scanner.slots[INDENTED_BLOCK_SLOT] = Slot::Exhausted;
        }
        scanner
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos > self.text.len() {
            return None;
        }

        let mut best: Option<(usize, Token<'a>)> = None;
        for (idx, matcher) in MATCHERS.iter().enumerate() {
            let candidate = match self.slots[idx] {
                Slot::Ready(token) if token.span.start >= self.pos => Some(token),
                Slot::Exhausted => None,
                _ => {
                    let found = matcher(self.text, self.pos);
                    self.slots[idx] = found.map_or(Slot::Exhausted, Slot::Ready);
                    found
                }
            };
            if let Some(token) = candidate
                && best.is_none_or(|(_, current)| token.span.start < current.span.start)
            {
                best = Some((idx, token));
            }
        }

        let (idx, token) = best?;
        self.slots[idx] = Slot::Stale;
        self.pos = if token.span.is_empty() {
            let step = self.text[token.span.end..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            token.span.end + step
        } else {
            token.span.end
        };
        Some(token)
    }
}
