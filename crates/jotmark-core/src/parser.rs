use crate::block;
use crate::context::{FormattingContext, Marker};
use crate::escape::{encode_attr, ends_with_escape, trim_blank_lines};
use crate::link::{self, PendingLink};
use crate::options::Options;
use crate::references::{LinkTable, collect_references};
use crate::scanner::{Scanner, Token, TokenKind};

/// Converts `markdown` to an HTML string.
///
/// `[name]: url` definitions are collected into `links` before rendering, so
/// a caller-supplied table both seeds reference links and receives the
/// document's definitions. Without one a scratch table is used. `None`
/// options means [`Options::default`].
pub fn parse(markdown: &str, links: Option<&mut LinkTable>, options: Option<&Options>) -> String {
    let fallback = Options::default();
    let options = options.unwrap_or(&fallback);
    let mut scratch = LinkTable::new();
    let links = links.unwrap_or(&mut scratch);

    let body = collect_references(markdown, links);
    render(&body, links, options, 0)
}

/// [`parse`] with a fresh link table and default options.
pub fn to_html(markdown: &str) -> String {
    parse(markdown, None, None)
}

/// Renders already-collected text. Quote, list and heading handlers call
/// back into this one level deeper.
pub(crate) fn render(source: &str, links: &LinkTable, options: &Options, depth: usize) -> String {
    let source = trim_blank_lines(source);
    let mut renderer = Renderer::new(source, links, options, depth);
    let mut last = 0;

    for token in Scanner::with_options(source, options) {
        let prev = &source[last..token.span.start];
        last = token.span.end;

        if ends_with_escape(prev) {
            renderer.out.push_str(&prev[..prev.len() - 1]);
            renderer.out.push_str(token.text);
            continue;
        }
        renderer.out.push_str(prev);
        renderer.dispatch(token);
    }

    renderer.finish(&source[last..])
}

struct Renderer<'a> {
    source: &'a str,
    links: &'a LinkTable,
    options: &'a Options,
    depth: usize,
    out: String,
    context: FormattingContext,
    pending: Option<PendingLink>,
}

impl<'a> Renderer<'a> {
    fn new(source: &'a str, links: &'a LinkTable, options: &'a Options, depth: usize) -> Self {
        Self {
            source,
            links,
            options,
            depth,
            out: String::with_capacity(source.len() + source.len() / 4),
            context: FormattingContext::new(),
            pending: None,
        }
    }

    fn dispatch(&mut self, token: Token<'a>) {
        tracing::trace!(kind = ?token.kind, start = token.span.start, "token");
        let options = self.options;

        match token.kind {
            TokenKind::FencedCode { language, body } if options.code => {
                self.out.push_str(&block::code_block(body, language, options));
            }
            TokenKind::IndentedBlock => {
                self.out.push_str(&block::code_block(token.text, "poetry", options));
            }
            TokenKind::QuoteOrList if options.quotes_and_lists => {
                if self.nesting_allowed(token) {
                    let html = block::quote_or_list(token.text, self.links, options, self.depth);
                    self.out.push_str(&html);
                }
            }
            TokenKind::Image { alt, url } if options.images => {
                self.out.push_str(&link::image(alt, url));
            }
            TokenKind::LinkOpen if options.links => self.open_link(token),
            TokenKind::LinkClose { url } if options.links => self.close_link(token, url),
            TokenKind::SetextHeading { level, text } | TokenKind::AtxHeading { level, text }
                if options.headings =>
            {
                if self.nesting_allowed(token) {
                    let html = block::heading(level, text, self.links, options, self.depth);
                    self.out.push_str(&html);
                }
            }
            TokenKind::InlineCode { code } if options.code => {
                self.out.push_str(&block::inline_code(code, options));
            }
            TokenKind::ThematicBreak if options.inline => self.out.push_str("<hr />"),
            TokenKind::InlineMarker if options.inline => match Marker::from_token(token.text) {
                Some(marker) => self.out.push_str(self.context.toggle(marker)),
                // Trailing double space or a blank line.
                None => self.out.push_str("<br />"),
            },
            _ => self.out.push_str(token.text),
        }
    }

    /// Emits `token` literally and returns false once the depth limit is hit.
    fn nesting_allowed(&mut self, token: Token<'a>) -> bool {
        if self.depth < self.options.max_depth {
            return true;
        }
        tracing::debug!(depth = self.depth, "nesting limit reached, emitting block literally");
        self.out.push_str(token.text);
        false
    }

    fn open_link(&mut self, token: Token<'a>) {
        self.abandon_link();
        self.pending = Some(PendingLink {
            out_offset: self.out.len(),
            label_start: token.span.end,
            context_depth: self.context.depth(),
        });
    }

    fn close_link(&mut self, token: Token<'a>, url: Option<&'a str>) {
        let Some(pending) = self.pending.take() else {
            self.out.push_str(token.text);
            return;
        };

        let label = &self.source[pending.label_start..token.span.start];
        let Some(target) = link::resolve_target(url, label, self.links) else {
            tracing::debug!(label, "unresolved link reference");
            self.out.insert(pending.out_offset, '[');
            self.out.push_str(token.text);
            return;
        };

        let is_empty = self.out.len() == pending.out_offset;
        let closing = self.context.close_to(pending.context_depth);
        self.out.insert_str(
            pending.out_offset,
            &link::anchor_open(target, self.options.link_style),
        );
        self.out.push_str(&closing);
        if is_empty {
            self.out.push_str(&encode_attr(target));
        }
        self.out.push_str("</a>");
    }

    /// Turns a pending `[` back into literal text.
    fn abandon_link(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.out.insert(pending.out_offset, '[');
        }
    }

    fn finish(mut self, rest: &str) -> String {
        self.out.push_str(rest);
        self.abandon_link();
        let closing = self.context.drain();
        self.out.push_str(&closing);
        self.out.trim().to_string()
    }
}
