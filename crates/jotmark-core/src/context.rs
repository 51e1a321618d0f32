/// Inline formatting that spans text and must be closed again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Marker {
    Emphasis,
    Strong,
    Strike,
}

impl Marker {
    /// Classifies a marker token. `*` and `_` spellings map to the same kind.
    pub fn from_token(text: &str) -> Option<Self> {
        match text {
            "*" | "_" => Some(Self::Emphasis),
            "**" | "__" => Some(Self::Strong),
            "~~" => Some(Self::Strike),
            _ => None,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Emphasis => "<em>",
            Self::Strong => "<strong>",
            Self::Strike => "<s>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Emphasis => "</em>",
            Self::Strong => "</strong>",
            Self::Strike => "</s>",
        }
    }
}

/// Stack of open inline markers for one render.
#[derive(Clone, Debug, Default)]
pub struct FormattingContext {
    stack: Vec<Marker>,
}

impl FormattingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes `marker` if it is on top of the stack, otherwise opens it.
    /// Returns the tag to emit.
    pub fn toggle(&mut self, marker: Marker) -> &'static str {
        if self.stack.last() == Some(&marker) {
            self.stack.pop();
            marker.close_tag()
        } else {
            self.stack.push(marker);
            marker.open_tag()
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Closes every marker above `depth`, innermost first.
    pub fn close_to(&mut self, depth: usize) -> String {
        let mut out = String::new();
        while self.stack.len() > depth {
            if let Some(marker) = self.stack.pop() {
                out.push_str(marker.close_tag());
            }
        }
        out
    }

    /// Closes everything still open.
    pub fn drain(&mut self) -> String {
        self.close_to(0)
    }
}
