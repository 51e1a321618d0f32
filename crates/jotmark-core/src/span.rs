use std::ops::Range;

/// Byte range of a token within the text being scanned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted span {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn span_length_and_range() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(&"abcdefg"[span.range()], "cde");
        assert!(Span::new(4, 4).is_empty());
    }
}
