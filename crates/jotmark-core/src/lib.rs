//! Small, single-pass Markdown to HTML conversion for embedding in other
//! tools, e.g. rendering user comments.
//!
//! ```
//! assert_eq!(jotmark_core::to_html("Hello **world**"), "Hello <strong>world</strong>");
//! ```

mod block;
mod context;
mod escape;
mod link;
mod options;
mod parser;
mod references;
mod scanner;
mod span;

pub use context::{FormattingContext, Marker};
pub use escape::{encode_attr, outdent};
pub use options::{LinkStyle, Options};
pub use parser::{parse, to_html};
pub use references::{LinkTable, collect_references};
pub use scanner::{Scanner, Token, TokenKind};
pub use span::Span;
