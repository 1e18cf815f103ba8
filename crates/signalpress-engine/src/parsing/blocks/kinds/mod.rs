//! Block types that own their syntax.
//!
//! Every delimiter the block parser knows about lives in one of these types;
//! `classify`, `open` and `builder` call into them instead of hardcoding
//! markers like `> ` or `` ``` ``.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use table::{Alignment, TableRow};
pub use thematic_break::ThematicBreak;
