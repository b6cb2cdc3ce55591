//! Widgets
//!
//! - [`TextBlock`]: scrollable pre-wrapped text with emoji placeholders
//! - [`NoteList`]: three-line note rows driven by a session cursor

pub mod note_list;
pub mod text_block;

pub use note_list::NoteList;
pub use text_block::{TextBlock, TextBlockState};
