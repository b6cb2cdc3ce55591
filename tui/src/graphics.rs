//! Inline Emoji Graphics
//!
//! Sixel images cannot go through ratatui's cell buffer. The draw pass
//! leaves a two-cell blank placeholder for each cached emoji and records a
//! [`GlyphPlacement`]; once the frame is flushed the App writes each blob
//! straight to the terminal at that position.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use tracing::debug;

use misskey_core::ImageCache;

/// Cells reserved for one emoji
pub const GLYPH_WIDTH: u16 = 2;

/// Where to paint one emoji, in terminal cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphPlacement {
    /// Column
    pub x: u16,
    /// Row
    pub y: u16,
    /// Canonical short code
    pub name: String,
}

/// Write every placement whose blob is cached
///
/// The cursor is moved for each glyph; ratatui repositions it on the next
/// draw.
pub fn write_glyphs<W: Write>(
    out: &mut W,
    glyphs: &[GlyphPlacement],
    images: &ImageCache,
) -> io::Result<()> {
    let mut written = 0usize;
    for glyph in glyphs {
        let Some(blob) = images.get(&glyph.name) else {
            continue;
        };
        queue!(out, MoveTo(glyph.x, glyph.y))?;
        out.write_all(blob)?;
        written += 1;
    }
    if written > 0 {
        out.flush()?;
        debug!(count = written, "Painted emoji glyphs");
    }
    Ok(())
}
