//! TextBlock Widget
//!
//! A borderless, scrollable block of pre-wrapped lines. Custom emoji short
//! codes whose image is cached are drawn as blank placeholders and reported
//! back through the state so the App can paint them afterwards.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;

use misskey_core::emoji::{canonical_name, find_shortcodes};
use misskey_core::ImageCache;

use crate::graphics::{GlyphPlacement, GLYPH_WIDTH};

/// State for a scrollable text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Emoji placeholders drawn in the last render
    pub glyphs: Vec<GlyphPlacement>,
}

/// A borderless, scrollable text block
pub struct TextBlock<'a> {
    lines: Vec<(&'a str, Style)>,
    images: Option<&'a ImageCache>,
}

impl<'a> TextBlock<'a> {
    pub fn new(lines: Vec<(&'a str, Style)>) -> Self {
        Self {
            lines,
            images: None,
        }
    }

    /// Replace cached short codes with placeholders
    pub fn images(mut self, images: &'a ImageCache) -> Self {
        self.images = Some(images);
        self
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.glyphs.clear();

        let max_scroll = self.lines.len().saturating_sub(area.height as usize);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        for (i, (line, style)) in self
            .lines
            .iter()
            .skip(state.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + i as u16;
            match self.images {
                Some(images) => render_with_glyphs(line, *style, area, y, buf, images, state),
                None => {
                    buf.set_stringn(area.x, y, line, area.width as usize, *style);
                }
            }
        }
    }
}

fn render_with_glyphs(
    line: &str,
    style: Style,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    images: &ImageCache,
    state: &mut TextBlockState,
) {
    let right = area.x + area.width;
    let mut x = area.x;
    let mut rest = 0;

    for code in find_shortcodes(line) {
        let name = canonical_name(code.name);
        if !images.contains(name) {
            continue;
        }
        let before = &line[rest..code.start];
        x = buf
            .set_stringn(x, y, before, right.saturating_sub(x) as usize, style)
            .0;
        if x + GLYPH_WIDTH > right {
            return;
        }
        state.glyphs.push(GlyphPlacement {
            x,
            y,
            name: name.to_string(),
        });
        x = buf
            .set_stringn(x, y, "  ", GLYPH_WIDTH as usize, style)
            .0;
        rest = code.end;
    }

    buf.set_stringn(x, y, &line[rest..], right.saturating_sub(x) as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_scroll_is_clamped() {
        let lines = vec![("a", Style::default()), ("b", Style::default())];
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState {
            scroll_offset: 10,
            ..TextBlockState::default()
        };
        TextBlock::new(lines).render(area, &mut buf, &mut state);
        assert_eq!(state.scroll_offset, 1);
        assert_eq!(row(&buf, 0), "b   ");
    }

    #[test]
    fn test_cached_emoji_becomes_placeholder() {
        let mut images = ImageCache::new();
        images.insert("blob", b"x".to_vec());
        let lines = vec![("hi :blob: :other: ok", Style::default())];
        let area = Rect::new(1, 3, 30, 1);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();

        TextBlock::new(lines)
            .images(&images)
            .render(area, &mut buf, &mut state);

        assert_eq!(
            state.glyphs,
            vec![GlyphPlacement {
                x: 4,
                y: 3,
                name: "blob".to_string()
            }]
        );
        assert!(row(&buf, 3).starts_with("hi    :other: ok"));
    }
}
