//! Layout Bookkeeping
//!
//! Sizes the presentation layer needs that depend on both the terminal size
//! and the session content. Everything here is recomputed from scratch on
//! resize and whenever detail content changes, so there is no incremental
//! state to go stale.

use textwrap::wrap;

/// Horizontal margin around the main document, per side
pub const DOC_MARGIN: u16 = 2;

/// Status bar height
pub const STATUS_HEIGHT: u16 = 1;

/// Tab row plus the blank row under it
pub const TAB_HEIGHT: u16 = 2;

/// Lines per list row (title, description, gap)
pub const ITEM_HEIGHT: u16 = 3;

/// "Replies" header plus its underline
pub const REPLIES_HEADER_HEIGHT: u16 = 2;

/// Border and padding around the detail note viewport
pub const NOTE_BOX_CHROME: u16 = 4;

/// Extra horizontal chrome inside the compose dialog
const DIALOG_CHROME: u16 = 4;

/// Horizontal chrome of the detail note box
const NOTE_BOX_HORIZONTAL: u16 = 8;

/// Horizontal chrome of the parent quote
const QUOTE_HORIZONTAL: u16 = 7;

/// Wrap text to `width` columns, keeping blank lines
#[must_use]
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    text.split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Detail view split between parent quote, note viewport and reply list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailLayout {
    /// Wrap width for the note body
    pub text_width: u16,
    /// Wrap width for the parent quote
    pub quote_width: u16,
    /// Lines taken by the parent quote (0 without a parent)
    pub quote_height: u16,
    /// Visible lines of the note viewport
    pub viewport_height: u16,
    /// Note viewport plus border and padding
    pub note_box_height: u16,
    /// Lines left for the reply list
    pub reply_list_height: u16,
}

impl DetailLayout {
    /// Text widths for a terminal `width` columns wide
    #[must_use]
    pub fn widths(width: u16) -> (u16, u16) {
        (
            width.saturating_sub(NOTE_BOX_HORIZONTAL),
            width.saturating_sub(QUOTE_HORIZONTAL),
        )
    }

    /// Split `height` rows given the quote and note content line counts
    #[must_use]
    pub fn compute(width: u16, height: u16, quote_lines: usize, content_lines: usize) -> Self {
        let (text_width, quote_width) = Self::widths(width);
        // a long thread is clipped so the note box stays on screen
        let quote_height = u16::try_from(quote_lines)
            .unwrap_or(u16::MAX)
            .min(height / 3);

        let max_viewport = (height / 2).saturating_sub(NOTE_BOX_CHROME).max(1);
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        let viewport_height = content.clamp(1, max_viewport);
        let note_box_height = viewport_height + NOTE_BOX_CHROME;

        let reply_list_height = height
            .saturating_sub(quote_height)
            .saturating_sub(note_box_height)
            .saturating_sub(REPLIES_HEADER_HEIGHT)
            .saturating_sub(STATUS_HEIGHT);

        Self {
            text_width,
            quote_width,
            quote_height,
            viewport_height,
            note_box_height,
            reply_list_height,
        }
    }
}

/// Terminal-size dependent sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Terminal width
    pub width: u16,
    /// Terminal height
    pub height: u16,
    /// Height of the timeline list
    pub list_height: u16,
    /// Width of the compose text area
    pub compose_width: u16,
    /// Detail view split
    pub detail: DetailLayout,
}

impl Layout {
    /// Sizes for a terminal of `width` x `height`
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            list_height: height.saturating_sub(TAB_HEIGHT + STATUS_HEIGHT),
            compose_width: width.saturating_sub(DOC_MARGIN * 2 + DIALOG_CHROME),
            detail: DetailLayout::compute(width, height, 0, 0),
        }
    }

    /// Number of list rows that fit in `height` lines (at least one)
    #[must_use]
    pub fn rows_in(height: u16) -> usize {
        usize::from((height / ITEM_HEIGHT).max(1))
    }

    /// Timeline rows visible at once
    #[must_use]
    pub fn timeline_page(&self) -> usize {
        Self::rows_in(self.list_height)
    }

    /// Reply rows visible at once
    #[must_use]
    pub fn reply_page(&self) -> usize {
        Self::rows_in(self.detail.reply_list_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_keeps_blank_lines() {
        let lines = wrap_lines("one two three\n\nfour", 7);
        assert_eq!(lines, vec!["one two", "three", "", "four"]);
    }

    #[test]
    fn test_wrap_zero_width_does_not_panic() {
        assert!(!wrap_lines("abc", 0).is_empty());
    }

    #[test]
    fn test_timeline_sizes() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout.list_height, 21);
        assert_eq!(layout.compose_width, 72);
        assert_eq!(layout.timeline_page(), 7);
    }

    #[test]
    fn test_detail_split_gives_replies_the_rest() {
        let detail = DetailLayout::compute(80, 40, 3, 5);
        assert_eq!(detail.text_width, 72);
        assert_eq!(detail.quote_width, 73);
        assert_eq!(detail.viewport_height, 5);
        assert_eq!(detail.note_box_height, 9);
        // 40 - 3 - 9 - 2 - 1
        assert_eq!(detail.reply_list_height, 25);
    }

    #[test]
    fn test_detail_viewport_is_capped_at_half_height() {
        let detail = DetailLayout::compute(80, 30, 0, 200);
        assert_eq!(detail.viewport_height, 11);
        assert_eq!(detail.reply_list_height, 30 - 15 - 2 - 1);
    }

    #[test]
    fn test_detail_long_thread_keeps_note_box_visible() {
        let detail = DetailLayout::compute(80, 24, 60, 3);
        assert_eq!(detail.quote_height, 8);
        assert_eq!(detail.note_box_height, 7);
        // 24 - 8 - 7 - 2 - 1
        assert_eq!(detail.reply_list_height, 6);
    }

    #[test]
    fn test_detail_tiny_terminal_saturates() {
        let detail = DetailLayout::compute(5, 4, 10, 10);
        assert_eq!(detail.reply_list_height, 0);
        assert_eq!(detail.text_width, 0);
        assert_eq!(detail.viewport_height, 1);
    }
}
