//! NoteList Widget
//!
//! Fixed-height rows (title, one line of description, gap) for timeline
//! notes and detail replies. Selection and scroll offset come from the
//! session's `ListCursor`; the widget only draws.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use misskey_core::layout::ITEM_HEIGHT;
use misskey_core::{ListCursor, Note};

use crate::theme::Theme;

/// Left gutter; the selected row shows a bar in it
const GUTTER: &str = "│ ";
const GUTTER_WIDTH: u16 = 2;

/// A list of notes
pub struct NoteList<'a> {
    notes: &'a [Note],
    cursor: ListCursor,
    theme: &'a Theme,
    highlight: bool,
}

impl<'a> NoteList<'a> {
    pub fn new(notes: &'a [Note], cursor: ListCursor, theme: &'a Theme) -> Self {
        Self {
            notes,
            cursor,
            theme,
            highlight: true,
        }
    }

    /// Whether to mark the selected row
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

/// First line of a description, newlines folded into spaces
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Widget for NoteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= GUTTER_WIDTH || area.height == 0 {
            return;
        }
        let rows = usize::from((area.height / ITEM_HEIGHT).max(1));
        let text_x = area.x + GUTTER_WIDTH;
        let text_width = usize::from(area.width - GUTTER_WIDTH);

        for (i, note) in self
            .notes
            .iter()
            .enumerate()
            .skip(self.cursor.offset())
            .take(rows)
        {
            let top = area.y + (i - self.cursor.offset()) as u16 * ITEM_HEIGHT;
            let selected = self.highlight && i == self.cursor.selected();
            let (title_style, description_style) = if selected {
                (self.theme.selected_title, self.theme.selected_description)
            } else {
                (self.theme.title, self.theme.description)
            };

            if top < area.bottom() {
                if selected {
                    buf.set_string(area.x, top, GUTTER, title_style);
                }
                buf.set_stringn(text_x, top, note.title(), text_width, title_style);
            }
            if top + 1 < area.bottom() {
                if selected {
                    buf.set_string(area.x, top + 1, GUTTER, title_style);
                }
                buf.set_stringn(
                    text_x,
                    top + 1,
                    one_line(note.description()),
                    text_width,
                    description_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use misskey_core::User;
    use pretty_assertions::assert_eq;

    fn note(id: &str, username: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
            user: User {
                username: username.to_string(),
                ..User::default()
            },
            ..Note::default()
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_rows_and_selection_bar() {
        let notes = vec![note("1", "alice", "hello\nthere"), note("2", "bob", "yo")];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);

        NoteList::new(&notes, ListCursor::default(), &theme).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "│ @alice");
        assert_eq!(row(&buf, 1), "│ hello there");
        assert_eq!(row(&buf, 2), "");
        assert_eq!(row(&buf, 3), "  @bob");
        assert_eq!(row(&buf, 4), "  yo");
    }
}
