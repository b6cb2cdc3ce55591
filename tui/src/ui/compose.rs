//! Compose dialog: optional reply quote, text area, key help

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Widget};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use misskey_core::layout::wrap_lines;
use misskey_core::Session;

use crate::theme::Theme;

/// Visible rows of the text area
const TEXTAREA_HEIGHT: u16 = 6;

/// Border plus vertical padding of the dialog
const DIALOG_VERTICAL_CHROME: u16 = 4;

const HELP: &str = "ctrl+s submit • esc cancel";

pub(super) fn draw(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let compose = session.compose();
    let inner_width = session.layout().compose_width.min(area.width.saturating_sub(2));
    if inner_width < 2 {
        return;
    }

    // quote rows left once the text area, help and the quote gap fit
    let quote_room = area
        .height
        .saturating_sub(DIALOG_VERTICAL_CHROME + TEXTAREA_HEIGHT + 3);
    let quote: Vec<String> = compose
        .reply_to
        .as_ref()
        .map(|note| {
            let mut lines = vec![format!("@{}", note.user.username)];
            lines.extend(wrap_lines(&note.text, inner_width.saturating_sub(2)));
            truncate_lines(lines, usize::from(quote_room))
        })
        .unwrap_or_default();
    let quote_height = if quote.is_empty() {
        0
    } else {
        quote.len() as u16 + 1
    };

    // quote, text area, gap, help
    let content_height = quote_height + TEXTAREA_HEIGHT + 2;
    let dialog = centered(area, inner_width + 2, content_height + DIALOG_VERTICAL_CHROME);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.dialog_border)
        .padding(Padding::vertical(1));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let buf = frame.buffer_mut();
    let mut y = inner.y;

    if !quote.is_empty() {
        let quote_area = Rect::new(inner.x, y, inner.width, quote.len() as u16).intersection(inner);
        let quote_block = Block::default()
            .borders(Borders::LEFT)
            .border_style(theme.quote_border)
            .padding(Padding::left(1));
        let text_area = quote_block.inner(quote_area);
        quote_block.render(quote_area, buf);
        for (i, line) in quote.iter().enumerate().take(usize::from(text_area.height)) {
            let style = if i == 0 { theme.metadata } else { theme.title };
            buf.set_stringn(
                text_area.x,
                text_area.y + i as u16,
                line,
                usize::from(text_area.width),
                style,
            );
        }
        y += quote_height;
    }

    let textarea = Rect::new(inner.x, y, inner.width, TEXTAREA_HEIGHT).intersection(inner);
    if textarea.is_empty() {
        return;
    }
    let cursor = if compose.text.is_empty() {
        buf.set_stringn(
            textarea.x,
            textarea.y,
            compose.placeholder(),
            usize::from(textarea.width),
            theme.placeholder,
        );
        (textarea.x, textarea.y)
    } else {
        draw_text(buf, textarea, &compose.text, theme)
    };

    let help_y = textarea.bottom() + 1;
    if help_y < inner.bottom() {
        buf.set_stringn(inner.x, help_y, HELP, usize::from(inner.width), theme.metadata);
    }

    frame.set_cursor_position(cursor);
}

/// Draw the tail of the draft, returning where the cursor goes
fn draw_text(buf: &mut Buffer, area: Rect, text: &str, theme: &Theme) -> (u16, u16) {
    // leave a column for the cursor
    let lines = hard_wrap(text, usize::from(area.width.saturating_sub(1)));
    let visible = usize::from(area.height);
    let skip = lines.len().saturating_sub(visible);

    let mut cursor = (area.x, area.y);
    for (i, (line, width)) in lines.iter().skip(skip).enumerate() {
        let y = area.y + i as u16;
        buf.set_stringn(area.x, y, line, usize::from(area.width), theme.title);
        cursor = (area.x + *width as u16, y);
    }
    cursor
}

/// Split on newlines, then at `width` columns, keeping every character
fn hard_wrap(text: &str, width: usize) -> Vec<(String, usize)> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for source in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for c in source.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                lines.push((std::mem::take(&mut line), used));
                used = 0;
            }
            line.push(c);
            used += w;
        }
        lines.push((line, used));
    }
    lines
}

/// Keep at most `max` lines, marking a cut with `…`
fn truncate_lines(mut lines: Vec<String>, max: usize) -> Vec<String> {
    if lines.len() <= max {
        return lines;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        last.pop();
        last.push('…');
    }
    lines
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
