//! Drawing
//!
//! Pure functions from a [`Session`] to a ratatui frame. The only thing that
//! flows back out is the list of emoji placements the App paints after the
//! frame is flushed.
//!
//! Precedence: an error replaces everything, then the loading spinner, then
//! the current mode.

mod compose;
mod detail;
mod timeline;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use misskey_core::layout::{DOC_MARGIN, STATUS_HEIGHT};
use misskey_core::{Mode, Session};

use crate::graphics::GlyphPlacement;
use crate::theme::Theme;

/// Draw the whole screen, returning emoji placements for the overlay pass
pub fn draw(frame: &mut Frame, session: &Session, theme: &Theme) -> Vec<GlyphPlacement> {
    let area = frame.area();

    if let Some(error) = session.error() {
        draw_error(frame, area, error, theme);
        return Vec::new();
    }
    if session.loading() {
        draw_loading(frame.buffer_mut(), area, session.spinner_frame(), theme);
        return Vec::new();
    }

    match session.mode() {
        Mode::Timeline => {
            timeline::draw(frame, area, session, theme);
            Vec::new()
        }
        Mode::Posting => {
            compose::draw(frame, area, session, theme);
            Vec::new()
        }
        Mode::Detail => detail::draw(frame, area, session, theme),
    }
}

fn draw_error(frame: &mut Frame, area: Rect, error: &str, theme: &Theme) {
    let text = format!("\nAn error occurred: {error}\n\nPress any key to return.");
    frame.render_widget(
        Paragraph::new(text)
            .style(theme.error)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_loading(buf: &mut Buffer, area: Rect, frame: usize, theme: &Theme) {
    if area.height < 3 {
        return;
    }
    let text = format!("   {} Loading...", Theme::spinner(frame));
    buf.set_stringn(area.x, area.y + 2, text, usize::from(area.width), theme.status);
}

/// Content area between the horizontal document margins, above the status bar
fn document_area(area: Rect) -> Rect {
    Rect {
        x: area.x + DOC_MARGIN.min(area.width / 2),
        y: area.y,
        width: area.width.saturating_sub(DOC_MARGIN * 2),
        height: area.height.saturating_sub(STATUS_HEIGHT),
    }
}

/// Status message on the left, account on the right, on the last row
fn draw_status_bar(buf: &mut Buffer, area: Rect, session: &Session, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let y = area.bottom() - 1;
    let account = session.account();
    let account_width = account.width() as u16;

    if let Some(status) = session.status() {
        let room = area.width.saturating_sub(account_width + 1);
        buf.set_stringn(area.x, y, &status.text, usize::from(room), theme.status);
    }
    if account_width <= area.width {
        buf.set_string(area.right() - account_width, y, account, theme.status);
    }
}
