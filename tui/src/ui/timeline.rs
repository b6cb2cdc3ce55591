//! Timeline screen: tab row, note list, status bar

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;

use misskey_core::layout::TAB_HEIGHT;
use misskey_core::{Session, TimelineKind};

use super::{document_area, draw_status_bar};
use crate::theme::Theme;
use crate::widgets::NoteList;

pub(super) fn draw(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    draw_tabs(frame.buffer_mut(), area, session.timeline(), theme);

    let doc = document_area(area);
    let list_area = Rect {
        y: doc.y + TAB_HEIGHT.min(doc.height),
        height: doc.height.saturating_sub(TAB_HEIGHT),
        ..doc
    };
    frame.render_widget(
        NoteList::new(session.notes(), session.cursor(), theme),
        list_area,
    );

    draw_status_bar(frame.buffer_mut(), area, session, theme);
}

fn draw_tabs(buf: &mut Buffer, area: Rect, active: TimelineKind, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let mut x = area.x;
    for kind in TimelineKind::ALL {
        let style = if kind == active {
            theme.active_tab
        } else {
            theme.inactive_tab
        };
        let label = format!(" {} ", kind.label());
        let room = usize::from(area.right().saturating_sub(x));
        x = buf.set_stringn(x, area.y, label, room, style).0;
    }
}
