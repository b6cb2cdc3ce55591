//! Detail screen: parent quote, note box, replies

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use ratatui::Frame;

use misskey_core::layout::REPLIES_HEADER_HEIGHT;
use misskey_core::{DetailFocus, DetailLine, LineKind, Session};

use super::{document_area, draw_status_bar};
use crate::graphics::GlyphPlacement;
use crate::theme::Theme;
use crate::widgets::{NoteList, TextBlock, TextBlockState};

const REPLIES_TITLE: &str = " Replies ";

pub(super) fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    theme: &Theme,
) -> Vec<GlyphPlacement> {
    let Some(detail) = session.detail() else {
        return Vec::new();
    };
    let sizes = session.layout().detail;
    let doc = document_area(area);
    let mut glyphs = Vec::new();
    let mut y = doc.y;

    // Parent quote (or whole thread) behind a left rule
    if sizes.quote_height > 0 {
        let quote_area = Rect {
            x: doc.x + 1,
            y,
            width: doc.width.saturating_sub(1),
            height: sizes.quote_height,
        }
        .intersection(doc);
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(theme.quote_border)
            .padding(Padding::left(1));
        let inner = block.inner(quote_area);
        frame.render_widget(block, quote_area);
        glyphs.extend(draw_lines(frame, inner, &detail.quote, 0, session, theme));
        y += sizes.quote_height;
    }

    // Note box
    let box_area = Rect {
        x: doc.x,
        y,
        width: doc.width,
        height: sizes.note_box_height,
    }
    .intersection(doc);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.detail_border)
        .padding(Padding::uniform(1));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    glyphs.extend(draw_lines(
        frame,
        inner,
        &detail.content,
        detail.scroll,
        session,
        theme,
    ));
    y += sizes.note_box_height;

    // Replies header
    let header = Rect {
        x: doc.x,
        y,
        width: (REPLIES_TITLE.len() as u16).min(doc.width),
        height: REPLIES_HEADER_HEIGHT,
    }
    .intersection(doc);
    if !header.is_empty() {
        frame.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.metadata),
            header,
        );
        frame.buffer_mut().set_stringn(
            header.x,
            header.y,
            REPLIES_TITLE,
            usize::from(header.width),
            theme.replies_header,
        );
    }
    y += REPLIES_HEADER_HEIGHT;

    // Reply list
    let list_area = Rect {
        x: doc.x,
        y,
        width: doc.width,
        height: sizes.reply_list_height,
    }
    .intersection(doc);
    if !list_area.is_empty() {
        frame.render_widget(
            NoteList::new(&detail.replies, detail.cursor, theme)
                .highlight(detail.focus == DetailFocus::Replies),
            list_area,
        );
    }

    draw_status_bar(frame.buffer_mut(), area, session, theme);
    glyphs
}

fn line_style(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Banner | LineKind::Metadata => theme.metadata,
        LineKind::Author => theme.author,
        LineKind::Body | LineKind::Reactions => theme.title,
    }
}

fn draw_lines(
    frame: &mut Frame,
    area: Rect,
    lines: &[DetailLine],
    scroll: usize,
    session: &Session,
    theme: &Theme,
) -> Vec<GlyphPlacement> {
    if area.is_empty() {
        return Vec::new();
    }
    let styled = lines
        .iter()
        .map(|(kind, text)| (text.as_str(), line_style(*kind, theme)))
        .collect();
    let mut state = TextBlockState {
        scroll_offset: scroll,
        ..TextBlockState::default()
    };
    frame.render_stateful_widget(
        TextBlock::new(styled).images(session.images()),
        area,
        &mut state,
    );
    state.glyphs
}
