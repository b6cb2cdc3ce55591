//! Theme and Colors
//!
//! One immutable [`Theme`] is built in `main` and passed by reference into
//! every draw function.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Accent pink (active tab, status line, detail border, selection)
pub const ACCENT: Color = Color::Indexed(205);

/// Muted gray (inactive tab, metadata, dialog and quote borders)
pub const MUTED: Color = Color::Indexed(240);

/// Dimmed accent for the description of the selected row
pub const ACCENT_DIM: Color = Color::Indexed(168);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Spinner frames, advanced by the session tick counter
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

// ============================================================================
// Theme
// ============================================================================

/// Every style the presentation layer uses
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Selected timeline tab
    pub active_tab: Style,
    /// Other timeline tabs
    pub inactive_tab: Style,
    /// Status message and account label
    pub status: Style,
    /// Counts, timestamps, banners, quote headers
    pub metadata: Style,
    /// Compose dialog border
    pub dialog_border: Style,
    /// Parent quote left rule
    pub quote_border: Style,
    /// Detail note box border
    pub detail_border: Style,
    /// "Replies" header
    pub replies_header: Style,
    /// Row title
    pub title: Style,
    /// Row description
    pub description: Style,
    /// Selected row title
    pub selected_title: Style,
    /// Selected row description
    pub selected_description: Style,
    /// Author line in the detail box
    pub author: Style,
    /// Error overlay text
    pub error: Style,
    /// Compose placeholder
    pub placeholder: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let muted = Style::default().fg(MUTED);
        Self {
            active_tab: Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            inactive_tab: muted,
            status: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            metadata: muted,
            dialog_border: muted,
            quote_border: muted,
            detail_border: Style::default().fg(ACCENT),
            replies_header: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default(),
            description: muted,
            selected_title: Style::default().fg(ACCENT),
            selected_description: Style::default().fg(ACCENT_DIM),
            author: Style::default().add_modifier(Modifier::BOLD),
            error: Style::default().fg(ERROR_RED),
            placeholder: muted.add_modifier(Modifier::ITALIC),
        }
    }
}

impl Theme {
    /// Spinner glyph for a tick counter
    #[must_use]
    pub fn spinner(frame: usize) -> &'static str {
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
    }
}
