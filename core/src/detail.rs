//! Detail View Composition
//!
//! Builds the text of the detail view from a selected note: optional
//! "reshared by" banner, author line, body, and a metadata block of
//! reactions, counts and a local timestamp.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::layout::wrap_lines;
use crate::model::{is_heart_reaction, Note, HEART};

/// Separator between reaction entries
const REACTION_SEPARATOR: &str = " | ";

/// Timestamp format for the metadata block
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregate reactions into one line
///
/// Heart-equivalent reactions are summed into a leading `❤️ n` entry; the
/// rest follow individually in name order.
#[must_use]
pub fn reaction_summary(reactions: &BTreeMap<String, u64>) -> String {
    let mut hearts = 0;
    let mut others = Vec::new();

    for (name, count) in reactions {
        if is_heart_reaction(name) {
            hearts += count;
        } else {
            others.push(format!("{name} {count}"));
        }
    }

    let mut entries = Vec::with_capacity(others.len() + 1);
    if hearts > 0 {
        entries.push(format!("{HEART} {hearts}"));
    }
    entries.extend(others);
    entries.join(REACTION_SEPARATOR)
}

/// RFC 3339 timestamp in local time, or empty when it does not parse
#[must_use]
pub fn format_timestamp(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|t| t.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// What a detail line is, for styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `Reshared by` banner or `Replying to` quote header
    Banner,
    /// Author title
    Author,
    /// Note text
    Body,
    /// Reaction summary
    Reactions,
    /// Counts and timestamp
    Metadata,
}

/// One wrapped line of detail content
pub type DetailLine = (LineKind, String);

fn tagged(kind: LineKind, lines: Vec<String>) -> impl Iterator<Item = DetailLine> {
    lines.into_iter().map(move |line| (kind, line))
}

/// Text of the selected note, ready to wrap
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteView {
    /// `Reshared by <name>` for pure reshares
    pub banner: Option<String>,
    /// Author title of the display target
    pub author: String,
    /// Body text of the display target
    pub body: String,
    /// Reaction summary line
    pub reactions: String,
    /// Reply/reshare count line
    pub counts: String,
    /// Local creation time
    pub timestamp: String,
}

impl NoteView {
    /// Compose the view for `note`, applying reshare substitution
    #[must_use]
    pub fn compose(note: &Note) -> Self {
        let target = note.display_target();
        let banner = note
            .is_pure_reshare()
            .then(|| format!("Reshared by {}", note.user.short_name()));

        Self {
            banner,
            author: target.user.title(),
            body: target.text.clone(),
            reactions: reaction_summary(&target.reactions),
            counts: format!(
                "Replies: {}, Reshares: {}",
                target.replies_count, target.renote_count
            ),
            timestamp: format_timestamp(&target.created_at),
        }
    }

    /// All lines wrapped to `width`
    ///
    /// Layout: banner?, author, body..., blank, reactions, counts, time.
    #[must_use]
    pub fn lines(&self, width: u16) -> Vec<DetailLine> {
        let mut lines = Vec::new();
        if let Some(banner) = &self.banner {
            lines.extend(tagged(LineKind::Banner, wrap_lines(banner, width)));
        }
        lines.extend(tagged(LineKind::Author, wrap_lines(&self.author, width)));
        lines.extend(tagged(LineKind::Body, wrap_lines(&self.body, width)));
        lines.push((LineKind::Body, String::new()));
        lines.push((LineKind::Reactions, self.reactions.clone()));
        lines.push((LineKind::Metadata, self.counts.clone()));
        lines.push((LineKind::Metadata, self.timestamp.clone()));
        lines
    }
}

/// Parent quote lines: `Replying to @handle` then the wrapped text
#[must_use]
pub fn quote_lines(parent: &Note, width: u16) -> Vec<DetailLine> {
    let target = parent.display_target();
    let mut lines = vec![(
        LineKind::Banner,
        format!("Replying to @{}", target.user.username),
    )];
    lines.extend(tagged(LineKind::Body, wrap_lines(&target.text, width)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{note, reshare, user};
    use pretty_assertions::assert_eq;

    fn reactions(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_reaction_summary_sums_hearts_first() {
        let summary = reaction_summary(&reactions(&[
            ("👍", 2),
            ("❤", 3),
            (":blobcat@.:", 1),
            ("🎉", 1),
            ("❤️", 1),
        ]));
        assert_eq!(summary, "❤️ 5 | 🎉 1 | 👍 2");
    }

    #[test]
    fn test_reaction_summary_without_hearts() {
        assert_eq!(reaction_summary(&reactions(&[("👍", 1)])), "👍 1");
        assert_eq!(reaction_summary(&BTreeMap::new()), "");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("not a time"), "");
        let formatted = format_timestamp("2024-03-01T12:00:00.000Z");
        assert_eq!(formatted.len(), 19);
        assert!(formatted.starts_with("2024-0"));
    }

    #[test]
    fn test_compose_plain_note() {
        let mut n = note("n1", user("alice", Some("Alice")), "hello");
        n.replies_count = 2;
        n.renote_count = 1;
        n.reactions = reactions(&[("❤", 4)]);

        let view = NoteView::compose(&n);
        assert_eq!(view.banner, None);
        assert_eq!(view.author, "Alice (@alice)");
        assert_eq!(view.body, "hello");
        assert_eq!(view.reactions, "❤️ 4");
        assert_eq!(view.counts, "Replies: 2, Reshares: 1");
    }

    #[test]
    fn test_compose_pure_reshare_uses_inner_note() {
        let inner = note("n1", user("alice", None), "inner text");
        let wrapper = reshare("w1", user("bob", Some("Bob")), inner);

        let view = NoteView::compose(&wrapper);
        assert_eq!(view.banner.as_deref(), Some("Reshared by Bob"));
        assert_eq!(view.author, "@alice");
        assert_eq!(view.body, "inner text");
        assert_eq!(view.lines(40)[0], (LineKind::Banner, "Reshared by Bob".to_string()));
    }

    #[test]
    fn test_lines_layout() {
        let view = NoteView::compose(&note("n1", user("a", None), "x"));
        let lines = view.lines(40);
        assert_eq!(lines[0], (LineKind::Author, "@a".to_string()));
        assert_eq!(lines[1], (LineKind::Body, "x".to_string()));
        assert_eq!(lines[2], (LineKind::Body, String::new()));
        assert_eq!(lines[5].0, LineKind::Metadata);
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_quote_lines() {
        let parent = note("p1", user("carol", None), "parent text");
        assert_eq!(
            quote_lines(&parent, 40),
            vec![
                (LineKind::Banner, "Replying to @carol".to_string()),
                (LineKind::Body, "parent text".to_string()),
            ]
        );
    }
}
