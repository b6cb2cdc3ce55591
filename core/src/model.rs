//! Feed Data Model
//!
//! Notes, users and timeline selectors as the remote API returns them, plus
//! the reshare-substitution rule every consumer goes through.
//!
//! # Reshare substitution
//!
//! A note that wraps another note and has no text of its own is a *pure
//! reshare*. Everything that renders a note or uses it as a fetch/write
//! target calls [`Note::display_target`] first, so the inner note's author,
//! body and id are used while the wrapper only contributes the resharer's
//! identity for banner lines.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// The reaction sent by the react key
pub const HEART: &str = "❤️";

/// Heart without the emoji variation selector, as some servers report it
const BARE_HEART: &str = "❤";

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An account on the instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account id
    pub id: String,
    /// Handle without the leading `@`
    pub username: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Remote host for federated accounts, `None` for local ones
    #[serde(default)]
    pub host: Option<String>,
}

impl User {
    /// Display name if set, otherwise `@handle`
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("@{}", self.username),
        }
    }

    /// Display name if set, otherwise the bare handle
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// `Name (@handle)` or `@handle`
    #[must_use]
    pub fn title(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{} (@{})", name, self.username),
            _ => format!("@{}", self.username),
        }
    }
}

/// A single post in the feed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note id
    pub id: String,
    /// Creation time, RFC 3339
    #[serde(default)]
    pub created_at: String,
    /// Own text; empty for pure reshares
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    /// Author
    pub user: User,
    /// Id of the note this one replies to
    #[serde(default)]
    pub reply_id: Option<String>,
    /// The reshared note, if any
    #[serde(default)]
    pub renote: Option<Box<Note>>,
    /// Reaction name to count
    #[serde(default)]
    pub reactions: BTreeMap<String, u64>,
    /// Number of replies
    #[serde(default)]
    pub replies_count: u64,
    /// Number of reshares
    #[serde(default)]
    pub renote_count: u64,
    /// Custom emoji used in reactions, name to image URL
    #[serde(default)]
    pub reaction_emojis: HashMap<String, String>,
}

impl Note {
    /// A reshare wrapper with no text of its own
    #[must_use]
    pub fn is_pure_reshare(&self) -> bool {
        self.renote.is_some() && self.text.is_empty()
    }

    /// The note to render and to target: the inner note of a pure reshare,
    /// otherwise the note itself
    #[must_use]
    pub fn display_target(&self) -> &Note {
        match &self.renote {
            Some(inner) if self.text.is_empty() => inner,
            _ => self,
        }
    }

    /// List row title
    ///
    /// Pure reshares show the inner author followed by a `reshared` banner
    /// naming the resharer.
    #[must_use]
    pub fn title(&self) -> String {
        if self.is_pure_reshare() {
            format!(
                "{} · {} reshared",
                self.display_target().user.title(),
                self.user.short_name()
            )
        } else {
            self.user.title()
        }
    }

    /// List row description: the display target's text
    #[must_use]
    pub fn description(&self) -> &str {
        &self.display_target().text
    }

    /// Custom emoji URLs carried by this note and its reshared note
    pub fn carried_emojis(&self) -> impl Iterator<Item = (&String, &String)> {
        self.reaction_emojis.iter().chain(
            self.renote
                .iter()
                .flat_map(|inner| inner.reaction_emojis.iter()),
        )
    }
}

/// Whether a reaction name counts toward the heart bucket
///
/// The heart itself and every custom emoji (`:name:`) are heart-equivalent.
#[must_use]
pub fn is_heart_reaction(name: &str) -> bool {
    name == HEART
        || name == BARE_HEART
        || (name.len() > 1 && name.starts_with(':') && name.ends_with(':'))
}

/// One of the four feed scopes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimelineKind {
    /// Followed accounts
    #[default]
    Home,
    /// Local instance
    Local,
    /// Home plus local
    Social,
    /// Everything the instance knows about
    Global,
}

impl TimelineKind {
    /// All selectors in tab order
    pub const ALL: [TimelineKind; 4] = [
        TimelineKind::Home,
        TimelineKind::Local,
        TimelineKind::Social,
        TimelineKind::Global,
    ];

    /// API endpoint path (relative to `/api/`)
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Home => "notes/timeline",
            Self::Local => "notes/local-timeline",
            Self::Social => "notes/hybrid-timeline",
            Self::Global => "notes/global-timeline",
        }
    }

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Local => "LOCAL",
            Self::Social => "SOCIAL",
            Self::Global => "GLOBAL",
        }
    }
}

impl std::fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}
