//! Command / Message Protocol
//!
//! A [`Command`] is a snapshot of everything one unit of remote work needs.
//! The [`Scheduler`] runs it off the event loop and posts exactly one
//! [`Message`] back onto the event queue. Both sets are closed enums so the
//! session matches them exhaustively.
//!
//! Remote failures are flattened to their display string here; no transport
//! error type reaches the session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{Emoji, InstanceMeta, MisskeyApi};
use crate::emoji::encode_emoji;
use crate::event::Event;
use crate::model::{Note, TimelineKind};

/// How long a status message stays up
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Generation tag for requests whose results can go stale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id after this one
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A deferred unit of remote work
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    // ============================================
    // Reads
    // ============================================
    /// Load a timeline
    FetchTimeline {
        /// Which timeline
        kind: TimelineKind,
        /// Generation tag
        request: RequestId,
    },

    /// Load the replies of a note
    FetchChildren {
        /// Display-target id
        note_id: String,
        /// Generation tag
        request: RequestId,
    },

    /// Load the note a reply answers
    FetchParent {
        /// Parent id
        note_id: String,
        /// Generation tag
        request: RequestId,
    },

    /// Load the ancestor chain of a note
    FetchConversation {
        /// Display-target id
        note_id: String,
        /// Generation tag
        request: RequestId,
    },

    /// Load instance metadata
    FetchMeta,

    /// Load the custom emoji list
    FetchEmojis,

    /// Download, decode and encode one emoji image
    FetchEmojiImage {
        /// Canonical short code
        name: String,
        /// Remote image URL
        url: String,
        /// Media proxy endpoint
        proxy_url: String,
    },

    // ============================================
    // Writes
    // ============================================
    /// Post a note
    CreateNote {
        /// Body
        text: String,
        /// Note being replied to
        reply_id: Option<String>,
    },

    /// React to a note
    CreateReaction {
        /// Target id
        note_id: String,
        /// Reaction string
        reaction: String,
    },

    /// Reshare a note
    CreateReshare {
        /// Target id
        note_id: String,
    },

    // ============================================
    // Timers
    // ============================================
    /// Expire a status message
    ClearStatus {
        /// Status id to expire
        id: u64,
        /// Delay before expiry
        after: Duration,
    },
}

impl Command {
    /// Short name for logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchTimeline { .. } => "fetch_timeline",
            Self::FetchChildren { .. } => "fetch_children",
            Self::FetchParent { .. } => "fetch_parent",
            Self::FetchConversation { .. } => "fetch_conversation",
            Self::FetchMeta => "fetch_meta",
            Self::FetchEmojis => "fetch_emojis",
            Self::FetchEmojiImage { .. } => "fetch_emoji_image",
            Self::CreateNote { .. } => "create_note",
            Self::CreateReaction { .. } => "create_reaction",
            Self::CreateReshare { .. } => "create_reshare",
            Self::ClearStatus { .. } => "clear_status",
        }
    }
}

/// The single result of a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Timeline fetch finished
    TimelineLoaded {
        /// Which timeline was requested
        kind: TimelineKind,
        /// Generation tag of the request
        request: RequestId,
        /// Notes or failure text
        result: Result<Vec<Note>, String>,
    },

    /// Replies fetch finished
    ChildrenLoaded {
        /// Generation tag of the request
        request: RequestId,
        /// Replies or failure text
        result: Result<Vec<Note>, String>,
    },

    /// Parent fetch finished
    ParentLoaded {
        /// Generation tag of the request
        request: RequestId,
        /// Parent note or failure text
        result: Result<Note, String>,
    },

    /// Conversation fetch finished
    ConversationLoaded {
        /// Generation tag of the request
        request: RequestId,
        /// Ancestors as the server sent them, or failure text
        result: Result<Vec<Note>, String>,
    },

    /// Instance metadata fetch finished
    MetaLoaded(Result<InstanceMeta, String>),

    /// Emoji list fetch finished
    EmojisLoaded(Result<Vec<Emoji>, String>),

    /// Emoji image pipeline finished; `None` on any failure
    EmojiImageLoaded {
        /// Canonical short code
        name: String,
        /// Encoded sixel sequence
        blob: Option<Vec<u8>>,
    },

    /// Note posted
    NotePosted(Result<(), String>),

    /// Reaction sent
    Reacted(Result<(), String>),

    /// Reshare sent
    Reshared(Result<(), String>),

    /// Status timer elapsed
    StatusExpired {
        /// Status id the timer was set for
        id: u64,
    },
}

/// Run one command to completion
pub async fn execute(api: Arc<dyn MisskeyApi>, command: Command) -> Message {
    fn flat<T>(result: Result<T, crate::api::ApiError>) -> Result<T, String> {
        result.map_err(|e| e.to_string())
    }

    match command {
        Command::FetchTimeline { kind, request } => Message::TimelineLoaded {
            kind,
            request,
            result: flat(api.fetch_timeline(kind).await),
        },
        Command::FetchChildren { note_id, request } => Message::ChildrenLoaded {
            request,
            result: flat(api.fetch_children(&note_id).await),
        },
        Command::FetchParent { note_id, request } => Message::ParentLoaded {
            request,
            result: flat(api.fetch_note(&note_id).await),
        },
        Command::FetchConversation { note_id, request } => Message::ConversationLoaded {
            request,
            result: flat(api.fetch_conversation(&note_id).await),
        },
        Command::FetchMeta => Message::MetaLoaded(flat(api.fetch_meta().await)),
        Command::FetchEmojis => Message::EmojisLoaded(flat(api.fetch_emojis().await)),
        Command::FetchEmojiImage {
            name,
            url,
            proxy_url,
        } => {
            let blob = load_emoji_image(api.as_ref(), &name, &url, &proxy_url).await;
            Message::EmojiImageLoaded { name, blob }
        }
        Command::CreateNote { text, reply_id } => {
            Message::NotePosted(flat(api.create_note(&text, reply_id.as_deref()).await))
        }
        Command::CreateReaction { note_id, reaction } => {
            Message::Reacted(flat(api.create_reaction(&note_id, &reaction).await))
        }
        Command::CreateReshare { note_id } => {
            Message::Reshared(flat(api.create_reshare(&note_id).await))
        }
        Command::ClearStatus { id, after } => {
            tokio::time::sleep(after).await;
            Message::StatusExpired { id }
        }
    }
}

/// Download through the proxy, then decode/resize/encode on a blocking
/// worker. Every failure collapses to `None`.
async fn load_emoji_image(
    api: &dyn MisskeyApi,
    name: &str,
    url: &str,
    proxy_url: &str,
) -> Option<Vec<u8>> {
    let bytes = match api.fetch_image(proxy_url, url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(emoji = name, error = %e, "Emoji download failed");
            return None;
        }
    };

    match tokio::task::spawn_blocking(move || encode_emoji(&bytes)).await {
        Ok(Ok(blob)) => Some(blob),
        Ok(Err(e)) => {
            warn!(emoji = name, error = %e, "Emoji encode failed");
            None
        }
        Err(e) => {
            warn!(emoji = name, error = %e, "Emoji worker panicked");
            None
        }
    }
}

/// Runs commands concurrently and feeds their results into the event queue
#[derive(Clone)]
pub struct Scheduler {
    api: Arc<dyn MisskeyApi>,
    tx: mpsc::UnboundedSender<Event>,
}

impl Scheduler {
    /// Create a scheduler posting to `tx`
    pub fn new(api: Arc<dyn MisskeyApi>, tx: mpsc::UnboundedSender<Event>) -> Self {
        Self { api, tx }
    }

    /// Spawn one command
    ///
    /// Results that arrive after the receiver is gone are dropped.
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let name = command.name();
        debug!(command = name, "Dispatching command");

        tokio::spawn(async move {
            let message = execute(api, command).await;
            debug!(command = name, "Command finished");
            if tx.send(Event::Message(message)).is_err() {
                debug!(command = name, "Event queue closed, result dropped");
            }
        })
    }

    /// Spawn every command in order
    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler").finish_non_exhaustive()
    }
}
