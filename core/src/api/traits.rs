//! Remote API Traits
//!
//! One async method per network call. The scheduler only ever talks to
//! `dyn MisskeyApi`, so tests can swap in a scripted mock and the session
//! never sees a transport type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Note, TimelineKind, User};

/// Failures of a single remote call
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("API request failed: {0}")]
    Status(String),

    /// The client-side deadline elapsed
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Instance metadata the client cares about
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMeta {
    /// Instance name
    #[serde(default)]
    pub name: Option<String>,
    /// Media proxy endpoint used for emoji images
    #[serde(default)]
    pub media_proxy: Option<String>,
}

/// A custom emoji definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    /// Short code without colons
    pub name: String,
    /// Remote image URL
    pub url: String,
}

/// Remote API trait
///
/// Implementations perform exactly one request per call, never retry, and
/// hold no state beyond their connection settings.
#[async_trait]
pub trait MisskeyApi: Send + Sync {
    /// Fetch the latest notes of a timeline
    async fn fetch_timeline(&self, kind: TimelineKind) -> Result<Vec<Note>, ApiError>;

    /// Fetch a single note by id
    async fn fetch_note(&self, note_id: &str) -> Result<Note, ApiError>;

    /// Fetch the direct replies of a note
    async fn fetch_children(&self, note_id: &str) -> Result<Vec<Note>, ApiError>;

    /// Fetch the ancestors of a note (newest first, as the server sends them)
    async fn fetch_conversation(&self, note_id: &str) -> Result<Vec<Note>, ApiError>;

    /// Post a note, optionally as a reply
    async fn create_note(&self, text: &str, reply_id: Option<&str>) -> Result<(), ApiError>;

    /// React to a note
    async fn create_reaction(&self, note_id: &str, reaction: &str) -> Result<(), ApiError>;

    /// Reshare a note
    async fn create_reshare(&self, note_id: &str) -> Result<(), ApiError>;

    /// The account the access token belongs to
    async fn fetch_account(&self) -> Result<User, ApiError>;

    /// Instance metadata (media proxy endpoint)
    async fn fetch_meta(&self) -> Result<InstanceMeta, ApiError>;

    /// Custom emoji list
    async fn fetch_emojis(&self) -> Result<Vec<Emoji>, ApiError>;

    /// Download an image through the instance media proxy
    async fn fetch_image(&self, proxy_url: &str, image_url: &str) -> Result<Vec<u8>, ApiError>;
}
