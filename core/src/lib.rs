//! # misskey-core
//!
//! Headless core of a terminal client for Misskey-compatible instances.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   Event    ┌──────────────┐  Vec<Command>  ┌─────────────┐
//! │ input / tick │ ─────────► │   Session    │ ─────────────► │  Scheduler  │
//! └──────────────┘            │  (reducer)   │                │ (tokio)     │
//!        ▲                    └──────────────┘                └──────┬──────┘
//!        │                         Event::Message(Message)          │
//!        └───────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`session::Session`] owns all client state; `update` never blocks
//! - [`command::Scheduler`] runs each [`command::Command`] on the runtime and
//!   posts one [`command::Message`] back to the same queue
//! - [`api::MisskeyApi`] is the remote boundary; [`api::MisskeyClient`]
//!   implements it over HTTP
//! - [`emoji`] holds the emoji table, the image cache and the
//!   decode → resize → sixel pipeline
//!
//! The presentation layer lives in a separate crate and only reads the
//! session.

#![deny(missing_docs)]

pub mod api;
pub mod command;
pub mod config;
pub mod detail;
pub mod emoji;
pub mod event;
pub mod layout;
pub mod model;
pub mod session;

pub use api::{ApiError, Emoji, InstanceMeta, MisskeyApi, MisskeyClient};
pub use command::{execute, Command, Message, RequestId, Scheduler, STATUS_TTL};
pub use config::{load_config_from_path, resolve_config_path, Config, ConfigError};
pub use detail::{DetailLine, LineKind, NoteView};
pub use emoji::{EmojiTable, ImageCache, ImageError};
pub use event::{Event, Key};
pub use layout::{DetailLayout, Layout};
pub use model::{Note, TimelineKind, User, HEART};
pub use session::{
    Compose, DetailFocus, DetailState, ListCursor, Mode, Session, SessionConfig, Status,
};
