//! Remote Client
//!
//! Stateless access to the instance API: one call per method, typed results,
//! failures as [`ApiError`].

mod client;
mod traits;

pub use client::{MisskeyClient, REQUEST_TIMEOUT, TIMELINE_LIMIT};
pub use traits::{ApiError, Emoji, InstanceMeta, MisskeyApi};
