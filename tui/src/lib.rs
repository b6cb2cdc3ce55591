//! Misskey TUI - terminal client for Misskey-compatible instances
//!
//! The presentation half of the client. All state lives in
//! [`misskey_core::Session`]; this crate translates terminal input into
//! session events, runs the event loop, and draws the session.
//!
//! # Architecture
//!
//! - **App**: event loop, input and tick tasks, emoji overlay
//! - **Input**: crossterm key events to session keys
//! - **UI**: one draw function per mode
//! - **Widgets**: note list rows and scrollable text with emoji placeholders
//! - **Graphics**: sixel blobs written over the flushed frame

pub mod app;
pub mod graphics;
pub mod input;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
