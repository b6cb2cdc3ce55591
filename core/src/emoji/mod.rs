//! Custom Emoji
//!
//! - [`EmojiTable`]: short code → remote image URL, loaded once per session
//!   and extended from the emoji carried by fetched notes
//! - [`ImageCache`]: short code → encoded graphics blob, write-once, never
//!   evicted
//! - [`find_shortcodes`]: locate `:name:` tokens in note text
//! - [`pipeline`]: decode/resize/encode for a downloaded image

pub mod pipeline;
pub mod sixel;

use std::collections::HashMap;

pub use pipeline::{encode_emoji, ImageError, EMOJI_SIZE};

use crate::api::Emoji;

/// Suffix Misskey appends to local emoji used as reactions
const LOCAL_MARKER: &str = "@.";

/// Normalise a short code for table and cache lookups
#[must_use]
pub fn canonical_name(name: &str) -> &str {
    let name = name.trim_matches(':');
    name.strip_suffix(LOCAL_MARKER).unwrap_or(name)
}

/// Emoji short code to URL table
#[derive(Clone, Debug, Default)]
pub struct EmojiTable {
    urls: HashMap<String, String>,
}

impl EmojiTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the instance emoji list
    pub fn load(&mut self, emojis: Vec<Emoji>) {
        for emoji in emojis {
            self.add(&emoji.name, emoji.url);
        }
    }

    /// Add an entry unless the name is already known
    ///
    /// Returns whether the entry was added.
    pub fn add(&mut self, name: &str, url: String) -> bool {
        let name = canonical_name(name);
        if name.is_empty() || self.urls.contains_key(name) {
            return false;
        }
        self.urls.insert(name.to_string(), url);
        true
    }

    /// URL for a short code
    #[must_use]
    pub fn url(&self, name: &str) -> Option<&str> {
        self.urls.get(canonical_name(name)).map(String::as_str)
    }

    /// Number of known emoji
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Encoded emoji graphics, keyed by canonical name
#[derive(Clone, Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, Vec<u8>>,
}

impl ImageCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a blob; the first one stored for a name wins
    ///
    /// Returns whether the blob was stored.
    pub fn insert(&mut self, name: &str, blob: Vec<u8>) -> bool {
        let name = canonical_name(name);
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), blob);
        true
    }

    /// Encoded blob for a short code, if one has been decoded
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(canonical_name(name)).map(Vec::as_slice)
    }

    /// Whether a blob exists for a short code
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(canonical_name(name))
    }

    /// Number of cached blobs
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A `:name:` token inside a piece of text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcode<'a> {
    /// Text between the colons
    pub name: &'a str,
    /// Byte offset of the opening colon
    pub start: usize,
    /// Byte offset just past the closing colon
    pub end: usize,
}

fn is_shortcode_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '@' | '.')
}

/// Find every `:name:` token in `text`, left to right, non-overlapping
#[must_use]
pub fn find_shortcodes(text: &str) -> Vec<Shortcode<'_>> {
    let mut found = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(':') {
        let start = search_from + offset;
        let rest = &text[start + 1..];
        let Some(len) = rest.find(':') else {
            break;
        };
        let name = &rest[..len];
        if !name.is_empty() && name.chars().all(is_shortcode_char) {
            let end = start + len + 2;
            found.push(Shortcode { name, start, end });
            search_from = end;
        } else {
            search_from = start + 1;
        }
    }

    found
}
