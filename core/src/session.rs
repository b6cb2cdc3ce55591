//! Session State Machine
//!
//! The authoritative client state and its reduction step. The event loop
//! owns one [`Session`] and feeds every [`Event`] through
//! [`Session::update`], which mutates the state and returns the commands to
//! dispatch. Nothing in here blocks or awaits.
//!
//! # Modes
//!
//! - `Timeline`: list of notes for one of four timelines
//! - `Posting`: compose box, optionally replying to a note
//! - `Detail`: one note, its parent quote (or whole thread) and its replies
//!
//! # Errors
//!
//! Read failures set [`Session::error`]; the next key press clears it and
//! does nothing else. Write failures only set a status line.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::command::{Command, Message, RequestId, STATUS_TTL};
use crate::detail::{quote_lines, DetailLine, NoteView};
use crate::emoji::{canonical_name, find_shortcodes, EmojiTable, ImageCache};
use crate::event::{Event, Key};
use crate::layout::{DetailLayout, Layout};
use crate::model::{Note, TimelineKind, HEART};

/// Media proxy path appended to the instance URL or the advertised proxy
const EMOJI_PROXY_PATH: &str = "emoji.webp";

/// Top-level UI state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Browsing a timeline
    #[default]
    Timeline,
    /// Writing a note
    Posting,
    /// Looking at one note
    Detail,
}

/// Which Detail pane receives navigation keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailFocus {
    /// The note viewport
    #[default]
    Note,
    /// The reply list
    Replies,
}

/// A transient status line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    /// Expiry tag
    pub id: u64,
    /// Text shown in the status bar
    pub text: String,
}

/// Selection and scroll offset of a list of fixed-height rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
    offset: usize,
}

impl ListCursor {
    /// Index of the highlighted row
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Back to the first row
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move up `n` rows
    pub fn up(&mut self, n: usize, page: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.scroll_into_view(page);
    }

    /// Move down `n` rows, stopping at the last one
    pub fn down(&mut self, n: usize, len: usize, page: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = self.selected.saturating_add(n).min(len - 1);
        self.scroll_into_view(page);
    }

    /// Jump to the last row
    pub fn last(&mut self, len: usize, page: usize) {
        self.down(usize::MAX, len, page);
    }

    /// Keep the selection inside `len` rows and on screen
    pub fn clamp(&mut self, len: usize, page: usize) {
        self.down(0, len, page);
    }

    fn scroll_into_view(&mut self, page: usize) {
        let page = page.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + page {
            self.offset = self.selected + 1 - page;
        }
    }
}

/// Compose box contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compose {
    /// Draft text
    pub text: String,
    /// Note being replied to (already substituted)
    pub reply_to: Option<Note>,
}

impl Compose {
    /// Placeholder shown while the draft is empty
    #[must_use]
    pub fn placeholder(&self) -> String {
        match &self.reply_to {
            Some(note) => format!("Replying to @{}...", note.user.username),
            None => "What's on your mind?".to_string(),
        }
    }
}

/// Everything shown in Detail mode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// The note as selected (a reshare wrapper stays a wrapper)
    pub note: Note,
    /// Composed text of the note
    pub view: NoteView,
    /// `view` wrapped to the current width
    pub content: Vec<DetailLine>,
    /// First visible content line
    pub scroll: usize,
    /// The note the display target replies to
    pub parent: Option<Note>,
    /// Ancestors, oldest first, once fetched
    pub conversation: Option<Vec<Note>>,
    /// Show the whole thread instead of the single parent
    pub show_thread: bool,
    /// Quote lines above the note box
    pub quote: Vec<DetailLine>,
    /// Direct replies
    pub replies: Vec<Note>,
    /// Reply list cursor
    pub cursor: ListCursor,
    /// Pane receiving navigation keys
    pub focus: DetailFocus,
}

impl DetailState {
    fn new(note: Note) -> Self {
        let view = NoteView::compose(&note);
        Self {
            note,
            view,
            ..Self::default()
        }
    }

    /// The note every fetch and write uses
    #[must_use]
    pub fn target(&self) -> &Note {
        self.note.display_target()
    }

    /// The highlighted reply
    #[must_use]
    pub fn selected_reply(&self) -> Option<&Note> {
        self.replies.get(self.cursor.selected())
    }

    fn build_quote(&self, width: u16) -> Vec<DetailLine> {
        match (&self.conversation, self.show_thread) {
            (Some(chain), true) => chain.iter().flat_map(|n| quote_lines(n, width)).collect(),
            _ => self
                .parent
                .as_ref()
                .map(|parent| quote_lines(parent, width))
                .unwrap_or_default(),
        }
    }

    fn max_scroll(&self, viewport: u16) -> usize {
        self.content.len().saturating_sub(usize::from(viewport))
    }
}

/// Startup parameters
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Instance base URL without a trailing slash
    pub instance_url: String,
    /// `@handle@host` of the signed-in account
    pub account: String,
    /// Initial terminal width
    pub width: u16,
    /// Initial terminal height
    pub height: u16,
}

/// The client state and its reduction step
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    timeline: TimelineKind,
    notes: Vec<Note>,
    cursor: ListCursor,
    loading: bool,
    spinner_frame: usize,
    status: Option<Status>,
    last_status_id: u64,
    error: Option<String>,
    compose: Compose,
    detail: Option<DetailState>,
    layout: Layout,
    emojis: EmojiTable,
    images: ImageCache,
    requested: HashSet<String>,
    proxy_url: String,
    account: String,
    last_request: RequestId,
    timeline_request: RequestId,
    detail_request: Option<RequestId>,
    /// Detail being opened, shown once its replies arrive
    pending_detail: Option<(RequestId, DetailState)>,
    running: bool,
}

impl Session {
    /// Initial state plus the startup commands (timeline, meta, emoji list)
    pub fn new(config: SessionConfig) -> (Self, Vec<Command>) {
        let instance = config.instance_url.trim_end_matches('/');
        let mut session = Self {
            mode: Mode::Timeline,
            timeline: TimelineKind::Home,
            notes: Vec::new(),
            cursor: ListCursor::default(),
            loading: false,
            spinner_frame: 0,
            status: None,
            last_status_id: 0,
            error: None,
            compose: Compose::default(),
            detail: None,
            layout: Layout::new(config.width, config.height),
            emojis: EmojiTable::new(),
            images: ImageCache::new(),
            requested: HashSet::new(),
            proxy_url: format!("{instance}/proxy/{EMOJI_PROXY_PATH}"),
            account: config.account,
            last_request: RequestId::default(),
            timeline_request: RequestId::default(),
            detail_request: None,
            pending_detail: None,
            running: true,
        };

        let mut commands = session.refresh_timeline();
        commands.push(Command::FetchMeta);
        commands.push(Command::FetchEmojis);
        (session, commands)
    }

    // ============================================
    // Accessors
    // ============================================

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active timeline
    pub fn timeline(&self) -> TimelineKind {
        self.timeline
    }

    /// Notes of the active timeline
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Timeline list cursor
    pub fn cursor(&self) -> ListCursor {
        self.cursor
    }

    /// Highlighted timeline note
    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.cursor.selected())
    }

    /// Whether a blocking request is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Spinner animation frame counter
    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Current status line
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Read error waiting to be dismissed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Compose box
    pub fn compose(&self) -> &Compose {
        &self.compose
    }

    /// Detail content, present while in Detail or while opening it
    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// Current sizes
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Known custom emoji
    pub fn emojis(&self) -> &EmojiTable {
        &self.emojis
    }

    /// Encoded emoji graphics
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// Media proxy endpoint for emoji downloads
    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// `@handle@host` of the signed-in account
    pub fn account(&self) -> &str {
        &self.account
    }

    /// False once the user asked to quit
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ============================================
    // Reduction
    // ============================================

    /// Apply one event and return the commands it triggers
    pub fn update(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize { width, height } => {
                self.layout = Layout::new(width, height);
                self.relayout();
                Vec::new()
            }
            Event::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Vec::new()
            }
            Event::Message(message) => self.apply_message(message),
        }
    }

    fn handle_key(&mut self, key: Key) -> Vec<Command> {
        if key == Key::CtrlC {
            info!("Quit requested");
            self.running = false;
            return Vec::new();
        }
        if self.error.take().is_some() {
            debug!("Error dismissed");
            return Vec::new();
        }
        if self.loading {
            return Vec::new();
        }

        match self.mode {
            Mode::Timeline => self.timeline_key(key),
            Mode::Posting => self.posting_key(key),
            Mode::Detail => self.detail_key(key),
        }
    }

    fn timeline_key(&mut self, key: Key) -> Vec<Command> {
        let page = self.layout.timeline_page();
        let target = self.selected_note().map(|n| n.display_target().clone());

        match key {
            Key::Char('q') => {
                info!("Quit requested");
                self.running = false;
            }
            Key::Char('p') => self.start_compose(None),
            Key::Char('R') => {
                if let Some(target) = target {
                    self.start_compose(Some(target));
                }
            }
            Key::Char('r') => {
                if let Some(target) = target {
                    return vec![react(target.id)];
                }
            }
            Key::Char('n') => {
                if let Some(target) = target {
                    return vec![Command::CreateReshare { note_id: target.id }];
                }
            }
            Key::Enter => {
                if let Some(note) = self.selected_note().cloned() {
                    return self.open_detail(note);
                }
            }
            Key::Char('h') => return self.switch_timeline(TimelineKind::Home),
            Key::Char('l') => return self.switch_timeline(TimelineKind::Local),
            Key::Char('s') => return self.switch_timeline(TimelineKind::Social),
            Key::Char('g') => return self.switch_timeline(TimelineKind::Global),
            Key::Up | Key::Char('k') => self.cursor.up(1, page),
            Key::Down | Key::Char('j') => self.cursor.down(1, self.notes.len(), page),
            Key::PageUp => self.cursor.up(page, page),
            Key::PageDown => self.cursor.down(page, self.notes.len(), page),
            Key::Home => self.cursor.reset(),
            Key::End => self.cursor.last(self.notes.len(), page),
            _ => {}
        }
        Vec::new()
    }

    fn posting_key(&mut self, key: Key) -> Vec<Command> {
        match key {
            Key::Esc => {
                self.compose = Compose::default();
                self.mode = Mode::Timeline;
            }
            Key::CtrlS => {
                if self.compose.text.trim().is_empty() {
                    return Vec::new();
                }
                self.loading = true;
                return vec![Command::CreateNote {
                    text: self.compose.text.clone(),
                    reply_id: self.compose.reply_to.as_ref().map(|n| n.id.clone()),
                }];
            }
            Key::Enter => self.compose.text.push('\n'),
            Key::Backspace => {
                self.compose.text.pop();
            }
            Key::Char(c) => self.compose.text.push(c),
            _ => {}
        }
        Vec::new()
    }

    fn detail_key(&mut self, key: Key) -> Vec<Command> {
        let reply_page = self.layout.reply_page();
        let viewport = self.layout.detail.viewport_height;
        let Some(detail) = self.detail.as_mut() else {
            self.mode = Mode::Timeline;
            return Vec::new();
        };
        let target = detail.target().clone();

        match key {
            Key::Esc | Key::Char('q') => self.close_detail(),
            Key::Char('R') => {
                self.close_detail();
                self.start_compose(Some(target));
            }
            Key::Char('r') => return vec![react(target.id)],
            Key::Char('n') => return vec![Command::CreateReshare { note_id: target.id }],
            Key::Tab => {
                detail.focus = match detail.focus {
                    DetailFocus::Note => DetailFocus::Replies,
                    DetailFocus::Replies => DetailFocus::Note,
                };
            }
            Key::Char('c') => return self.toggle_thread(),
            Key::Enter if detail.focus == DetailFocus::Replies => {
                if let Some(reply) = detail.selected_reply().cloned() {
                    return self.open_detail(reply);
                }
            }
            _ => match detail.focus {
                DetailFocus::Note => {
                    let max = detail.max_scroll(viewport);
                    let page = usize::from(viewport.max(1));
                    detail.scroll = match key {
                        Key::Up | Key::Char('k') => detail.scroll.saturating_sub(1),
                        Key::Down | Key::Char('j') => (detail.scroll + 1).min(max),
                        Key::PageUp => detail.scroll.saturating_sub(page),
                        Key::PageDown => (detail.scroll + page).min(max),
                        Key::Home => 0,
                        Key::End => max,
                        _ => detail.scroll,
                    };
                }
                DetailFocus::Replies => {
                    let len = detail.replies.len();
                    match key {
                        Key::Up | Key::Char('k') => detail.cursor.up(1, reply_page),
                        Key::Down | Key::Char('j') => detail.cursor.down(1, len, reply_page),
                        Key::PageUp => detail.cursor.up(reply_page, reply_page),
                        Key::PageDown => detail.cursor.down(reply_page, len, reply_page),
                        Key::Home => detail.cursor.reset(),
                        Key::End => detail.cursor.last(len, reply_page),
                        _ => {}
                    }
                }
            },
        }
        Vec::new()
    }

    fn apply_message(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::TimelineLoaded {
                kind,
                request,
                result,
            } => {
                if request != self.timeline_request {
                    warn!(timeline = %kind, ?request, "Dropping stale timeline result");
                    return Vec::new();
                }
                self.loading = false;
                match result {
                    Ok(notes) => {
                        info!(timeline = %kind, count = notes.len(), "Timeline loaded");
                        self.learn_emojis(&notes);
                        self.notes = notes;
                        self.cursor.reset();
                    }
                    Err(e) => self.fail(e),
                }
            }

            Message::ChildrenLoaded { request, result } => {
                let mut detail = match self.pending_detail.take() {
                    Some((pending, detail)) if pending == request => detail,
                    other => {
                        self.pending_detail = other;
                        warn!(?request, "Dropping stale replies result");
                        return Vec::new();
                    }
                };
                self.loading = false;
                match result {
                    Ok(replies) => {
                        debug!(count = replies.len(), "Replies loaded");
                        self.learn_emojis(&replies);
                        detail.replies = replies;
                        detail.cursor.reset();
                        detail.scroll = 0;
                        detail.focus = DetailFocus::Note;
                        self.detail = Some(detail);
                        self.detail_request = Some(request);
                        self.mode = Mode::Detail;
                        self.relayout();
                        return self.request_emoji_images();
                    }
                    // the previous screen (timeline or detail) stays as it was
                    Err(e) => self.fail(e),
                }
            }

            Message::ParentLoaded { request, result } => {
                if !self.is_current_detail(request) {
                    warn!(?request, "Dropping stale parent result");
                    return Vec::new();
                }
                match result {
                    Ok(parent) => {
                        self.learn_emojis(std::slice::from_ref(&parent));
                        if let Some(detail) = self.detail_for(request) {
                            detail.parent = Some(parent);
                        }
                        self.relayout();
                        return self.request_emoji_images();
                    }
                    Err(e) => self.fail(e),
                }
            }

            Message::ConversationLoaded { request, result } => {
                if !self.is_current_detail(request) {
                    warn!(?request, "Dropping stale conversation result");
                    return Vec::new();
                }
                self.loading = false;
                match result {
                    Ok(mut ancestors) => {
                        self.learn_emojis(&ancestors);
                        ancestors.reverse();
                        if let Some(detail) = self.detail_for(request) {
                            detail.conversation = Some(ancestors);
                        }
                        self.relayout();
                        return self.request_emoji_images();
                    }
                    Err(e) => {
                        if let Some(detail) = self.detail_for(request) {
                            detail.show_thread = false;
                        }
                        self.fail(e);
                    }
                }
            }

            Message::MetaLoaded(result) => match result {
                Ok(meta) => {
                    if let Some(proxy) = meta.media_proxy.filter(|p| !p.is_empty()) {
                        self.proxy_url =
                            format!("{}/{EMOJI_PROXY_PATH}", proxy.trim_end_matches('/'));
                        debug!(proxy = %self.proxy_url, "Media proxy set");
                    }
                }
                Err(e) => self.fail(e),
            },

            Message::EmojisLoaded(result) => match result {
                Ok(emojis) => {
                    info!(count = emojis.len(), "Emoji list loaded");
                    self.emojis.load(emojis);
                    if self.mode == Mode::Detail {
                        return self.request_emoji_images();
                    }
                }
                Err(e) => self.fail(e),
            },

            Message::EmojiImageLoaded { name, blob } => match blob {
                Some(blob) => {
                    if self.images.insert(&name, blob) {
                        debug!(emoji = %name, "Emoji image cached");
                    }
                }
                None => debug!(emoji = %name, "Emoji image unavailable"),
            },

            Message::NotePosted(result) => {
                self.loading = false;
                self.mode = Mode::Timeline;
                self.compose = Compose::default();
                return match result {
                    Ok(()) => {
                        let mut commands = vec![self.set_status("Note posted successfully!")];
                        commands.extend(self.refresh_timeline());
                        commands
                    }
                    Err(e) => {
                        warn!(error = %e, "Post failed");
                        vec![self.set_status(format!("Failed to post note: {e}"))]
                    }
                };
            }

            Message::Reacted(result) => {
                let text = match result {
                    Ok(()) => format!("Reacted with {HEART}"),
                    Err(e) => {
                        warn!(error = %e, "Reaction failed");
                        format!("Failed to react: {e}")
                    }
                };
                return vec![self.set_status(text)];
            }

            Message::Reshared(result) => {
                let text = match result {
                    Ok(()) => "Reshared successfully!".to_string(),
                    Err(e) => {
                        warn!(error = %e, "Reshare failed");
                        format!("Failed to reshare: {e}")
                    }
                };
                return vec![self.set_status(text)];
            }

            Message::StatusExpired { id } => {
                if self.status.as_ref().is_some_and(|s| s.id == id) {
                    self.status = None;
                }
            }
        }
        Vec::new()
    }

    // ============================================
    // Transitions
    // ============================================

    fn next_request(&mut self) -> RequestId {
        self.last_request = self.last_request.next();
        self.last_request
    }

    fn is_current_detail(&self, request: RequestId) -> bool {
        self.detail_request == Some(request)
            || matches!(&self.pending_detail, Some((pending, _)) if *pending == request)
    }

    /// The detail a result for `request` belongs to, opening or shown
    fn detail_for(&mut self, request: RequestId) -> Option<&mut DetailState> {
        match &mut self.pending_detail {
            Some((pending, detail)) if *pending == request => Some(detail),
            _ if self.detail_request == Some(request) => self.detail.as_mut(),
            _ => None,
        }
    }

    fn refresh_timeline(&mut self) -> Vec<Command> {
        let request = self.next_request();
        self.timeline_request = request;
        self.loading = true;
        vec![Command::FetchTimeline {
            kind: self.timeline,
            request,
        }]
    }

    fn switch_timeline(&mut self, kind: TimelineKind) -> Vec<Command> {
        if kind == self.timeline {
            return Vec::new();
        }
        debug!(timeline = %kind, "Switching timeline");
        self.timeline = kind;
        self.refresh_timeline()
    }

    fn start_compose(&mut self, reply_to: Option<Note>) {
        self.compose = Compose {
            text: String::new(),
            reply_to,
        };
        self.mode = Mode::Posting;
    }

    fn open_detail(&mut self, note: Note) -> Vec<Command> {
        let request = self.next_request();
        let target = note.display_target();
        let mut commands = vec![Command::FetchChildren {
            note_id: target.id.clone(),
            request,
        }];
        if let Some(parent_id) = target.reply_id.clone() {
            commands.push(Command::FetchParent {
                note_id: parent_id,
                request,
            });
        }
        debug!(note = %target.id, "Opening detail");

        self.pending_detail = Some((request, DetailState::new(note)));
        self.loading = true;
        commands
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.detail_request = None;
        self.pending_detail = None;
        self.mode = Mode::Timeline;
        self.relayout();
    }

    fn toggle_thread(&mut self) -> Vec<Command> {
        let Some(detail) = self.detail.as_mut() else {
            return Vec::new();
        };
        detail.show_thread = !detail.show_thread;

        let mut commands = Vec::new();
        if detail.show_thread && detail.conversation.is_none() {
            if detail.target().reply_id.is_none() {
                detail.conversation = Some(Vec::new());
            } else if let Some(request) = self.detail_request {
                commands.push(Command::FetchConversation {
                    note_id: detail.target().id.clone(),
                    request,
                });
                self.loading = true;
            }
        }
        self.relayout();
        commands
    }

    fn fail(&mut self, error: String) {
        warn!(%error, "Request failed");
        self.error = Some(error);
    }

    fn set_status(&mut self, text: impl Into<String>) -> Command {
        self.last_status_id += 1;
        let id = self.last_status_id;
        self.status = Some(Status {
            id,
            text: text.into(),
        });
        Command::ClearStatus {
            id,
            after: STATUS_TTL,
        }
    }

    fn learn_emojis(&mut self, notes: &[Note]) {
        for note in notes {
            for (name, url) in note.carried_emojis() {
                self.emojis.add(name, url.clone());
            }
        }
    }

    /// Image fetches for every known, never requested shortcode in the
    /// detail body and its quote
    fn request_emoji_images(&mut self) -> Vec<Command> {
        let Some(detail) = &self.detail else {
            return Vec::new();
        };

        let texts = std::iter::once(detail.view.body.as_str())
            .chain(detail.quote.iter().map(|(_, text)| text.as_str()));
        let mut commands = Vec::new();
        for code in texts.flat_map(find_shortcodes) {
            let name = canonical_name(code.name);
            if self.images.contains(name) {
                continue;
            }
            let Some(url) = self.emojis.url(name) else {
                continue;
            };
            if !self.requested.insert(name.to_string()) {
                continue;
            }
            commands.push(Command::FetchEmojiImage {
                name: name.to_string(),
                url: url.to_string(),
                proxy_url: self.proxy_url.clone(),
            });
        }
        commands
    }

    fn relayout(&mut self) {
        let (width, height) = (self.layout.width, self.layout.height);
        let (text_width, quote_width) = DetailLayout::widths(width);

        match self.detail.as_mut() {
            Some(detail) => {
                detail.content = detail.view.lines(text_width);
                detail.quote = detail.build_quote(quote_width);
                self.layout.detail =
                    DetailLayout::compute(width, height, detail.quote.len(), detail.content.len());
                detail.scroll = detail
                    .scroll
                    .min(detail.max_scroll(self.layout.detail.viewport_height));
                detail
                    .cursor
                    .clamp(detail.replies.len(), self.layout.reply_page());
            }
            None => self.layout.detail = DetailLayout::compute(width, height, 0, 0),
        }
        self.cursor
            .clamp(self.notes.len(), self.layout.timeline_page());
    }
}

fn react(note_id: String) -> Command {
    Command::CreateReaction {
        note_id,
        reaction: HEART.to_string(),
    }
}
