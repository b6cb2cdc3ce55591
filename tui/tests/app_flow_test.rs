//! App Flow Tests
//!
//! Drive the App through its real event queue and scheduler with a mock
//! instance, then draw the resulting session on a test backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::time::timeout;

use misskey_core::{
    ApiError, Emoji, Event, InstanceMeta, Key, MisskeyApi, Mode, Note, SessionConfig,
    TimelineKind, User, HEART,
};
use misskey_tui::theme::Theme;
use misskey_tui::{ui, App};

// ============================================================================
// Mock Instance
// ============================================================================

#[derive(Default)]
struct MockInstance {
    calls: Mutex<Vec<String>>,
}

impl MockInstance {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn note(id: &str, username: &str, text: &str) -> Note {
    Note {
        id: id.to_string(),
        created_at: "2024-03-01T12:00:00.000Z".to_string(),
        text: text.to_string(),
        user: User {
            id: format!("u-{username}"),
            username: username.to_string(),
            name: None,
            host: None,
        },
        ..Note::default()
    }
}

#[async_trait]
impl MisskeyApi for MockInstance {
    async fn fetch_timeline(&self, kind: TimelineKind) -> Result<Vec<Note>, ApiError> {
        self.record(format!("timeline:{kind}"));
        Ok(vec![
            note("n1", "alice", "hello from alice"),
            note("n2", "bob", "hi from bob"),
        ])
    }

    async fn fetch_note(&self, note_id: &str) -> Result<Note, ApiError> {
        self.record(format!("show:{note_id}"));
        Ok(note(note_id, "carol", "parent"))
    }

    async fn fetch_children(&self, note_id: &str) -> Result<Vec<Note>, ApiError> {
        self.record(format!("children:{note_id}"));
        Ok(vec![note("c1", "dave", "a reply")])
    }

    async fn fetch_conversation(&self, note_id: &str) -> Result<Vec<Note>, ApiError> {
        self.record(format!("conversation:{note_id}"));
        Ok(Vec::new())
    }

    async fn create_note(&self, text: &str, reply_id: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("create:{text}:{}", reply_id.unwrap_or("-")));
        Ok(())
    }

    async fn create_reaction(&self, note_id: &str, reaction: &str) -> Result<(), ApiError> {
        self.record(format!("react:{note_id}:{reaction}"));
        Ok(())
    }

    async fn create_reshare(&self, note_id: &str) -> Result<(), ApiError> {
        self.record(format!("reshare:{note_id}"));
        Ok(())
    }

    async fn fetch_account(&self) -> Result<User, ApiError> {
        Err(ApiError::Status("not used".to_string()))
    }

    async fn fetch_meta(&self) -> Result<InstanceMeta, ApiError> {
        self.record("meta".to_string());
        Ok(InstanceMeta {
            name: Some("Test".to_string()),
            media_proxy: None,
        })
    }

    async fn fetch_emojis(&self) -> Result<Vec<Emoji>, ApiError> {
        self.record("emojis".to_string());
        Ok(Vec::new())
    }

    async fn fetch_image(&self, _proxy_url: &str, _image_url: &str) -> Result<Vec<u8>, ApiError> {
        Err(ApiError::Timeout)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn app(api: Arc<MockInstance>) -> App {
    App::new(
        api,
        SessionConfig {
            instance_url: "https://example.social".to_string(),
            account: "@me@example.social".to_string(),
            width: 60,
            height: 20,
        },
        Theme::default(),
    )
}

async fn pump(app: &mut App, events: usize) {
    for _ in 0..events {
        let handled = timeout(Duration::from_secs(5), app.pump())
            .await
            .expect("event did not arrive");
        assert!(handled);
    }
}

fn render(app: &App) -> String {
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| {
            ui::draw(frame, app.session(), &theme);
        })
        .unwrap();
    let buf = terminal.backend().buffer().clone();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_startup_loads_timeline() {
    let api = Arc::new(MockInstance::default());
    let mut app = app(api.clone());
    assert!(app.session().loading());
    assert!(render(&app).contains("Loading..."));

    // timeline, meta, emoji list
    pump(&mut app, 3).await;

    assert!(!app.session().loading());
    assert_eq!(app.session().notes().len(), 2);
    let mut calls = api.calls();
    calls.sort();
    assert_eq!(calls, vec!["emojis", "meta", "timeline:home"]);

    let screen = render(&app);
    assert!(screen.contains("HOME"), "{screen}");
    assert!(screen.contains("hello from alice"), "{screen}");
    assert!(screen.contains("@me@example.social"), "{screen}");
}

#[tokio::test]
async fn test_reaction_sets_status() {
    let api = Arc::new(MockInstance::default());
    let mut app = app(api.clone());
    pump(&mut app, 3).await;

    app.handle(Event::Key(Key::Down));
    app.handle(Event::Key(Key::Char('r')));
    pump(&mut app, 1).await;

    assert!(api.calls().contains(&format!("react:n2:{HEART}")));
    let status = app.session().status().map(|s| s.text.clone());
    assert_eq!(status, Some(format!("Reacted with {HEART}")));
    assert!(render(&app).contains("Reacted with"));
}

#[tokio::test]
async fn test_detail_round_trip_and_quit() {
    let api = Arc::new(MockInstance::default());
    let mut app = app(api.clone());
    pump(&mut app, 3).await;

    app.handle(Event::Key(Key::Enter));
    assert_eq!(app.session().mode(), Mode::Timeline);
    pump(&mut app, 1).await;

    assert_eq!(app.session().mode(), Mode::Detail);
    assert!(api.calls().contains(&"children:n1".to_string()));
    let screen = render(&app);
    assert!(screen.contains("Replies"), "{screen}");
    assert!(screen.contains("a reply"), "{screen}");

    app.handle(Event::Key(Key::Char('q')));
    assert_eq!(app.session().mode(), Mode::Timeline);
    assert!(app.session().is_running());

    app.handle(Event::Key(Key::Char('q')));
    assert!(!app.session().is_running());
}

#[tokio::test]
async fn test_posting_returns_to_refreshed_timeline() {
    let api = Arc::new(MockInstance::default());
    let mut app = app(api.clone());
    pump(&mut app, 3).await;

    app.handle(Event::Key(Key::Char('p')));
    assert_eq!(app.session().mode(), Mode::Posting);
    for c in "new note".chars() {
        app.handle(Event::Key(Key::Char(c)));
    }
    app.handle(Event::Key(Key::CtrlS));

    // post result, then the refetched timeline
    pump(&mut app, 2).await;

    assert_eq!(app.session().mode(), Mode::Timeline);
    assert!(!app.session().loading());
    assert!(api.calls().contains(&"create:new note:-".to_string()));
    assert_eq!(
        api.calls().iter().filter(|c| *c == "timeline:home").count(),
        2
    );
}
