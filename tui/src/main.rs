//! Misskey TUI Entry Point
//!
//! Usage:
//!   misskey-tui [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>    Config file (default: $MISSKEY_TUI_CONFIG or ./config.json)
//!   --log-file <PATH>      Write logs here; nothing is logged otherwise

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use misskey_core::{
    load_config_from_path, resolve_config_path, MisskeyApi, MisskeyClient, SessionConfig,
};
use misskey_tui::theme::Theme;
use misskey_tui::App;

#[derive(Debug, Parser)]
#[command(name = "misskey-tui", version, about = "Terminal client for Misskey")]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, env = "MISSKEY_TUI_LOG")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs never go to the terminal the UI is drawing on
    let log_layer = match &args.log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(log_layer)
        .init();

    let config_path = resolve_config_path(args.config.as_deref());
    let config = match load_config_from_path(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: misskey-tui requires a terminal (TTY)");
        std::process::exit(1);
    }

    let client: Arc<dyn MisskeyApi> = Arc::new(MisskeyClient::new(&config)?);
    let account = match client.fetch_account().await {
        Ok(user) => format!("@{}@{}", user.username, config.host()),
        Err(e) => {
            eprintln!("Authentication failed: {e}");
            std::process::exit(1);
        }
    };
    info!(account = %account, instance = %config.base_url(), "Signed in");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let session_config = SessionConfig {
        instance_url: config.base_url().to_string(),
        account,
        width: size.width,
        height: size.height,
    };

    let result = run_app(&mut terminal, client, session_config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: Arc<dyn MisskeyApi>,
    config: SessionConfig,
) -> anyhow::Result<()> {
    let mut app = App::new(client, config, Theme::default());
    app.run(terminal).await
}
