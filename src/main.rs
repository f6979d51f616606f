use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::Path, time::Duration};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use lyrics_overlay::app::{cli::Args, config::AppConfig, discovery, events::AppEvent, inputs, App};
use lyrics_overlay::lyrics::PagingCursor;
use lyrics_overlay::ui;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let log_path = args.log_file.clone().unwrap_or_else(AppConfig::get_log_path);
    let _log_guard = init_tracing(&log_path)?;

    let mut config = AppConfig::load();
    if let Some(font_size) = args.font_size {
        config.font_size = font_size;
    }
    let page_size = args.lines.map(usize::from).unwrap_or(config.page_size);

    // Without a document there is nothing to show: fail before touching the terminal
    let path = discovery::resolve_lyrics_path(
        args.path.as_deref(),
        config.lyrics_file.as_deref(),
        &discovery::default_search_dirs(),
    )
    .inspect_err(|e| tracing::error!(error = %e, "no lyric file"))?;
    let document = discovery::load_document(&path)?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut app = App::new(PagingCursor::new(document, page_size), &config, &source_name);

    install_terminal_restore_hook();
    let mut terminal = init_terminal(&source_name)?;
    let run_result = run_app_loop(&mut terminal, &mut app).await;
    let restore_result = restore_terminal(&mut terminal);
    tracing::info!("exiting");
    restore_result?;
    run_result
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(log_path: &Path) -> Result<WorkerGuard> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("invalid log path: {}", log_path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();
    Ok(guard)
}

/// Leave raw mode before the panic report is printed.
fn install_terminal_restore_hook() {
    let report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        report(info);
    }));
}

fn init_terminal(title: &str) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(format!("Lyrics · {}", title))
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Tick Task ⚡ (toast animation and expiry)
    let tx_tick = tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(33));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        match rx.recv().await {
            Some(AppEvent::Input(event)) => inputs::handle_event(event, app),
            Some(AppEvent::Tick) => app.on_tick(),
            None => break,
        }
    }
    Ok(())
}
