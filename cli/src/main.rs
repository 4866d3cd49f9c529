//! Glidepath binary - terminal session management and the event loop.
//!
//! The loop runs on a fixed cadence: drain keyboard input, drain
//! completed request outcomes, render. The network call for a submission
//! runs in a spawned task and reports back over a channel tagged with
//! the submission's generation; `Session::complete` discards anything
//! stale, so tearing the loop down mid-request can never commit to a
//! dead session.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use glidepath_client::ProjectionClient;
use glidepath_config::Config;
use glidepath_session::{Completion, Session};
use glidepath_tui::{AppEvent, FormCursor, draw, map_key};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let Some((log_path, file)) = open_log_file() else {
        // No usable log file: prefer no logs over corrupting the TUI by
        // writing to stdout/stderr.
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();
    tracing::info!(path = %log_path.display(), "logging initialized");
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && fs::create_dir_all(parent).is_err()
        {
            continue;
        }
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            return Some((candidate, file));
        }
    }
    None
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(config_path) = glidepath_config::config_path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("glidepath.log"));
    }
    // Fallback for constrained environments without a home directory.
    candidates.push(PathBuf::from(".glidepath").join("logs").join("glidepath.log"));
    candidates
}

/// RAII wrapper restoring the terminal even after panics or early
/// returns: raw mode off, alternate screen left.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(endpoint = %config.endpoint, "using projection service");
    let client = ProjectionClient::new(config.endpoint, config.timeout)
        .context("failed to build HTTP client")?;

    let mut session = TerminalSession::new()?;
    let result = run(&mut session.terminal, client).await;
    drop(session);
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, client: ProjectionClient) -> Result<()> {
    let mut session = Session::new();
    let mut cursor = FormCursor::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);

    loop {
        ticker.tick().await;

        // Drain keyboard input without blocking the frame.
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(app_event) = map_key(key) else {
                continue;
            };
            match app_event {
                AppEvent::Quit => return Ok(()),
                AppEvent::Submit => {
                    if let Some(submission) = session.begin_submit() {
                        let client = client.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let outcome = client.simulate(&submission.request).await;
                            // The receiver may be gone if the loop ended;
                            // the outcome is simply dropped.
                            let _ = tx.send(Completion {
                                generation: submission.generation,
                                outcome,
                            });
                        });
                    }
                }
                AppEvent::NextField => cursor.next(),
                AppEvent::PrevField => cursor.prev(),
                AppEvent::Insert(c) => {
                    session.inputs_mut().value_mut(cursor.field()).push(c);
                }
                AppEvent::Backspace => {
                    session.inputs_mut().value_mut(cursor.field()).pop();
                }
                AppEvent::ClearField => {
                    session.inputs_mut().value_mut(cursor.field()).clear();
                }
            }
        }

        while let Ok(completion) = rx.try_recv() {
            session.complete(completion);
        }

        terminal.draw(|frame| draw(frame, session.inputs(), &cursor, session.view()))?;
    }
}
