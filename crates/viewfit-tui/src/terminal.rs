//! Terminal lifecycle and the interactive application loop.
//!
//! The loop is a mechanical bridge: key presses become pipeline inputs,
//! observed size changes become redraws. Nothing here decides sizes; the
//! core does.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use thiserror::Error;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use viewfit_core::{
    error::PipelineError,
    orientation::DeviceOrientation,
    pipeline::{SizePipeline, SurfaceInput},
    resolver::DisplaySize,
};

use crate::{
    input::{self, InputCommand, TapRecognizer},
    layout::LayoutPolicy,
    ui,
};

/// Command line options for the viewfit TUI.
#[derive(Debug, Parser)]
#[command(name = "viewfit-tui", version, about = "Interactive playground for the size machine")]
pub struct Cli {
    /// Write tracing output to this file; without it logging stays off so
    /// the alternate screen is not disturbed.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Double-tap recognition window in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub tap_window_ms: u64,

    /// Draw Small and Large with one shared base layout.
    #[arg(long)]
    pub collapse_base: bool,
}

/// Failures in the terminal frontend.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal or log-file I/O failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),

    /// The size pipeline stopped while the UI still needed it.
    #[error("size pipeline closed")]
    Pipeline(#[from] PipelineError),

    /// The pipeline task was cancelled or panicked.
    #[error("size pipeline task failed")]
    Worker(#[from] tokio::task::JoinError),

    /// A tracing subscriber was already installed.
    #[error("tracing already initialized")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Interactive application state.
///
/// Holds the pipeline handles plus everything the renderer needs: the
/// simulated device position, the latest observed size, and the active
/// presentation policy.
#[derive(Debug)]
pub struct App {
    input: SurfaceInput,
    sizes: watch::Receiver<DisplaySize>,
    taps: TapRecognizer,
    device: DeviceOrientation,
    size: DisplaySize,
    policy: LayoutPolicy,
    updates: u64,
    should_quit: bool,
}

impl App {
    /// Create the application around a running pipeline's handles.
    #[must_use]
    pub fn new(
        input: SurfaceInput,
        sizes: watch::Receiver<DisplaySize>,
        tap_window: Duration,
        policy: LayoutPolicy,
    ) -> Self {
        let size = *sizes.borrow();
        Self {
            input,
            sizes,
            taps: TapRecognizer::new(tap_window),
            device: DeviceOrientation::Unknown,
            size,
            policy,
            updates: 0,
            should_quit: false,
        }
    }

    /// Last injected raw device orientation.
    #[must_use]
    pub fn device(&self) -> DeviceOrientation {
        self.device
    }

    /// Latest observed display size.
    #[must_use]
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Active presentation policy.
    #[must_use]
    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    /// Size updates observed so far.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Run the draw/select loop until quit or pipeline shutdown.
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<(), TerminalError> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code, Instant::now())?;
                    },
                    Some(Ok(_)) => {},
                    Some(Err(source)) => return Err(TerminalError::Io(source)),
                    None => break,
                },
                changed = self.sizes.changed() => match changed {
                    Ok(()) => {
                        self.size = *self.sizes.borrow_and_update();
                        self.updates += 1;
                    },
                    Err(_) => break,
                },
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, now: Instant) -> Result<(), PipelineError> {
        let Some(command) = input::map_key(code) else {
            return Ok(());
        };

        match command {
            InputCommand::Rotate(raw) => {
                self.device = raw;
                self.input.orientation_changed(raw)?;
            },
            InputCommand::RotateNext => {
                let next = input::next_clockwise(self.device);
                self.device = next;
                self.input.orientation_changed(next)?;
            },
            InputCommand::Tap => {
                if self.taps.press(now) {
                    self.input.double_tap()?;
                }
            },
            InputCommand::TogglePolicy => self.policy = self.policy.toggled(),
            InputCommand::Quit => self.should_quit = true,
        }

        Ok(())
    }
}

/// Run the TUI to completion.
///
/// Installs logging, spawns the size pipeline, runs the interactive loop,
/// and restores the terminal before reporting any error.
pub async fn run(cli: Cli) -> Result<(), TerminalError> {
    init_tracing(cli.log_file.as_deref())?;

    let (pipeline, input, sizes) = SizePipeline::new();
    let worker = tokio::spawn(pipeline.run());

    let policy =
        if cli.collapse_base { LayoutPolicy::CollapsedBase } else { LayoutPolicy::ThreeTier };
    let mut app = App::new(input, sizes, Duration::from_millis(cli.tap_window_ms), policy);

    let mut terminal = ratatui::init();
    let outcome = app.run(&mut terminal).await;
    ratatui::restore();

    // Dropping the app releases the input handle, which drains the worker.
    drop(app);
    let stats = worker.await?;
    tracing::info!(events = stats.events, emissions = stats.emissions, "session ended");

    outcome
}

fn init_tracing(log_file: Option<&Path>) -> Result<(), TerminalError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,viewfit_core=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, SizePipeline) {
        let (pipeline, input, sizes) = SizePipeline::new();
        let app = App::new(input, sizes, Duration::from_millis(300), LayoutPolicy::ThreeTier);
        (app, pipeline)
    }

    #[tokio::test]
    async fn rotation_keys_feed_the_pipeline() {
        let (mut app, pipeline) = test_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('l'), t0).unwrap();
        app.handle_key(KeyCode::Char('f'), t0).unwrap();
        assert_eq!(app.device(), DeviceOrientation::FaceUp);

        drop(app);
        let stats = pipeline.run().await;
        assert_eq!(stats.events, 2);
        assert_eq!(stats.emissions, 1);
    }

    #[tokio::test]
    async fn tap_key_only_forwards_recognized_double_taps() {
        let (mut app, pipeline) = test_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('l'), t0).unwrap();
        app.handle_key(KeyCode::Char('t'), t0).unwrap();
        app.handle_key(KeyCode::Char('t'), t0 + Duration::from_millis(100)).unwrap();
        // A lone slow press never reaches the queue.
        app.handle_key(KeyCode::Char('t'), t0 + Duration::from_secs(5)).unwrap();

        drop(app);
        let stats = pipeline.run().await;
        assert_eq!(stats.events, 2, "one rotation and one double-tap");
        assert_eq!(stats.emissions, 2);
    }

    #[tokio::test]
    async fn rotate_key_cycles_the_simulated_device() {
        let (mut app, pipeline) = test_app();
        let t0 = Instant::now();

        // From the initial unknown position the cycle re-enters at portrait.
        app.handle_key(KeyCode::Char('r'), t0).unwrap();
        assert_eq!(app.device(), DeviceOrientation::Portrait);
        app.handle_key(KeyCode::Char('r'), t0).unwrap();
        assert_eq!(app.device(), DeviceOrientation::LandscapeLeft);

        drop(app);
        let stats = pipeline.run().await;
        assert_eq!(stats.events, 2);
    }

    #[tokio::test]
    async fn policy_and_quit_keys_stay_local() {
        let (mut app, pipeline) = test_app();
        let t0 = Instant::now();

        app.handle_key(KeyCode::Char('v'), t0).unwrap();
        assert_eq!(app.policy(), LayoutPolicy::CollapsedBase);
        app.handle_key(KeyCode::Char('q'), t0).unwrap();
        assert!(app.should_quit);

        drop(app);
        let stats = pipeline.run().await;
        assert_eq!(stats.events, 0, "local commands must not enqueue events");
    }
}
