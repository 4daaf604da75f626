//! Terminal UI for the Ludo client.

mod board;
mod input;
mod ui;
mod view;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardWidget, CELL_WIDTH, seat_color};
pub use input::{Command, command_for};
pub use view::TerminalView;

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument, warn};

use crate::client::GameClient;
use crate::config::ClientConfig;
use crate::transport::{GameTransport, HttpTransport};
use crate::view::GameView;

/// Runs the terminal client until the user quits.
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %config.server_url(), "Starting Ludo client");

    let transport = HttpTransport::new(config.server_url().clone(), config.request_timeout())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut client =
        GameClient::new(transport, TerminalView::new(terminal)).with_roll_delay(config.roll_delay());

    client.view_mut().flush();
    if let Err(e) = client.create_session().await {
        // The screen stays up so the log panel can show what happened.
        error!(error = %e, "Could not start a session");
    }

    let res = run_event_loop(&mut client, config.poll_interval()).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    client.view_mut().terminal_mut().show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Interleaves keyboard input with the state poll.
///
/// Roll and move keys are honored only when the screen shows the matching
/// control as enabled.
#[instrument(skip_all, fields(poll_ms = poll_interval.as_millis() as u64))]
pub async fn run_event_loop<T, B>(
    client: &mut GameClient<T, TerminalView<B>>,
    poll_interval: Duration,
) -> Result<()>
where
    T: GameTransport,
    B: Backend,
{
    info!("Starting event loop");
    let mut last_poll = Instant::now();

    loop {
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match command_for(key.code) {
                Some(Command::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(command) => {
                    if dispatch(client, command).await {
                        last_poll = Instant::now();
                    }
                }
                None => debug!(key = ?key.code, "Unbound key"),
            }
        }

        if last_poll.elapsed() >= poll_interval {
            if let Err(e) = client.refresh_state().await {
                warn!(error = %e, "Poll failed");
            }
            last_poll = Instant::now();
        }

        sleep(Duration::from_millis(10)).await;
    }
}

/// Performs `command`; returns whether a request reached the engine.
pub(crate) async fn dispatch<T, B>(
    client: &mut GameClient<T, TerminalView<B>>,
    command: Command,
) -> bool
where
    T: GameTransport,
    B: Backend,
{
    let player = client.current_player();
    match command {
        Command::Roll if *client.view().state().roll_enabled() => {
            let _ = client.roll_dice(player).await;
            true
        }
        Command::Move(piece) if client.view().state().is_interactive(player, piece) => {
            let _ = client.move_piece(piece).await;
            true
        }
        Command::Reset => {
            let _ = client.reset_game().await;
            true
        }
        Command::Roll | Command::Move(_) => {
            debug!(?command, "Control not enabled, ignoring");
            false
        }
        Command::Quit => false,
    }
}
