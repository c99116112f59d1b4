//! Terminal front-end: crossterm input, ratatui output, fixed tick rate.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pocket_games::{GamesConfig, SessionControl};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{error, info, instrument};

use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the games until the player quits, restoring the terminal afterwards.
pub async fn run(config: GamesConfig) -> Result<()> {
    info!("Starting terminal front-end");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Front-end loop failed");
    }
    info!("Terminal front-end stopped");
    res
}

/// Draws, drains pending keys, then waits for the next tick.
#[instrument(skip_all)]
async fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut ticker = interval(Duration::from_millis(*app.session().config().tick_ms()));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| {
            ui::draw(f, &app.session().view(), app.slot_cursor(), app.notice())
        })?;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
                && app.handle_key(key) == SessionControl::Quit
            {
                return Ok(());
            }
        }

        ticker.tick().await;
        app.on_tick();
    }
}
