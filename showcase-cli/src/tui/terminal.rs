//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use showcase_core::{Clipboard, Dispatcher, FeatureId, Opener};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

type Screen = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen, with a panic hook that undoes both
fn enter_screen() -> Result<Screen> {
    install_panic_hook(|| {
        let _ = leave_screen();
    });
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Chain `restore` in front of the current panic hook so a panic message
/// lands on a usable terminal.
fn install_panic_hook(restore: impl Fn() + Send + Sync + 'static) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Run the showcase screen until the user quits.
///
/// The dispatcher is supplied by the caller so the embedding context
/// decides what "start" means and which platform seams are used.
pub fn run<C: Clipboard, O: Opener>(
    dispatcher: &mut Dispatcher<C, O>,
    preselect: Option<FeatureId>,
) -> Result<()> {
    let mut terminal = enter_screen()?;

    // Screen state lives exactly as long as the screen
    let mut app = App::new();
    if let Some(id) = preselect {
        app.preselect(id);
    }
    tracing::info!(?preselect, "showcase screen mounted");

    let result = run_loop(&mut terminal, &mut app, dispatcher);

    // Restore terminal (even if loop failed)
    leave_screen().context("Failed to restore terminal")?;
    tracing::info!(selected = ?app.selection.current(), "showcase screen unmounted");

    result
}

/// Main event loop
fn run_loop<C: Clipboard, O: Opener>(
    terminal: &mut Screen,
    app: &mut App,
    dispatcher: &mut Dispatcher<C, O>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            match handle_key(app, key) {
                HandleResult::Quit => break,
                HandleResult::Continue => {}
                HandleResult::Activate(activation) => {
                    app.perform(dispatcher, activation)?;
                }
            }
        }
    }

    Ok(())
}
