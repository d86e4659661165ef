//! Key handling for the showcase screen

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use showcase_core::registry::commands;
use showcase_core::{ExternalLink, FeatureId};

use super::app::{Activation, App, Focus, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Activate an element
    Activate(Activation),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return HandleResult::Continue;
    }

    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::CopyPending => handle_copy_pending(app, key),
        Mode::Help => {
            // Any key closes help
            app.toggle_help();
            HandleResult::Continue
        }
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,

        // Focus movement
        KeyCode::Tab | KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            app.focus_next();
            HandleResult::Continue
        }
        KeyCode::BackTab
        | KeyCode::Up
        | KeyCode::Left
        | KeyCode::Char('k')
        | KeyCode::Char('h') => {
            app.focus_prev();
            HandleResult::Continue
        }

        // Activate focused element
        KeyCode::Enter | KeyCode::Char(' ') => HandleResult::Activate(app.focus().activation()),

        // Feature cards by number
        KeyCode::Char(c @ '1'..='4') => {
            let id = FeatureId::ALL[digit_index(c)];
            app.focus_on(Focus::Feature(id));
            HandleResult::Activate(Activation::Select(id))
        }

        KeyCode::Char('c') => {
            app.mode = Mode::CopyPending;
            app.set_status(format!("Copy which command? 1-{}", commands().len()));
            HandleResult::Continue
        }

        KeyCode::Char('x') | KeyCode::Backspace => {
            app.clear_selection();
            HandleResult::Continue
        }

        KeyCode::Char('s') => HandleResult::Activate(Activation::Start),
        KeyCode::Char('g') => HandleResult::Activate(Activation::Open(ExternalLink::Repository)),
        KeyCode::Char('d') => HandleResult::Activate(Activation::Open(ExternalLink::Documentation)),

        KeyCode::Char('?') => {
            app.toggle_help();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

fn handle_copy_pending(app: &mut App, key: KeyEvent) -> HandleResult {
    app.mode = Mode::Normal;
    app.clear_status();

    match key.code {
        KeyCode::Char(c @ '1'..='9') if digit_index(c) < commands().len() => {
            let index = digit_index(c);
            app.focus_on(Focus::Command(index));
            HandleResult::Activate(Activation::Copy(commands()[index]))
        }
        // Anything else cancels
        _ => HandleResult::Continue,
    }
}

/// '1' → 0, '2' → 1, ...
fn digit_index(c: char) -> usize {
    c.to_digit(10).map(|d| d as usize).unwrap_or(1) - 1
}

/// Help overlay text
pub fn help_text() -> &'static str {
    "\
Navigation
  Tab / j / ↓ / →     next element
  Shift+Tab / k / ↑   previous element
  Enter / Space       activate focused element

Shortcuts
  1-4                 select a feature card
  c then 1-5          copy a quick command
  x / Backspace       clear the selected card
  s                   launch the demo
  g                   open the repository
  d                   open the documentation
  ?                   toggle this help
  q / Esc / Ctrl+C    quit"
}
