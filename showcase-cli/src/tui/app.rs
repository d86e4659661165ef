//! Screen state: focus ring, feature selection and status line

use anyhow::Result;
use showcase_core::registry::{commands, feature};
use showcase_core::{Clipboard, Dispatcher, ExternalLink, FeatureId, Opener, SelectionState};

/// Input mode for the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Move focus, activate elements
    #[default]
    Normal,
    /// `c` was pressed; the next digit copies that quick command
    CopyPending,
    /// Help overlay is showing
    Help,
}

/// An activatable element on the screen, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Launch,
    Repository,
    Feature(FeatureId),
    Command(usize),
    StartBuilding,
    Documentation,
}

/// What activating an element does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Select(FeatureId),
    Copy(&'static str),
    Start,
    Open(ExternalLink),
}

impl Focus {
    /// Every focusable element in the order the screen lays them out
    pub fn ring() -> Vec<Focus> {
        let mut ring = vec![Focus::Launch, Focus::Repository];
        ring.extend(FeatureId::ALL.iter().copied().map(Focus::Feature));
        ring.extend((0..commands().len()).map(Focus::Command));
        ring.push(Focus::StartBuilding);
        ring.push(Focus::Documentation);
        ring
    }

    pub fn activation(self) -> Activation {
        match self {
            Focus::Launch | Focus::StartBuilding => Activation::Start,
            Focus::Repository => Activation::Open(ExternalLink::Repository),
            Focus::Documentation => Activation::Open(ExternalLink::Documentation),
            Focus::Feature(id) => Activation::Select(id),
            // Command indices come from the ring, always in range
            Focus::Command(index) => Activation::Copy(commands()[index]),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Which feature card is selected
    pub selection: SelectionState,
    /// Focusable elements, page order
    ring: Vec<Focus>,
    /// Index into `ring`
    focus_index: usize,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            selection: SelectionState::new(),
            ring: Focus::ring(),
            focus_index: 0,
            status_message: None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.ring[self.focus_index]
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.focus() == target
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % self.ring.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus_index = self
            .focus_index
            .checked_sub(1)
            .unwrap_or(self.ring.len() - 1);
    }

    /// Move focus onto `target` if it is on the ring
    pub fn focus_on(&mut self, target: Focus) {
        if let Some(index) = self.ring.iter().position(|f| *f == target) {
            self.focus_index = index;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open with `id` already selected and focused
    pub fn preselect(&mut self, id: FeatureId) {
        self.selection.select(id);
        self.focus_on(Focus::Feature(id));
    }

    pub fn clear_selection(&mut self) {
        if self.selection.current().is_some() {
            self.selection.clear();
            self.set_status("Selection cleared");
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = if self.mode == Mode::Help {
            Mode::Normal
        } else {
            Mode::Help
        };
    }

    /// Carry out an activation.
    ///
    /// Selection changes stay local; everything else goes through the
    /// dispatcher. Only a start-hook failure is returned.
    pub fn perform<C: Clipboard, O: Opener>(
        &mut self,
        dispatcher: &mut Dispatcher<C, O>,
        activation: Activation,
    ) -> Result<()> {
        match activation {
            Activation::Select(id) => {
                if self.selection.select(id) {
                    self.set_status(format!("Selected: {}", feature(id).title));
                }
            }
            Activation::Copy(text) => {
                if dispatcher.copy_to_clipboard(text).is_delivered() {
                    self.set_status(format!("Copied \"{}\"", text));
                }
            }
            Activation::Start => {
                dispatcher.start_demo()?;
                self.set_status("Starting the demo");
            }
            Activation::Open(link) => {
                dispatcher.open_external(link);
            }
        }
        Ok(())
    }
}
