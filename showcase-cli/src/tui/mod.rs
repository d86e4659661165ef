//! Magic Pipeline showcase screen
//!
//! A single full-screen page with:
//! - Hero header with launch and repository buttons
//! - Four selectable feature cards
//! - Quick commands that copy to the clipboard
//! - The AI sales team roster
//! - A call to action (start building, documentation)

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
