//! Command implementations for the showcase CLI

pub mod config;
pub mod export;
#[cfg(feature = "server")]
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use export::run_export;
#[cfg(feature = "server")]
pub use serve::run_serve;
