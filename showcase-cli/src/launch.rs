//! The binary's start hook: what "Launch Magic Pipeline" actually does.

use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use showcase_core::config::LaunchConfig;

/// Parsed launch command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Split a shell-style command line (`magic-pipeline --demo "my deck"`).
    pub fn parse(line: &str) -> Result<Self> {
        let words = shlex::split(line)
            .with_context(|| format!("Unbalanced quotes in launch command: {}", line))?;
        let mut words = words.into_iter();
        let Some(program) = words.next() else {
            bail!("Launch command is empty");
        };
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Spawn detached from our stdio; we never wait on it.
    pub fn spawn(&self) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch {}", self.program))?;
        tracing::info!(program = %self.program, pid = child.id(), "launched demo");
        Ok(())
    }
}

/// Build the start hook from config.
///
/// Errors (bad command line, spawn failure) are returned from the hook and
/// propagate out of the TUI.
pub fn start_hook(config: &LaunchConfig) -> impl FnMut() -> Result<()> + 'static {
    let command = config.command.clone();
    move || match command.as_deref() {
        Some(line) => LaunchCommand::parse(line)?.spawn(),
        None => {
            tracing::info!("launch requested; no launch.command configured");
            Ok(())
        }
    }
}
