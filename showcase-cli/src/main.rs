//! showcase - Magic Pipeline demo showcase
//!
//! Entry point for the showcase binary, which provides:
//! - The interactive showcase screen (default, or `tui` subcommand)
//! - Static export of the showcase content (`export`)
//! - Dev/preview static servers for the export (`serve`, with `server` feature)
//! - Config management (`config`) and shell completions (`completions`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use showcase_core::{Dispatcher, FeatureId, ShowcaseConfig};

mod commands;
mod launch;
mod platform;
mod tracing_setup;
mod tui;

use platform::{BrowserOpener, SystemClipboard};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "showcase",
    author,
    version,
    about = "Interactive terminal showcase for Magic Pipeline",
    long_about = "Browse Magic Pipeline features, copy sample AI commands to the clipboard, \
                  and launch the demo. Also exports the showcase as static bundles and serves them."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive showcase screen (default)
    Tui(TuiArgs),
    /// Write the showcase as static, separately cacheable bundles
    Export(commands::export::ExportArgs),
    /// Serve the exported showcase on the dev or preview port
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),
    /// Manage showcase configuration (init, show, path)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug, Default)]
struct TuiArgs {
    /// Feature card to select on open (ai-chat, visual-editor, ai-agents, data-export)
    #[arg(long, value_name = "FEATURE")]
    select: Option<FeatureId>,
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let tracing_config = TracingConfig { debug: cli.debug };
    let command = cli.command.unwrap_or(Commands::Tui(TuiArgs::default()));

    // The screen owns stdout/stderr; log to a file while it runs
    let _log_guard = match command {
        Commands::Tui(_) => tracing_setup::init_file(
            &tracing_config,
            &tracing_setup::default_log_dir(&ShowcaseConfig::state_dir()),
        )
        .ok(),
        _ => {
            tracing_setup::init_console(&tracing_config).ok();
            None
        }
    };

    match command {
        Commands::Tui(args) => run_tui(args, &load_config()?)?,
        Commands::Export(args) => commands::run_export(args, &load_config()?)?,
        #[cfg(feature = "server")]
        Commands::Serve(args) => commands::run_serve(args, &load_config()?).await?,
        Commands::Config(args) => commands::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn load_config() -> Result<ShowcaseConfig> {
    ShowcaseConfig::load().context("Failed to load showcase config")
}

fn run_tui(args: TuiArgs, config: &ShowcaseConfig) -> Result<()> {
    let mut dispatcher = Dispatcher::new(
        SystemClipboard::new(),
        BrowserOpener,
        launch::start_hook(&config.launch),
    );
    tui::run(&mut dispatcher, args.select)
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
