use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use showcase_core::ShowcaseConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the defaults
    Init(InitArgs),
    /// Print the effective config as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

/// `init` and `path` never read the existing file, so they keep working
/// when it is broken.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => {
            println!("{}", ShowcaseConfig::config_path().display());
            Ok(())
        }
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = ShowcaseConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    ShowcaseConfig::default()
        .save_to(&config_path)
        .context("Failed to write config file")?;

    println!("✅ Created config at: {:?}", config_path);
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {:?}", config_path);
    println!("  2. Set launch.command to what \"Launch Magic Pipeline\" should run");
    Ok(())
}

fn run_show() -> Result<()> {
    let config = ShowcaseConfig::load().context("Failed to load showcase config")?;
    print!("{}", config.to_toml().context("Failed to render config")?);
    Ok(())
}
