use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use showcase_core::export::export_to;
use showcase_core::ShowcaseConfig;

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output directory (default: build.out_dir from config, usually dist/)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// JSON indent width (0 for compact output)
    #[arg(long)]
    pub indent: Option<usize>,
}

pub fn run_export(args: ExportArgs, config: &ShowcaseConfig) -> Result<()> {
    let out_dir = args.out.unwrap_or_else(|| config.build.out_dir.clone());
    let indent = args.indent.unwrap_or(config.build.json_indent);

    let report = export_to(&out_dir, indent)
        .with_context(|| format!("Failed to export showcase to {}", out_dir.display()))?;

    println!("✅ Exported {} files to {}", report.files.len(), report.out_dir.display());
    for file in &report.files {
        if let Some(name) = file.file_name() {
            println!("   {}", name.to_string_lossy());
        }
    }
    Ok(())
}
