//! Static export of the showcase content.
//!
//! Output is split into independently cacheable bundles so a static host can
//! cache the (rarely changing) roster separately from the command list:
//!
//! ```text
//! dist/
//!   features.json
//!   commands.json
//!   agents.json
//!   index.md
//!   manifest.json
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dispatch::ExternalLink;
use crate::error::{Result, ShowcaseError};
use crate::registry::{agents, commands, copy, features};

pub const FEATURES_BUNDLE: &str = "features.json";
pub const COMMANDS_BUNDLE: &str = "commands.json";
pub const AGENTS_BUNDLE: &str = "agents.json";
pub const INDEX_PAGE: &str = "index.md";
pub const MANIFEST: &str = "manifest.json";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    product: &'a str,
    version: &'a str,
    bundles: &'a [&'a str],
    entry: &'a str,
}

/// Files written by [`export_to`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Write every bundle into `out_dir`, creating it if needed.
pub fn export_to(out_dir: &Path, json_indent: usize) -> Result<ExportReport> {
    fs::create_dir_all(out_dir).map_err(|e| ShowcaseError::io(out_dir, e))?;

    let mut files = Vec::with_capacity(5);

    files.push(write_json(out_dir, FEATURES_BUNDLE, features(), json_indent)?);
    files.push(write_json(out_dir, COMMANDS_BUNDLE, commands(), json_indent)?);
    files.push(write_json(out_dir, AGENTS_BUNDLE, agents(), json_indent)?);

    files.push(write_index(out_dir)?);

    let manifest = Manifest {
        product: copy::PRODUCT_NAME,
        version: env!("CARGO_PKG_VERSION"),
        bundles: &[FEATURES_BUNDLE, COMMANDS_BUNDLE, AGENTS_BUNDLE],
        entry: INDEX_PAGE,
    };
    files.push(write_json(out_dir, MANIFEST, &manifest, json_indent)?);

    tracing::info!(out_dir = %out_dir.display(), files = files.len(), "showcase exported");

    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        files,
    })
}

fn write_json<T: Serialize + ?Sized>(
    out_dir: &Path,
    name: &str,
    value: &T,
    indent: usize,
) -> Result<PathBuf> {
    let path = out_dir.join(name);
    let file = File::create(&path).map_err(|e| ShowcaseError::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    if indent > 0 {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_slice());
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|e| ShowcaseError::json(name, e))?;
    } else {
        serde_json::to_writer(&mut writer, value).map_err(|e| ShowcaseError::json(name, e))?;
    }

    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ShowcaseError::io(&path, e))?;

    Ok(path)
}

fn write_index(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(INDEX_PAGE);
    let file = File::create(&path).map_err(|e| ShowcaseError::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    write_markdown(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ShowcaseError::io(&path, e))?;

    Ok(path)
}

/// Markdown rendition of the whole screen
pub fn write_markdown<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "# {}\n", copy::PRODUCT_NAME)?;
    writeln!(out, "{}\n", copy::TAGLINE)?;
    writeln!(
        out,
        "[{}]({}) · {}\n",
        copy::REPOSITORY_LABEL,
        ExternalLink::Repository.url(),
        copy::BADGES.join(" · ")
    )?;

    writeln!(out, "## Features\n")?;
    for feature in features() {
        writeln!(out, "### {}\n", feature.title)?;
        writeln!(out, "{}\n", feature.description)?;
        writeln!(out, "`{}`\n", feature.example)?;
    }

    writeln!(out, "## {}\n", copy::COMMANDS_HEADING)?;
    for command in commands() {
        writeln!(out, "- \"{}\"", command)?;
    }
    writeln!(out, "\n_{}_\n", copy::COMMANDS_HINT)?;

    writeln!(out, "## {}\n", copy::AGENTS_HEADING)?;
    writeln!(out, "| Agent | Role | Success Rate |")?;
    writeln!(out, "|-------|------|--------------|")?;
    for agent in agents() {
        writeln!(out, "| {} | {} | {} |", agent.name, agent.role, agent.success_rate)?;
    }

    writeln!(out, "\n## {}\n", copy::CTA_HEADING)?;
    writeln!(out, "{}\n", copy::CTA_BODY)?;
    writeln!(
        out,
        "[{}]({})",
        copy::DOCUMENTATION_LABEL,
        ExternalLink::Documentation.url()
    )?;

    Ok(())
}
