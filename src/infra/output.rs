use crate::infra::file_system::ensure_directory;
use anyhow::Context;
use chrono::{DateTime, Utc};
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path.display());
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write output file {}", self.path.display()))?;
        info!("Output written to file: {}", self.path.display());
        Ok(())
    }
}

/// `merged-repo-<ISO-8601 UTC, millisecond precision, colons as hyphens>.txt`
pub fn timestamped_file_name(now: DateTime<Utc>) -> String {
    let timestamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace(':', "-");
    format!("merged-repo-{}.txt", timestamp)
}

/// Ensures `<working_dir>/<dir_name>` exists and returns a fresh file path inside it.
/// The file itself is not created.
pub fn prepare_output(working_dir: &Path, dir_name: &str) -> anyhow::Result<PathBuf> {
    let output_dir = working_dir.join(dir_name);
    ensure_directory(&output_dir)?;

    let output_path = output_dir.join(timestamped_file_name(Utc::now()));
    debug!("Output path: {}", output_path.display());
    Ok(output_path)
}

pub fn print_instructions() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stdout, "Select files and folders to include in the merge:")?;
    stdout.execute(ResetColor)?;
    Ok(())
}

pub fn report_saved(output_path: &Path) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "Merged repository saved to: {}", output_path.display())?;
    stdout.execute(ResetColor)?;
    Ok(())
}
