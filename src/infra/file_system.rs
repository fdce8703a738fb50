use crate::domain::models::{DirectoryEntry, EntryKind};
use anyhow::Context;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the immediate entries of `dir` in the order the filesystem reports them.
///
/// Symbolic links are followed when determining the kind, so a link to a
/// directory is reported as a directory and a dangling link is an error.
pub fn list_entries(dir: &Path) -> anyhow::Result<Vec<DirectoryEntry>> {
    debug!("Listing entries in: {}", dir.display());
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;

        let file_type = if entry.file_type().is_symlink() {
            fs::metadata(entry.path())
                .with_context(|| format!("Failed to resolve link {}", entry.path().display()))?
                .file_type()
        } else {
            entry.file_type()
        };

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.into_path(),
            kind,
        });
    }

    debug!("Found {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Reads the whole file as text. Invalid UTF-8 sequences become U+FFFD.
pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let bytes = fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;
    debug!("Read {} bytes from file", bytes.len());

    match String::from_utf8(bytes) {
        Ok(contents) => Ok(contents),
        Err(e) => {
            warn!("File is not valid UTF-8, decoding lossily: {}", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Creates `dir` unless it already exists. Losing a creation race to another
/// process is not an error.
pub fn ensure_directory(dir: &Path) -> anyhow::Result<()> {
    if dir.is_dir() {
        debug!("Directory already exists: {}", dir.display());
        return Ok(());
    }

    match fs::create_dir(dir) {
        Ok(()) => {
            info!("Created directory: {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
            debug!("Directory appeared concurrently: {}", dir.display());
            Ok(())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to create directory {}", dir.display()))
        }
    }
}
