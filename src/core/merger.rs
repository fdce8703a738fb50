use crate::domain::models::MergedDocument;
use crate::infra::file_system::read_file_contents;
use crate::infra::output::{FileWriter, OutputWriter};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

fn section_header(path: &Path) -> String {
    format!("\n{} CODE IS BELOW\n", path.to_string_lossy().to_uppercase())
}

/// Concatenates every file in `paths`, in order, each behind its section header.
/// Fails on the first unreadable file.
pub fn build_merged_document(
    paths: &[PathBuf],
    file_reader: impl Fn(&Path) -> anyhow::Result<String>,
) -> anyhow::Result<MergedDocument> {
    debug!("Building merged document from {} files", paths.len());
    let mut document = MergedDocument::default();

    for path in paths {
        let content = file_reader(path)?;
        debug!("Adding file {} ({} bytes)", path.display(), content.len());

        document.content.push_str(&section_header(path));
        document.content.push_str(&content);
        document.content.push('\n');
        document.file_count += 1;
    }

    Ok(document)
}

/// Reads all selected files into memory, then writes the merged document to
/// `destination` in a single write.
pub fn merge(paths: &[PathBuf], destination: &Path) -> anyhow::Result<MergedDocument> {
    if paths.is_empty() {
        warn!("No files selected; writing an empty document");
    }

    let document = build_merged_document(paths, read_file_contents)?;

    FileWriter::new(destination).write(&document.content)?;
    info!(
        "Merged {} files ({} bytes) into {}",
        document.file_count,
        document.content.len(),
        destination.display()
    );
    Ok(document)
}
