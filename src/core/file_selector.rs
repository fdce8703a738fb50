use crate::domain::models::{DirectoryEntry, EntryKind, ExclusionSet, SelectionList};
use crate::infra::file_system::list_entries;
use log::{debug, info};
use std::path::Path;

/// Asks the operator a question and returns the typed line.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> anyhow::Result<String>;
}

fn folder_question(name: &str) -> String {
    format!("Include folder '{}'? (y/n) ", name)
}

fn file_question(name: &str) -> String {
    format!("Include file '{}'? (y/n) ", name)
}

fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// Walks `root` depth-first, prompting for every entry that is not excluded,
/// and returns the chosen file paths in the order they were accepted.
pub fn select_files(
    root: &Path,
    exclusions: &ExclusionSet,
    prompt: &mut impl Prompt,
) -> anyhow::Result<SelectionList> {
    select_files_with(root, exclusions, prompt, &list_entries)
}

pub fn select_files_with(
    root: &Path,
    exclusions: &ExclusionSet,
    prompt: &mut impl Prompt,
    lister: &impl Fn(&Path) -> anyhow::Result<Vec<DirectoryEntry>>,
) -> anyhow::Result<SelectionList> {
    let mut selected = SelectionList::new();
    walk(root, exclusions, prompt, lister, &mut selected)?;
    info!("Selected {} files under {}", selected.len(), root.display());
    Ok(selected)
}

fn walk(
    dir: &Path,
    exclusions: &ExclusionSet,
    prompt: &mut impl Prompt,
    lister: &impl Fn(&Path) -> anyhow::Result<Vec<DirectoryEntry>>,
    selected: &mut SelectionList,
) -> anyhow::Result<()> {
    debug!("Walking directory: {}", dir.display());

    for entry in lister(dir)? {
        match entry.kind {
            EntryKind::Directory => {
                if exclusions.is_excluded(&entry.name) {
                    debug!("Skipping excluded directory: {}", entry.path.display());
                    continue;
                }

                let answer = prompt.ask(&folder_question(&entry.name))?;
                if is_affirmative(&answer) {
                    walk(&entry.path, exclusions, prompt, lister, selected)?;
                } else {
                    debug!("Folder declined: {}", entry.path.display());
                }
            }
            EntryKind::File => {
                let answer = prompt.ask(&file_question(&entry.name))?;
                if is_affirmative(&answer) {
                    debug!("File selected: {}", entry.path.display());
                    selected.push(entry.path);
                }
            }
            EntryKind::Other => {
                debug!("Skipping special entry: {}", entry.path.display());
            }
        }
    }

    Ok(())
}
