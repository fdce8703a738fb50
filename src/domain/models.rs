use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// Directory basenames skipped without prompting, at any depth.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

pub type SelectionList = Vec<PathBuf>;

#[derive(Debug, Default)]
pub struct MergedDocument {
    pub content: String,
    pub file_count: usize,
}

#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub working_dir: PathBuf,
    pub exclusions: ExclusionSet,
    pub output_dir_name: String,
}

impl MergeConfig {
    pub const DEFAULT_EXCLUSIONS: &'static [&'static str] = &["node_modules"];
    pub const OUTPUT_DIR_NAME: &'static str = "llm_text_transcripts";

    pub fn for_working_dir(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            exclusions: ExclusionSet::new(Self::DEFAULT_EXCLUSIONS.iter().copied()),
            output_dir_name: Self::OUTPUT_DIR_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_matches_exact_basename_only() {
        let exclusions = ExclusionSet::new(["node_modules"]);

        assert!(exclusions.is_excluded("node_modules"));
        assert!(!exclusions.is_excluded("node_modules_old"));
        assert!(!exclusions.is_excluded("Node_Modules"));
        assert!(!exclusions.is_excluded("src/node_modules"));
    }

    #[test]
    fn test_default_config() {
        let config = MergeConfig::for_working_dir(Path::new("/work"));

        assert_eq!(config.working_dir, PathBuf::from("/work"));
        assert_eq!(config.output_dir_name, "llm_text_transcripts");
        assert_eq!(config.exclusions.len(), 1);
        assert!(config.exclusions.is_excluded("node_modules"));
    }
}
