use crate::core::file_selector::{Prompt, select_files};
use crate::core::merger::merge;
use crate::domain::models::MergeConfig;
use crate::infra::logger::setup_logger;
use crate::infra::output::{prepare_output, print_instructions, report_saved};
use crate::infra::prompt::ConsolePrompt;
use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "merge-repo", version)]
#[command(
    about = "Interactively pick files from the current directory and merge them into one text file",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let working_dir =
        std::env::current_dir().context("Failed to determine the working directory")?;
    let config = MergeConfig::for_working_dir(&working_dir);

    print_instructions()?;
    let mut prompt = ConsolePrompt::stdio();
    let output_path = merge_repository(&config, &mut prompt)?;

    report_saved(&output_path)
}

fn merge_repository(config: &MergeConfig, prompt: &mut impl Prompt) -> anyhow::Result<PathBuf> {
    info!("Selecting files in {}", config.working_dir.display());
    debug!(
        "Excluding {} directory names; output directory: {}",
        config.exclusions.len(),
        config.output_dir_name
    );
    let selected_files = select_files(&config.working_dir, &config.exclusions, prompt)?;

    let output_path = prepare_output(&config.working_dir, &config.output_dir_name)?;

    info!("Merging {} files", selected_files.len());
    merge(&selected_files, &output_path)?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct RecordingPrompt {
        asked: Vec<String>,
    }

    impl Prompt for RecordingPrompt {
        fn ask(&mut self, question: &str) -> anyhow::Result<String> {
            self.asked.push(question.to_string());
            Ok("y".to_string())
        }
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["merge-repo"]).unwrap();
        assert_eq!(cli.verbose, 0);

        let cli = Cli::try_parse_from(["merge-repo", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(Cli::try_parse_from(["merge-repo", "--path", "."]).is_err());
        assert!(Cli::try_parse_from(["merge-repo", "src"]).is_err());
    }

    #[test]
    fn test_merge_repository_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "hello").unwrap();
        fs::create_dir(temp_dir.path().join("node_modules")).unwrap();

        let config = MergeConfig::for_working_dir(temp_dir.path());
        let mut prompt = RecordingPrompt { asked: Vec::new() };

        let output_path = merge_repository(&config, &mut prompt).unwrap();

        assert_eq!(prompt.asked, vec!["Include file 'a.txt'? (y/n) ".to_string()]);
        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            format!("\n{} CODE IS BELOW\nhello\n", a.to_string_lossy().to_uppercase())
        );

        let outputs: Vec<_> = fs::read_dir(temp_dir.path().join("llm_text_transcripts"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].starts_with("merged-repo-"));
        assert!(outputs[0].ends_with(".txt"));
    }

    #[test]
    fn test_closed_input_aborts_without_output() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

        let config = MergeConfig::for_working_dir(temp_dir.path());
        let mut prompt = ConsolePrompt::new(Cursor::new(""), Vec::new());

        assert!(merge_repository(&config, &mut prompt).is_err());
        assert!(!temp_dir.path().join("llm_text_transcripts").exists());
    }
}
