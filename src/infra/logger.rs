use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

pub const LOG_LEVEL_ENV: &str = "MERGE_REPO_LOG_LEVEL";

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// `merge_repo::core::merger` -> `core::merger`
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
        .unwrap_or(target)
}

/// Logs go to stderr so they never mix with the prompts on stdout.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for(verbosity).as_str());

    Builder::from_env(env)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{} {style}{:<5}{style:#} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                short_target(record.target()),
                record.args()
            )
        })
        .try_init()
}
