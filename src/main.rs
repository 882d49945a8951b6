use std::{path::Path, process::ExitCode};

use clap::Parser;
use mazegen::app::{App, config::Config};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

const LOG_FILE: &str = "mazegen.log";

/// Open (creating the directory if needed) the log file inside `dir`.
fn log_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
}

/// Send log output to a file so it never interleaves with the mazes on stdout.
/// The returned guard flushes the writer when dropped.
fn init_logging(config: &Config) -> Result<WorkerGuard, InitError> {
    let appender = log_appender(&config.log_dir())?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    Ok(guard)
}

fn main() -> ExitCode {
    let config = Config::parse();
    let _guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: cannot open log file in {}: {err}", config.log_dir().display());
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(config);
    let mut stdout = std::io::stdout().lock();
    match app.run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Maze generation failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("mazegen-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_log_appender_creates_file() {
        let dir = scratch_dir("ok").join("nested");
        log_appender(&dir).unwrap();
        assert!(dir.join(LOG_FILE).exists());
        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_log_appender_rejects_file_as_directory() {
        let base = scratch_dir("file");
        let blocker = base.join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        assert!(log_appender(&blocker.join("sub")).is_err());
        std::fs::remove_dir_all(base).unwrap();
    }
}
