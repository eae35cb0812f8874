use crate::config::AppConfig;
use env_logger::{Builder, Target};
use std::fs::OpenOptions;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// The terminal belongs to the form; log only to a file, if one is set.
    FileOnly,
    Stderr,
}

/// Installs the global logger. `REGFORM_LOG` may refine filters per module
/// on top of the configured level.
pub fn init(config: &AppConfig, sink: LogSink) -> io::Result<()> {
    if sink == LogSink::FileOnly && config.log_file.is_none() {
        return Ok(());
    }

    let mut builder = Builder::new();
    builder.filter_level(config.log_level);
    if let Ok(filters) = std::env::var("REGFORM_LOG") {
        builder.parse_filters(&filters);
    }

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
