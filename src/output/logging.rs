// src/output/logging.rs
use log::{Level, LevelFilter, Metadata, Record};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub enum LoggingError {
    LockError(String),
    Io(std::io::Error),
    SetLoggerError(log::SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::LockError(msg) => write!(f, "{}", msg),
            LoggingError::Io(err) => write!(f, "log file: {}", err),
            LoggingError::SetLoggerError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<log::SetLoggerError> for LoggingError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggingError::SetLoggerError(err)
    }
}

impl From<std::io::Error> for LoggingError {
    fn from(err: std::io::Error) -> Self {
        LoggingError::Io(err)
    }
}

impl<T> From<PoisonError<T>> for LoggingError {
    fn from(_: PoisonError<T>) -> Self {
        LoggingError::LockError("log sink mutex poisoned".into())
    }
}

lazy_static::lazy_static! {
    static ref LOG_SINK: Mutex<Option<File>> = Mutex::new(None);
}

/// One log line as written to the file: `[timestamp] LEVEL message`.
pub fn format_line(level: Level, message: &str) -> String {
    let clean = strip_ansi_escapes::strip(message.as_bytes())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_else(|_| message.to_string());
    format!(
        "[{}] {:<5} {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        clean
    )
}

/// File-backed logger. The terminal belongs to the UI, so nothing is printed.
pub struct AppLogger {
    level: LevelFilter,
}

impl AppLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn write_line(line: &str) -> Result<(), LoggingError> {
        let mut sink = LOG_SINK.lock()?;
        if let Some(file) = sink.as_mut() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), &record.args().to_string());
        // A broken sink must never take the UI down with it.
        let _ = Self::write_line(&line);
    }

    fn flush(&self) {
        if let Ok(mut sink) = LOG_SINK.lock() {
            if let Some(file) = sink.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Opens (appending) the log file and installs the global logger.
///
/// The logger itself accepts everything; `level` only sets the facade's max
/// level, which [`set_level`] can change later once the config is loaded.
pub fn init(level: LevelFilter, path: &Path) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    *LOG_SINK.lock()? = Some(file);

    log::set_boxed_logger(Box::new(AppLogger::new(LevelFilter::Trace)))?;
    log::set_max_level(level);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_level_and_drop_ansi() {
        let line = format_line(Level::Warn, "\x1b[31mred\x1b[0m alert");
        assert!(line.starts_with('['));
        assert!(line.contains("WARN  red alert"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn filter_respects_level() {
        let logger = AppLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!log::Log::enabled(&logger, &debug));
        assert!(log::Log::enabled(&logger, &error));
    }
}
