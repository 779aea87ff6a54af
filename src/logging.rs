//! Leveled logging for the report pipeline.
//!
//! Provides context-rich logging tagged with the pipeline stage that
//! produced each message. Supports console output and an optional log
//! file. The global logger starts uninitialized and every call is a
//! no-op until `init_logger` runs — the transformation core carries no
//! logging obligation, so library users (and tests) get silence by
//! default.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline Stages
// ---------------------------------------------------------------------------

/// Which part of the pipeline a log entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loader,
    Temperature,
    Precipitation,
    Verify,
    Render,
    System,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Loader => write!(f, "LOAD"),
            Stage::Temperature => write!(f, "TEMP"),
            Stage::Precipitation => write!(f, "PRECIP"),
            Stage::Verify => write!(f, "VERIFY"),
            Stage::Render => write!(f, "RENDER"),
            Stage::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    fn log(&self, level: LogLevel, stage: Stage, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!("{} {} {}: {}", timestamp, level, stage, message);

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info => println!("{}", log_entry),
                LogLevel::Debug => println!("  {}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("  ✗ {}: {}", stage, message),
                LogLevel::Warning => eprintln!("  ⚠ {}: {}", stage, message),
                LogLevel::Info => println!("  {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, stage, message);
    }
}

/// Log a warning message
pub fn warn(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, stage, message);
    }
}

/// Log an error message
pub fn error(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, stage, message);
    }
}

/// Log a debug message
pub fn debug(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, stage, message);
    }
}

// ---------------------------------------------------------------------------
// Transform Summary Logging
// ---------------------------------------------------------------------------

/// Log a summary of one builder pass: how many input records survived
/// parsing and how many were skipped. A skip is expected behavior, so the
/// summary stays at info unless nothing survived at all.
pub fn log_transform_summary(stage: Stage, total: usize, kept: usize, skipped: usize) {
    let message = format!(
        "Transform complete: {}/{} records parsed, {} skipped",
        kept, total, skipped
    );

    if total > 0 && kept == 0 {
        warn(stage, &message);
    } else {
        info(stage, &message);
    }
}
