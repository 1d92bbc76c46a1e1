use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level == Level::Info || self.verbose
    }

    pub fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        println!("{}", self.format_line(&timestamp, level, message));
    }

    fn format_line(&self, timestamp: &str, level: Level, message: &str) -> String {
        let level_tag = match level {
            Level::Info => "",
            Level::Debug => "[debug]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_tag, message),
            None => format!("[{}]{} {}", timestamp, level_tag, message),
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(level: Level, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(Level::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::Level::Debug, &format!($($arg)*))
        }
    };
}
