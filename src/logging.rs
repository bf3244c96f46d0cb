// src/logging.rs
// Timestamped console logging for the bingo caller.

use chrono::Local;

#[derive(Debug, Clone, Copy)]
enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{} - {} - {}", timestamp, level.label(), message)
}

pub fn info(message: &str) {
    println!("{}", format_line(LogLevel::Info, message));
}

pub fn warning(message: &str) {
    println!("{}", format_line(LogLevel::Warning, message));
}

pub fn error(message: &str) {
    println!("{}", format_line(LogLevel::Error, message));
}

/// Error line on stderr, for failures that must survive display redraws.
pub fn error_stderr(message: &str) {
    eprintln!("{}", format_line(LogLevel::Error, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_carries_level_and_message() {
        let line = format_line(LogLevel::Warning, "pool running low");
        assert!(line.contains("WARNING"));
        assert!(line.ends_with("pool running low"));
    }
}
