#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    /// Errors go to stderr, everything else to stdout.
    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        );
        if level == LogLevel::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: &[String]) {
        self.log_message(level, message);
        for t in trace {
            if level == LogLevel::Error {
                eprintln!("     ↳ {}", t);
            } else {
                println!("     ↳ {}", t);
            }
        }
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        format!(
            "{}[{}{}wpbump{}{}]{}",
            SetForegroundColor(Color::Grey),
            SetForegroundColor(Color::Rgb {
                r: 33,
                g: 117,
                b: 155,
            }),
            SetAttribute(Attribute::Bold),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Grey),
            ResetColor
        )
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[wpbump]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        format!(
            "[{}{}{}{}]{}",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            status_label(level),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", status_label(level))
    }
}

fn status_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Success => "SUCCESS",
        LogLevel::Error => "ERROR",
        LogLevel::Info => "INFO",
        LogLevel::Warning => "WARNING",
    }
}
