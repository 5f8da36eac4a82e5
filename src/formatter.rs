//! Renders parsed fields back into the `[{TIMESTAMP}] [{THREAD}/{LEVEL}]:
//! {MESSAGE}` template with per-field coloring.

use crate::colors::ColorScheme;
use crate::error::ProcessingError;
use crate::parser::ParsedLine;

/// The closed set of recognized severity levels. Anything else is a hard
/// failure; there is no fallback color for unknown levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    pub fn classify(text: &str) -> Result<Level, ProcessingError> {
        match text {
            "ERROR" => Ok(Level::Error),
            "WARN" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            _ => Err(ProcessingError::UnrecognizedLevel {
                level: text.to_string(),
            }),
        }
    }
}

/// Stateless per-line renderer. The timezone label is resolved once at
/// startup and injected here so formatting stays a pure function of its
/// inputs.
pub struct LineFormatter {
    scheme: ColorScheme,
    timezone_label: String,
}

impl LineFormatter {
    pub fn new(scheme: ColorScheme, timezone_label: impl Into<String>) -> Self {
        LineFormatter {
            scheme,
            timezone_label: timezone_label.into(),
        }
    }

    /// Render one parsed line. Fails only on an unrecognized level, in
    /// which case nothing is produced.
    pub fn format_line(&self, parsed: &ParsedLine) -> Result<String, ProcessingError> {
        let level = Level::classify(&parsed.level)?;
        let s = &self.scheme;

        // Timestamp form is `<green>TEXT<reset> (TZNAME)`; the timezone
        // label itself carries no coloring.
        Ok(format!(
            "[{}{}{} ({})] [{}{}{}/{}{}{}]: {}{}{}",
            s.timestamp,
            parsed.timestamp,
            s.reset,
            self.timezone_label,
            s.thread,
            parsed.thread,
            s.reset,
            self.level_color(level),
            parsed.level,
            s.reset,
            s.message,
            parsed.message,
            s.reset,
        ))
    }

    fn level_color(&self, level: Level) -> &'static str {
        match level {
            Level::Error => self.scheme.level_error,
            Level::Warn => self.scheme.level_warn,
            Level::Info => self.scheme.level_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(level: &str) -> ParsedLine {
        ParsedLine {
            timestamp: "12:34:56".to_string(),
            thread: "Server thread".to_string(),
            level: level.to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_colored_output_shape() {
        let formatter = LineFormatter::new(ColorScheme::new(true), "UTC");
        let line = formatter.format_line(&parsed("INFO")).unwrap();
        assert_eq!(
            line,
            "[\x1b[32m12:34:56\x1b[0m (UTC)] \
             [\x1b[38;5;12mServer thread\x1b[0m/\x1b[38;5;14mINFO\x1b[0m]: \
             \x1b[37mHello\x1b[0m"
        );
    }

    #[test]
    fn test_plain_output_shape() {
        let formatter = LineFormatter::new(ColorScheme::new(false), "CET");
        let line = formatter.format_line(&parsed("WARN")).unwrap();
        assert_eq!(line, "[12:34:56 (CET)] [Server thread/WARN]: Hello");
    }

    #[test]
    fn test_level_colors_differ() {
        let formatter = LineFormatter::new(ColorScheme::new(true), "UTC");
        let error = formatter.format_line(&parsed("ERROR")).unwrap();
        let warn = formatter.format_line(&parsed("WARN")).unwrap();
        let info = formatter.format_line(&parsed("INFO")).unwrap();
        assert!(error.contains("\x1b[38;5;9mERROR"));
        assert!(warn.contains("\x1b[38;5;11mWARN"));
        assert!(info.contains("\x1b[38;5;14mINFO"));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let formatter = LineFormatter::new(ColorScheme::new(true), "UTC");
        let err = formatter.format_line(&parsed("DEBUG")).unwrap_err();
        match err {
            ProcessingError::UnrecognizedLevel { level } => assert_eq!(level, "DEBUG"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_message_still_wrapped() {
        let formatter = LineFormatter::new(ColorScheme::new(true), "UTC");
        let mut fields = parsed("INFO");
        fields.message = String::new();
        let line = formatter.format_line(&fields).unwrap();
        assert!(line.ends_with("]: \x1b[37m\x1b[0m"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatter = LineFormatter::new(ColorScheme::new(true), "UTC");
        let fields = parsed("ERROR");
        let first = formatter.format_line(&fields).unwrap();
        let second = formatter.format_line(&fields).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_message_body_is_verbatim() {
        let formatter = LineFormatter::new(ColorScheme::new(false), "UTC");
        let mut fields = parsed("INFO");
        fields.message = "[{THREAD}] literal / braces: ok".to_string();
        let line = formatter.format_line(&fields).unwrap();
        assert!(line.ends_with("]: [{THREAD}] literal / braces: ok"));
    }
}
