use is_terminal::IsTerminal;

/// ANSI color codes applied per log field.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub timestamp: &'static str,   // Green for the timestamp text
    pub thread: &'static str,      // Blue (256-color) for the thread name
    pub level_error: &'static str, // Red for ERROR
    pub level_warn: &'static str,  // Yellow for WARN
    pub level_info: &'static str,  // Cyan for INFO
    pub message: &'static str,     // White for the message body
    pub reset: &'static str,       // Reset to default color
}

impl ColorScheme {
    /// Create the scheme; `use_colors = false` yields empty strings so the
    /// same formatting path produces plain text.
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                timestamp: "\x1b[32m",
                thread: "\x1b[38;5;12m",
                level_error: "\x1b[38;5;9m",
                level_warn: "\x1b[38;5;11m",
                level_info: "\x1b[38;5;14m",
                message: "\x1b[37m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                timestamp: "",
                thread: "",
                level_error: "",
                level_warn: "",
                level_info: "",
                message: "",
                reset: "",
            }
        }
    }
}

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colors only when stdout is a terminal and NO_COLOR is unset
    Auto,
    /// Always emit color escapes
    Always,
    /// Never emit color escapes
    Never,
}

impl ColorChoice {
    /// Resolve the choice for a run. `writing_to_file` forces plain output
    /// under `Auto` since the sink is not a terminal.
    pub fn resolve(self, writing_to_file: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !writing_to_file && should_use_colors(),
        }
    }
}

/// Auto-detection: stdout must be a tty and NO_COLOR must not be set.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_scheme_is_empty() {
        let scheme = ColorScheme::new(false);
        assert!(scheme.timestamp.is_empty());
        assert!(scheme.level_error.is_empty());
        assert!(scheme.reset.is_empty());
    }

    #[test]
    fn test_color_scheme_codes() {
        let scheme = ColorScheme::new(true);
        assert_eq!(scheme.timestamp, "\x1b[32m");
        assert_eq!(scheme.thread, "\x1b[38;5;12m");
        assert_eq!(scheme.reset, "\x1b[0m");
    }

    #[test]
    fn test_explicit_choices_ignore_sink() {
        assert!(ColorChoice::Always.resolve(true));
        assert!(!ColorChoice::Never.resolve(false));
    }

    #[test]
    fn test_auto_is_plain_for_file_output() {
        assert!(!ColorChoice::Auto.resolve(true));
    }
}
