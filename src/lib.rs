// src/lib.rs
pub mod colors;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod stream;
pub mod timezone;

pub use colors::{should_use_colors, ColorChoice, ColorScheme};
pub use error::{ParseError, ProcessingError};
pub use formatter::{Level, LineFormatter};
pub use parser::{parse_line, ParsedLine};
pub use stream::{ErrorStrategy, ProcessingStats, StreamColorizer, StreamConfig};
pub use timezone::{display_name_for, display_timezone};
