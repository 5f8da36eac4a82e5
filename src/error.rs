/// Positional failures raised while scanning one line against the log grammar.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed line: unexpected character '{found}' at index {index}")]
    MalformedLine { found: char, index: usize },

    #[error("unterminated field: end of line reached while scanning for '{expected}' from index {index}")]
    UnterminatedField { expected: char, index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unrecognized log level '{level}'")]
    UnrecognizedLevel { level: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
