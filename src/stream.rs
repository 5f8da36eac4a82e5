//! Line-by-line stream driver: reads raw lines, runs parse then format,
//! writes the rendered line. One line is fully processed before the next is
//! read; end-of-stream is clean termination.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::error::ProcessingError;
use crate::formatter::LineFormatter;
use crate::parser::parse_line;

/// Configuration for stream behavior
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub error_strategy: ErrorStrategy,
    pub debug: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            error_strategy: ErrorStrategy::FailFast,
            debug: false,
        }
    }
}

/// Error handling strategy for malformed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStrategy {
    /// Stop processing on first error (default)
    FailFast,
    /// Report problematic lines and continue processing
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub lines_processed: usize,
    pub lines_output: usize,
    pub errors: usize,
    pub processing_time: Duration,
}

/// Drives one input stream through the parser and formatter.
pub struct StreamColorizer {
    formatter: LineFormatter,
    config: StreamConfig,
}

impl StreamColorizer {
    pub fn new(formatter: LineFormatter, config: StreamConfig) -> Self {
        StreamColorizer { formatter, config }
    }

    /// Process a whole stream. A failing line produces no output at all;
    /// under `FailFast` it also ends the run. Broken pipe on the output
    /// side ends the run without error.
    pub fn process_stream<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<ProcessingStats, ProcessingError> {
        let start_time = Instant::now();
        let mut stats = ProcessingStats::default();
        let mut line_number = 0usize;

        for line_result in input.lines() {
            let line = match line_result {
                Ok(line) => line,
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::UnexpectedEof {
                        break;
                    }
                    return Err(ProcessingError::Io(e));
                }
            };

            line_number += 1;
            stats.lines_processed += 1;

            let formatted = parse_line(&line)
                .map_err(ProcessingError::from)
                .and_then(|parsed| self.formatter.format_line(&parsed));

            match formatted {
                Ok(rendered) => {
                    if let Err(e) = writeln!(output, "{}", rendered) {
                        if e.kind() == std::io::ErrorKind::BrokenPipe {
                            break;
                        }
                        return Err(ProcessingError::Io(e));
                    }
                    stats.lines_output += 1;
                }
                Err(err) => match self.config.error_strategy {
                    ErrorStrategy::FailFast => return Err(err),
                    ErrorStrategy::Skip => {
                        stats.errors += 1;
                        if self.config.debug {
                            eprintln!("mccolor: line {}: {}", line_number, err);
                        }
                    }
                },
            }
        }

        stats.processing_time = start_time.elapsed();
        Ok(stats)
    }
}
