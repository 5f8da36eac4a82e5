//! Positional scanner for the fixed log line grammar
//! `[TIMESTAMP] [THREAD/LEVEL]: MESSAGE`.
//!
//! Four sub-scanners run in strict sequence, each consuming exactly the
//! characters belonging to its field (delimiters included). There is no
//! shared cursor object: every scanner takes a byte position and returns
//! the extracted span together with the position the next scanner starts
//! from. Parsing is all-or-nothing per line; no partial result escapes.

use crate::error::ParseError;

/// The four fields of one successfully parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub timestamp: String,
    pub thread: String,
    pub level: String,
    pub message: String,
}

/// Parse one raw line (no trailing newline) into its four fields.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let (timestamp, pos) = scan_timestamp(line, 0)?;
    let (thread, pos) = scan_thread(line, pos)?;
    let (level, pos) = scan_level(line, pos)?;
    let message = scan_message(line, pos)?;

    Ok(ParsedLine {
        timestamp: timestamp.to_string(),
        thread: thread.to_string(),
        level: level.to_string(),
        message: message.to_string(),
    })
}

/// Require `expected` at `pos`, returning the position just past it.
///
/// A different character is a malformed line; running out of input counts
/// as reaching end-of-line before a required delimiter.
fn expect(line: &str, pos: usize, expected: char) -> Result<usize, ParseError> {
    match line[pos..].chars().next() {
        Some(c) if c == expected => Ok(pos + c.len_utf8()),
        Some(c) => Err(ParseError::MalformedLine { found: c, index: pos }),
        None => Err(ParseError::UnterminatedField {
            expected,
            index: pos,
        }),
    }
}

/// Scan forward from `pos` until `terminator`, returning the span before it
/// and the position just past it.
fn scan_until(line: &str, pos: usize, terminator: char) -> Result<(&str, usize), ParseError> {
    match line[pos..].find(terminator) {
        Some(offset) => {
            let end = pos + offset;
            Ok((&line[pos..end], end + terminator.len_utf8()))
        }
        None => Err(ParseError::UnterminatedField {
            expected: terminator,
            index: pos,
        }),
    }
}

/// `[` TEXT `]`: text may be anything but `]`.
fn scan_timestamp(line: &str, pos: usize) -> Result<(&str, usize), ParseError> {
    let pos = expect(line, pos, '[')?;
    scan_until(line, pos, ']')
}

/// ` [` THREAD, up to the rightmost `/` before the group's closing `]`.
///
/// Thread names may themselves contain slashes, so the delimiter cannot be
/// the first `/` seen going forward. The group's `]` is located first and
/// the `/` is searched backward from there, bounded to the group. The
/// returned position sits exactly on the `/` so the level scanner consumes
/// it as its leading delimiter.
fn scan_thread(line: &str, pos: usize) -> Result<(&str, usize), ParseError> {
    let pos = expect(line, pos, ' ')?;
    let pos = expect(line, pos, '[')?;

    let close = match line[pos..].find(']') {
        Some(offset) => pos + offset,
        None => {
            return Err(ParseError::UnterminatedField {
                expected: ']',
                index: pos,
            })
        }
    };

    // A group with no thread/level separator reports the `]` that ended the
    // bounded backward search.
    let delimiter = match line[pos..close].rfind('/') {
        Some(offset) => pos + offset,
        None => {
            return Err(ParseError::MalformedLine {
                found: ']',
                index: close,
            })
        }
    };

    Ok((&line[pos..delimiter], delimiter))
}

/// `/` LEVEL `]`: raw level text; classification happens in the formatter.
fn scan_level(line: &str, pos: usize) -> Result<(&str, usize), ParseError> {
    let pos = expect(line, pos, '/')?;
    scan_until(line, pos, ']')
}

/// `: ` MESSAGE: the unscanned remainder of the line, possibly empty.
fn scan_message(line: &str, pos: usize) -> Result<&str, ParseError> {
    let pos = expect(line, pos, ':')?;
    let pos = expect(line, pos, ' ')?;
    Ok(&line[pos..])
}
