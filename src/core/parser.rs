// irclogparse - core/parser.rs
//
// Line pipeline: normalise -> timestamp extraction -> classification.
// Core layer: consumes any line source, never touches the filesystem
// directly. Strictly one-in-one-out — each non-empty line yields exactly
// one record, in input order, with no state carried between lines.

use crate::core::classify::{classify, ClassifyConfig};
use crate::core::decode::RawLine;
use crate::core::model::Record;
use crate::core::timestamp::split_timestamp;
use crate::util::error::DecodeError;

/// Strip exactly one trailing line-ending sequence from a line.
///
/// `"\r\n"` is checked before the single-character endings so the pair
/// is removed in one strip, never split into two.
pub fn strip_line_ending(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix('\n') {
        stripped
    } else if let Some(stripped) = line.strip_suffix('\r') {
        stripped
    } else {
        line
    }
}

/// Classify a single text line into a record.
///
/// Returns `None` for an empty line (empty string, or a line consisting
/// solely of one line-ending sequence); every other line produces exactly
/// one record, however malformed its content.
pub fn parse_line(line: &str, config: &ClassifyConfig) -> Option<Record> {
    let line = strip_line_ending(line);
    if line.is_empty() {
        return None;
    }

    let (timestamp, remainder) = split_timestamp(line);
    let event = classify(remainder, config);
    tracing::trace!(category = %event.category(), timestamp, "Line classified");

    Some(Record {
        timestamp: timestamp.map(str::to_owned),
        event,
    })
}

/// Lazy record iterator over any source of text or byte lines.
///
/// The caller supplies an already-open line source and keeps ownership of
/// its lifetime; `LogParser` only pulls lines forward, one at a time.
/// Decoding failures surface as `Err` items; empty lines are skipped
/// without producing an item.
pub struct LogParser<I> {
    lines: I,
    config: ClassifyConfig,
}

impl<I, L> LogParser<I>
where
    I: Iterator<Item = L>,
    L: RawLine,
{
    /// Parse with the default configuration (dircproxy off).
    pub fn new(lines: impl IntoIterator<Item = L, IntoIter = I>) -> Self {
        Self::with_config(lines, ClassifyConfig::default())
    }

    /// Parse with an explicit configuration.
    pub fn with_config(lines: impl IntoIterator<Item = L, IntoIter = I>, config: ClassifyConfig) -> Self {
        Self {
            lines: lines.into_iter(),
            config,
        }
    }
}

impl<I, L> Iterator for LogParser<I>
where
    I: Iterator<Item = L>,
    L: RawLine,
{
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            let text = match raw.decode() {
                Ok(text) => text,
                Err(e) => return Some(Err(e)),
            };
            if let Some(record) = parse_line(&text, &self.config) {
                return Some(Ok(record));
            }
            // Empty line: no record, pull the next one.
        }
    }
}
