// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Event-stream loader for the crossing-session config format.
//!
//! This module turns the simplified structured-text config describing hikers
//! and bridges into an ordered `CrossingEvent` stream, ready to be fed into
//! a crossing session. The format is a small YAML-like document:
//!
//! ```raw
//! events: hiking              # Hiking event
//!
//! hikers:                     # List of hikers in the group
//!   - name: A                 # Name of the hiker
//!     speed : 100             # speed in feet/min
//!   - name : B
//!     speed : 50
//!
//! bridge :                    # Encountered bridge details
//!   - name: 1st
//!     length : 100            # length in feet
//! ```
//!
//! An add-hiker event fires when a `speed` value completes a hiker record;
//! a cross-bridge event fires when a `length` value completes a bridge
//! record. Lines may carry comments introduced by `#`, list-item dashes are
//! tolerated, and unknown keys are ignored.
//!
//! Malformed numeric fields never become events: the offending record is
//! skipped and recorded as a `SkippedRecord` carrying the line number, the
//! field, the raw token, and a failure kind (`InvalidNumber` for
//! unparseable text, `OutOfRange` for non-positive or non-finite values).
//! The engines downstream therefore never see an invalid speed or length.
//! The reader accepts any `BufRead`, file path, raw reader, or string
//! slice, making it convenient to integrate with tests and tooling.

use crate::{
    event::CrossingEvent,
    model::{Bridge, Hiker},
};
use num_traits::Float;
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the event loading process.
#[derive(Debug)]
pub enum EventReaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A numeric field was rejected while `fail_on_skip` was enabled.
    Numeric(SkippedRecord),
}

impl Display for EventReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Numeric(record) => write!(f, "Numeric error: {}", record),
        }
    }
}

impl std::error::Error for EventReaderError {}

impl From<std::io::Error> for EventReaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// The reason a numeric field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericIssueKind {
    /// The token could not be parsed as a number.
    InvalidNumber,
    /// The token parsed, but the value is non-positive or non-finite.
    OutOfRange,
}

impl Display for NumericIssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::OutOfRange => write!(f, "value out of range"),
        }
    }
}

/// Details about one record the reader skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// The 1-based line number of the offending value.
    pub line: usize,
    /// The field the value was read for (`"speed"` or `"length"`).
    pub field: &'static str,
    /// The raw token that was rejected.
    pub token: String,
    /// Why the token was rejected.
    pub kind: NumericIssueKind,
}

impl Display for SkippedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {} for {}: '{}'",
            self.line, self.kind, self.field, self.token
        )
    }
}

/// The result of one loading pass: the event stream plus the records the
/// reader skipped with a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBatch<T>
where
    T: Float,
{
    events: Vec<CrossingEvent<T>>,
    skipped: Vec<SkippedRecord>,
}

impl<T> EventBatch<T>
where
    T: Float,
{
    /// Returns the parsed events in input order.
    #[inline]
    pub fn events(&self) -> &[CrossingEvent<T>] {
        &self.events
    }

    /// Consumes the batch, returning the parsed events.
    #[inline]
    pub fn into_events(self) -> Vec<CrossingEvent<T>> {
        self.events
    }

    /// Returns the records that were skipped with a diagnostic.
    #[inline]
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

/// The section a config line belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Section {
    None,
    Hikers,
    Bridge,
}

/// A configurable reader for crossing-session configs.
///
/// # Configuration
///
/// * `fail_on_skip`: If `true`, the first rejected numeric field aborts the
///   load with `EventReaderError::Numeric` instead of being recorded and
///   skipped.
///
/// # Examples
///
/// ```rust
/// # use cairn_model::loading::EventReader;
/// # use cairn_model::event::CrossingEvent;
///
/// let config = "
/// hikers:
///   - name: A
///     speed: 10
/// bridge:
///   - name: 1st
///     length: 100
/// ";
///
/// let batch = EventReader::new().from_str::<f64>(config).expect("load");
/// assert_eq!(batch.events().len(), 2);
/// assert!(batch.skipped().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventReader {
    fail_on_skip: bool,
}

impl EventReader {
    /// Creates a new `EventReader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether a rejected numeric field aborts the load.
    #[inline]
    pub fn fail_on_skip(mut self, yes: bool) -> Self {
        self.fail_on_skip = yes;
        self
    }

    /// Loads an event batch from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<EventBatch<T>, EventReaderError>
    where
        T: Float + FromStr + Display,
        R: BufRead,
    {
        let mut events = Vec::new();
        let mut skipped = Vec::new();

        let mut section = Section::None;
        let mut hiker_name = String::new();
        let mut bridge_name = String::new();

        for (line_number, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_number = line_number + 1;

            let tokens = tokenize(&line);
            if tokens.is_empty() {
                continue;
            }

            // Section headers reset the sibling record under construction.
            if tokens[0] == "hikers" {
                section = Section::Hikers;
                bridge_name.clear();
                continue;
            } else if tokens[0] == "bridge" {
                section = Section::Bridge;
                hiker_name.clear();
                continue;
            }

            if tokens.len() != 2 {
                continue;
            }

            match section {
                Section::Hikers => {
                    if tokens[0] == "name" {
                        hiker_name = tokens[1].clone();
                    } else if tokens[0] == "speed" {
                        match parse_positive::<T>(&tokens[1]) {
                            Ok(speed) => {
                                events.push(CrossingEvent::AddHiker(Hiker::new(
                                    hiker_name.clone(),
                                    speed,
                                )));
                            }
                            Err(kind) => {
                                let record = SkippedRecord {
                                    line: line_number,
                                    field: "speed",
                                    token: tokens[1].clone(),
                                    kind,
                                };
                                if self.fail_on_skip {
                                    return Err(EventReaderError::Numeric(record));
                                }
                                skipped.push(record);
                            }
                        }
                    }
                }
                Section::Bridge => {
                    if tokens[0] == "name" {
                        bridge_name = tokens[1].clone();
                    } else if tokens[0] == "length" {
                        match parse_positive::<T>(&tokens[1]) {
                            Ok(length) => {
                                events.push(CrossingEvent::CrossBridge(Bridge::new(
                                    bridge_name.clone(),
                                    length,
                                )));
                            }
                            Err(kind) => {
                                let record = SkippedRecord {
                                    line: line_number,
                                    field: "length",
                                    token: tokens[1].clone(),
                                    kind,
                                };
                                if self.fail_on_skip {
                                    return Err(EventReaderError::Numeric(record));
                                }
                                skipped.push(record);
                            }
                        }
                    }
                }
                Section::None => {}
            }
        }

        Ok(EventBatch { events, skipped })
    }

    /// Loads an event batch from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<EventBatch<T>, EventReaderError>
    where
        T: Float + FromStr + Display,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an event batch from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<EventBatch<T>, EventReaderError>
    where
        T: Float + FromStr + Display,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an event batch from a string slice.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str<T>(&self, s: &str) -> Result<EventBatch<T>, EventReaderError>
    where
        T: Float + FromStr + Display,
    {
        self.from_reader(s.as_bytes())
    }
}

/// Parses a token as a strictly positive, finite number.
fn parse_positive<T>(token: &str) -> Result<T, NumericIssueKind>
where
    T: Float + FromStr,
{
    let value: T = token
        .parse()
        .map_err(|_| NumericIssueKind::InvalidNumber)?;

    if value > T::zero() && value.is_finite() {
        Ok(value)
    } else {
        Err(NumericIssueKind::OutOfRange)
    }
}

/// Splits a config line into trimmed `key`/`value` tokens.
///
/// Comments starting at `#` are removed, the tokens are the `:`-separated
/// parts of the remainder, and a list-item dash before the first token is
/// dropped.
fn tokenize(line: &str) -> Vec<String> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    if line.trim().is_empty() {
        return Vec::new();
    }

    line.split(':')
        .enumerate()
        .map(|(i, raw)| {
            let raw = if i == 0 {
                match raw.find('-') {
                    Some(pos) => &raw[pos + 1..],
                    None => raw,
                }
            } else {
                raw
            };
            raw.trim().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CONFIG: &str = r#"
events: hiking              # Hiking event

hikers:                     # List of hikers in the group
  - name: A                 # Name of the hiker
    speed : 100             # speed in feet/min
  - name : B
    speed : 50

bridge :                    # Encountered bridge details
  - name: 1st
    length : 100            # length in feet
"#;

    #[test]
    fn test_loads_events_in_order() {
        let batch = EventReader::new()
            .from_str::<f64>(SMALL_CONFIG)
            .expect("Failed to load");

        assert!(batch.skipped().is_empty());
        assert_eq!(batch.events().len(), 3);

        match &batch.events()[0] {
            CrossingEvent::AddHiker(h) => {
                assert_eq!(h.name(), "A");
                assert_eq!(h.speed(), 100.0);
            }
            other => panic!("expected AddHiker, got {:?}", other),
        }
        match &batch.events()[1] {
            CrossingEvent::AddHiker(h) => {
                assert_eq!(h.name(), "B");
                assert_eq!(h.speed(), 50.0);
            }
            other => panic!("expected AddHiker, got {:?}", other),
        }
        match &batch.events()[2] {
            CrossingEvent::CrossBridge(b) => {
                assert_eq!(b.name(), "1st");
                assert_eq!(b.length(), 100.0);
            }
            other => panic!("expected CrossBridge, got {:?}", other),
        }
    }

    #[test]
    fn test_interleaved_sections() {
        // A bridge between two hiker groups: the second crossing sees a
        // larger roster.
        let config = "
hikers:
  - name: A
    speed: 10
bridge:
  - name: first
    length: 30
hikers:
  - name: B
    speed: 20
bridge:
  - name: second
    length: 60
";
        let batch = EventReader::new().from_str::<f64>(config).expect("load");
        assert_eq!(batch.events().len(), 4);
        assert!(matches!(batch.events()[1], CrossingEvent::CrossBridge(_)));
        assert!(matches!(batch.events()[2], CrossingEvent::AddHiker(_)));
    }

    #[test]
    fn test_skips_invalid_number_with_diagnostic() {
        let config = "
hikers:
  - name: A
    speed: fast
  - name: B
    speed: 50
";
        let batch = EventReader::new().from_str::<f64>(config).expect("load");

        // The malformed record is skipped; the next one still parses.
        assert_eq!(batch.events().len(), 1);
        assert_eq!(batch.skipped().len(), 1);

        let record = &batch.skipped()[0];
        assert_eq!(record.line, 4);
        assert_eq!(record.field, "speed");
        assert_eq!(record.token, "fast");
        assert_eq!(record.kind, NumericIssueKind::InvalidNumber);
    }

    #[test]
    fn test_skips_non_positive_values() {
        let config = "
bridge:
  - name: broken
    length: -3
  - name: ok
    length: 10
";
        let batch = EventReader::new().from_str::<f64>(config).expect("load");
        assert_eq!(batch.events().len(), 1);
        assert_eq!(batch.skipped().len(), 1);
        assert_eq!(batch.skipped()[0].kind, NumericIssueKind::OutOfRange);
    }

    #[test]
    fn test_fail_on_skip_aborts() {
        let config = "
hikers:
  - name: A
    speed: fast
";
        let res = EventReader::new().fail_on_skip(true).from_str::<f64>(config);

        match res {
            Err(EventReaderError::Numeric(record)) => {
                assert_eq!(record.field, "speed");
                assert_eq!(record.kind, NumericIssueKind::InvalidNumber);
            }
            _ => panic!("expected Numeric error"),
        }
    }

    #[test]
    fn test_unknown_keys_and_sections_are_ignored() {
        let config = "
events: hiking
weather: sunny
hikers:
  - name: A
    mood: great
    speed: 10
";
        let batch = EventReader::new().from_str::<f64>(config).expect("load");
        assert_eq!(batch.events().len(), 1);
        assert!(batch.skipped().is_empty());
    }

    #[test]
    fn test_tokenize_handles_comments_and_dashes() {
        assert_eq!(tokenize("  - name: A   # the name"), vec!["name", "A"]);
        assert_eq!(tokenize("# full comment"), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
        assert_eq!(tokenize("speed : 100"), vec!["speed", "100"]);
    }
}
