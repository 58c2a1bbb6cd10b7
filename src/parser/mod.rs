//! Line-oriented transcript parsing.
//!
//! Each input line is tokenized independently into a tagged outcome, so
//! dropped lines stay auditable instead of vanishing inside a regex.

use crate::models::Message;

/// Why a line produced no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Line was empty after trimming.
    Blank,
    /// No colon separating author from content.
    MissingSeparator,
    /// Nothing before the first colon.
    MissingAuthor,
    /// Nothing after the first colon.
    EmptyContent,
}

/// Outcome of tokenizing a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(Message),
    Skipped(SkipReason),
}

/// A line that produced no message, with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Parsed transcript: messages in input order plus every skipped line.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub messages: Vec<Message>,
    pub skipped: Vec<SkippedLine>,
}

impl Transcript {
    /// Skipped lines with the given reason.
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}

/// Parse raw transcript text into ordered messages.
///
/// Messages keep input line order; no time-based sorting happens here.
/// Parsing never fails on malformed content, it degrades by omission.
pub fn parse_transcript(text: &str) -> Transcript {
    let mut messages = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in text.lines().enumerate() {
        match tokenize_line(line) {
            LineOutcome::Parsed(message) => messages.push(message),
            LineOutcome::Skipped(reason) => skipped.push(SkippedLine {
                line_number: index + 1,
                reason,
            }),
        }
    }

    Transcript { messages, skipped }
}

/// Tokenize one line of the form `[HH:MM:SS] Author: message text`.
///
/// The bracketed timestamp is optional. The author field runs up to the
/// first colon after the timestamp; author and content are trimmed.
pub fn tokenize_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }

    let (timestamp, rest) = split_timestamp(trimmed);

    let Some(colon) = rest.find(':') else {
        return LineOutcome::Skipped(SkipReason::MissingSeparator);
    };

    let author = rest[..colon].trim();
    if author.is_empty() {
        return LineOutcome::Skipped(SkipReason::MissingAuthor);
    }

    let content = rest[colon + 1..].trim();
    if content.is_empty() {
        return LineOutcome::Skipped(SkipReason::EmptyContent);
    }

    LineOutcome::Parsed(Message::new(
        timestamp.map(str::to_owned),
        author.to_owned(),
        content.to_owned(),
    ))
}

/// Split a leading timestamp of the exact shape `[dd:dd:dd]` off the line.
///
/// Only the shape is checked here; whether the digits form a valid
/// wall-clock time is decided when the message derives its time of day.
fn split_timestamp(line: &str) -> (Option<&str>, &str) {
    let bytes = line.as_bytes();
    let is_timestamp = bytes.len() >= 10
        && bytes[0] == b'['
        && bytes[3] == b':'
        && bytes[6] == b':'
        && bytes[9] == b']'
        && [1, 2, 4, 5, 7, 8]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());

    if is_timestamp {
        (Some(&line[..10]), line[10..].trim_start())
    } else {
        (None, line)
    }
}
