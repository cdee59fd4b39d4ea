//! Styled text as an ordered sequence of runs.
//!
//! A run is either a span of characters in one colour or a line break.
//! Values are plain data: building and slicing them never touches the
//! terminal, so renders are repeatable.

use std::fmt;

use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};

/// One run of a [`StyledText`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Text { content: String, colour: Color },
    LineBreak,
}

/// Coloured text made of ordered runs.
///
/// Text runs never contain line terminators; breaks are always explicit
/// `LineBreak` runs. Empty-content runs are legal and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    runs: Vec<Run>,
}

impl StyledText {
    /// An empty value with no runs at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a raw string in the ambient colour ([`Color::Reset`]).
    pub fn plain(text: impl AsRef<str>) -> Self {
        Self::coloured(text, Color::Reset)
    }

    /// Build from a raw string in one colour.
    ///
    /// Carriage returns are stripped, then each `'\n'` becomes a break
    /// between text runs. A plain `""` still yields one empty text run.
    pub fn coloured(text: impl AsRef<str>, colour: Color) -> Self {
        let cleaned = text.as_ref().replace('\r', "");
        let mut runs = Vec::new();
        for segment in cleaned.split('\n') {
            runs.push(Run::Text {
                content: segment.to_string(),
                colour,
            });
            runs.push(Run::LineBreak);
        }
        // split always yields at least one segment
        runs.pop();
        Self { runs }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// No runs at all. An empty-content text run still counts as content.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Append raw text in one colour, splitting on line terminators as
    /// construction does.
    pub fn push_str(&mut self, text: impl AsRef<str>, colour: Color) {
        self.append(Self::coloured(text, colour));
    }

    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Append another value's runs in order.
    pub fn append(&mut self, other: StyledText) {
        self.runs.extend(other.runs);
    }

    /// Append a line break, then another value's runs.
    pub fn push_line(&mut self, other: StyledText) {
        self.runs.push(Run::LineBreak);
        self.append(other);
    }

    /// Append `count` line breaks.
    pub fn push_breaks(&mut self, count: usize) {
        for _ in 0..count {
            self.runs.push(Run::LineBreak);
        }
    }

    /// Character count across text runs, excluding line breaks.
    pub fn len(&self) -> usize {
        self.runs
            .iter()
            .map(|run| match run {
                Run::Text { content, .. } => content.chars().count(),
                Run::LineBreak => 0,
            })
            .sum()
    }

    /// Display-cell width of the widest line.
    pub fn width(&self) -> usize {
        let mut widest = 0;
        let mut current = 0;
        for run in &self.runs {
            match run {
                Run::Text { content, .. } => {
                    current += content.width();
                }
                Run::LineBreak => {
                    widest = widest.max(current);
                    current = 0;
                }
            }
        }
        widest.max(current)
    }

    /// Recolour every text run, leaving breaks alone.
    pub fn set_colour(&mut self, colour: Color) {
        for run in &mut self.runs {
            if let Run::Text { colour: c, .. } = run {
                *c = colour;
            }
        }
    }

    /// Remove leading line breaks, and trailing ones too unless
    /// `leading_only`. Idempotent.
    pub fn trim_breaks(&mut self, leading_only: bool) {
        let keep_from = self
            .runs
            .iter()
            .position(|run| !matches!(run, Run::LineBreak))
            .unwrap_or(self.runs.len());
        self.runs.drain(..keep_from);
        if !leading_only {
            let keep_to = self
                .runs
                .iter()
                .rposition(|run| !matches!(run, Run::LineBreak))
                .map_or(0, |i| i + 1);
            self.runs.truncate(keep_to);
        }
    }

    /// Suffix from an absolute character offset, where each line break
    /// occupies one offset position.
    ///
    /// An offset landing on a break keeps the break; one landing inside a
    /// text run slices that run (char-aware) and carries the rest whole.
    pub fn substring(&self, offset: usize) -> Result<StyledText> {
        let mut seen = 0usize;
        for (i, run) in self.runs.iter().enumerate() {
            match run {
                Run::Text { content, colour } => {
                    let count = content.chars().count();
                    seen += count;
                    if seen >= offset {
                        let keep = seen - offset;
                        let content: String = content.chars().skip(count - keep).collect();
                        let mut runs = vec![Run::Text {
                            content,
                            colour: *colour,
                        }];
                        runs.extend(self.runs[i + 1..].iter().cloned());
                        return Ok(StyledText { runs });
                    }
                }
                Run::LineBreak => {
                    seen += 1;
                    if seen >= offset {
                        return Ok(StyledText {
                            runs: self.runs[i..].to_vec(),
                        });
                    }
                }
            }
        }
        Err(Error::OffsetOutOfRange { offset, len: seen })
    }

    /// Iterate over the lines of this value as owned segments.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            runs: &self.runs,
            pos: 0,
        }
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl fmt::Display for StyledText {
    /// Plain text: colours discarded, breaks rendered as `'\n'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            match run {
                Run::Text { content, .. } => f.write_str(content)?,
                Run::LineBreak => f.write_str("\n")?,
            }
        }
        Ok(())
    }
}

/// Iterator returned by [`StyledText::lines`].
///
/// Every break ends a line, even an empty one; a trailing run group with
/// no final break is still a line. Nothing is yielded after a final break.
pub struct Lines<'a> {
    runs: &'a [Run],
    pos: usize,
}

impl Iterator for Lines<'_> {
    type Item = StyledText;

    fn next(&mut self) -> Option<StyledText> {
        if self.pos >= self.runs.len() {
            return None;
        }
        let mut line = StyledText::new();
        while self.pos < self.runs.len() {
            match &self.runs[self.pos] {
                Run::LineBreak => {
                    self.pos += 1;
                    return Some(line);
                }
                run => {
                    line.runs.push(run.clone());
                    self.pos += 1;
                }
            }
        }
        if line.runs.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}
