//! Arrow connectors and their label mini-syntax.
//!
//! An arrow label is written as `<marker>:<text>`, where the marker
//! encodes the connector direction (`->`, `<-`, `<->`, or a plain `--`)
//! and the text is rendered centered above the connector. Text after the
//! first `:` is kept verbatim; callers rely on leading spaces to nudge a
//! label sideways.

use std::str::FromStr;

use thiserror::Error;

use crate::charset::Charset;
use crate::draw::Block;
use crate::draw::block::{center, char_width};

/// Direction encoded by an arrow marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Both,
    Plain,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty arrow marker");
        }

        let left = s.starts_with('<');
        let right = s.ends_with('>');
        let shaft = s.trim_start_matches('<').trim_end_matches('>');
        if !shaft.chars().all(|c| c == '-') {
            return Err("invalid arrow marker");
        }

        Ok(match (left, right) {
            (true, true) => Self::Both,
            (false, true) => Self::Right,
            (true, false) => Self::Left,
            (false, false) => Self::Plain,
        })
    }
}

/// Error raised when an arrow label does not match the mini-syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "malformed arrow label `{label}`: expected `<marker>:<text>` with a `->`, `<-`, `<->`, or `--` marker"
)]
pub struct ArrowLabelError {
    label: String,
}

impl ArrowLabelError {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the offending label text.
    pub fn label(&self) -> &String {
        &self.label
    }
}

/// A parsed arrow label: direction marker plus annotation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowLabel {
    direction: Direction,
    text: String,
}

impl ArrowLabel {
    /// Parses a raw label in `<marker>:<text>` form.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowLabelError`] if the `:` separator is missing or the
    /// marker is not a recognized direction.
    pub fn parse(raw: &str) -> Result<Self, ArrowLabelError> {
        let Some((marker, text)) = raw.split_once(':') else {
            return Err(ArrowLabelError::new(raw));
        };

        let direction = marker
            .trim()
            .parse()
            .map_err(|_| ArrowLabelError::new(raw))?;

        Ok(Self {
            direction,
            text: text.to_string(),
        })
    }

    /// Returns the connector direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the annotation text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders this label as text centered above a connector.
    ///
    /// The connector shaft is exactly `size` horizontal glyphs; head
    /// glyphs are added per direction. The shaft length never depends on
    /// the label text.
    pub fn render(&self, size: usize, charset: Charset) -> Block {
        let glyphs = charset.glyphs();
        let shaft: String = glyphs.horizontal.to_string().repeat(size);
        let connector = match self.direction {
            Direction::Both => format!("{}{shaft}{}", glyphs.head_left, glyphs.head_right),
            Direction::Right => format!("{shaft}{}", glyphs.head_right),
            Direction::Left => format!("{}{shaft}", glyphs.head_left),
            Direction::Plain => shaft,
        };

        let width = char_width(&self.text).max(char_width(&connector));
        Block::from_lines(vec![center(&self.text, width), center(&connector, width)])
    }
}

/// Renders a set of labels as parallel stacked connectors.
///
/// Connectors are separated by one blank line and centered against each
/// other horizontally.
pub fn render_stacked(labels: &[ArrowLabel], size: usize, charset: Charset) -> Block {
    let mut stacked = Block::empty();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            stacked = stacked.vappend(&Block::from_lines(vec![String::new()]));
        }
        stacked = stacked.vappend(&label.render(size, charset));
    }
    stacked
}
