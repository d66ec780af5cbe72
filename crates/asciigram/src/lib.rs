//! Asciigram - a fluent builder for ASCII topology diagrams.
//!
//! A [`Diagram`] accumulates drawing primitives (boxes, separator lines,
//! arrows, containers) and renders them to a single multi-line text block
//! on demand. Rendering is pure: [`Diagram::draw`] takes `&self`, has no
//! side effects, and returns identical output every time it is called.
//!
//! Diagrams nest through their rendered text: draw the inner diagram
//! first, then pass the resulting string as label or container content of
//! the outer one (render-then-embed).

mod error;

pub use asciigram_core::{charset, charset::Charset, draw};

pub use error::AsciigramError;

use log::{debug, trace};

use asciigram_core::draw::{ArrowLabel, Block, frame, render_stacked, rule};

/// One drawable element of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Box { label: String },
    Line,
    Arrow { labels: Vec<String>, size: usize },
    Container { content: String },
}

/// Style options for arrow elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowOptions {
    size: usize,
}

impl ArrowOptions {
    /// Creates arrow options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates arrow options with the given connector size.
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    /// Gets the connector shaft length in glyphs.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the connector shaft length in glyphs.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self { size: 3 }
    }
}

/// Builder for composing and rendering text diagrams.
///
/// Each chained call appends one element; [`Diagram::draw`] renders the
/// accumulated sequence. Box, arrow, and container elements are laid out
/// left to right with vertical centering; a line element appends a
/// horizontal separator beneath everything drawn so far.
///
/// # Examples
///
/// ```rust
/// use asciigram::{ArrowOptions, Diagram};
///
/// let diagram = Diagram::new()
///     .boxed("app")
///     .arrow(["-->:calls"], ArrowOptions::with_size(5))
///     .boxed("db");
///
/// let rendered = diagram.draw().expect("well-formed arrow labels");
/// println!("{rendered}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    elements: Vec<Element>,
    charset: Charset,
}

impl Diagram {
    /// Creates an empty diagram with the default character set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty diagram rendered with the given character set.
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            elements: Vec::new(),
            charset,
        }
    }

    /// Returns the character set this diagram renders with.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Appends a rectangular frame drawn around `label`.
    ///
    /// Line breaks in the label are preserved inside the frame; an empty
    /// label produces an empty frame. (Named `boxed` because `box` is a
    /// Rust keyword.)
    pub fn boxed(mut self, label: impl Into<String>) -> Self {
        self.elements.push(Element::Box {
            label: label.into(),
        });
        self
    }

    /// Appends a horizontal separator beneath the current content.
    pub fn line(mut self) -> Self {
        self.elements.push(Element::Line);
        self
    }

    /// Appends one or more directional connectors.
    ///
    /// Each label uses the `<marker>:<text>` mini-syntax, e.g.
    /// `"-->:Manage"` or `"<->: Run against"`. Multiple labels render as
    /// parallel stacked connectors. Labels are validated when the diagram
    /// is drawn, not here, so the fluent chain stays infallible.
    pub fn arrow<I, S>(mut self, labels: I, options: ArrowOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.push(Element::Arrow {
            labels: labels.into_iter().map(Into::into).collect(),
            size: options.size(),
        });
        self
    }

    /// Appends already-rendered text as an opaque nested block.
    ///
    /// The content's internal layout is preserved verbatim; this is how
    /// one diagram's rendered output nests inside another.
    pub fn container(mut self, content: impl Into<String>) -> Self {
        self.elements.push(Element::Container {
            content: content.into(),
        });
        self
    }

    /// Renders the accumulated elements to a multi-line string.
    ///
    /// Rendering does not mutate the diagram and may be called multiple
    /// times with identical results.
    ///
    /// # Errors
    ///
    /// Returns [`AsciigramError::MalformedArrowLabel`] if any arrow label
    /// is missing its `:` separator or uses an unrecognized marker.
    pub fn draw(&self) -> Result<String, AsciigramError> {
        debug!(element_count = self.elements.len(); "Rendering diagram");

        let mut canvas = Block::empty();
        for element in &self.elements {
            match element {
                Element::Box { label } => {
                    canvas = canvas.hjoin(&frame(label, self.charset), 1);
                }
                Element::Line => {
                    canvas = canvas.vappend(&rule(canvas.width(), self.charset));
                }
                Element::Arrow { labels, size } => {
                    let parsed = labels
                        .iter()
                        .map(|raw| ArrowLabel::parse(raw))
                        .collect::<Result<Vec<_>, _>>()?;
                    canvas = canvas.hjoin(&render_stacked(&parsed, *size, self.charset), 1);
                }
                Element::Container { content } => {
                    canvas = canvas.hjoin(&Block::from_text(content), 1);
                }
            }
        }

        trace!(width = canvas.width(), height = canvas.height(); "Diagram rendered");
        Ok(canvas.into_text())
    }
}
