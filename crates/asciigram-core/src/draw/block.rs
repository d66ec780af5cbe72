//! Rectangular text regions and their composition.

/// A rectangular region of text.
///
/// Lines are padded with spaces to a uniform width so that a block can be
/// treated as an opaque text rectangle during composition. All width
/// arithmetic counts characters, not bytes, so box-drawing glyphs are
/// handled correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// Creates an empty block with no lines.
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            width: 0,
        }
    }

    /// Creates a block from raw text, splitting on `\n`.
    ///
    /// Empty lines are preserved; every line is padded to the width of
    /// the longest one.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n').map(str::to_string).collect())
    }

    /// Creates a block from individual lines, padding to uniform width.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| char_width(l)).max().unwrap_or(0);
        let lines = lines
            .into_iter()
            .map(|line| pad_right(&line, width))
            .collect();
        Self { lines, width }
    }

    /// Returns the width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Returns the padded lines of this block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if the block contains no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the block to a single multi-line string.
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }

    /// Joins another block to the right of this one.
    ///
    /// The shorter block is centered vertically against the taller one,
    /// with any odd row going below. `gap` spaces separate the columns.
    /// Joining onto an empty block yields the other block unchanged.
    pub fn hjoin(&self, other: &Block, gap: usize) -> Block {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let height = self.height().max(other.height());
        let left = self.centered_rows(height);
        let right = other.centered_rows(height);
        let spacer = " ".repeat(gap);

        let lines = left
            .into_iter()
            .zip(right)
            .map(|(l, r)| format!("{l}{spacer}{r}"))
            .collect();
        Block::from_lines(lines)
    }

    /// Appends another block below this one, padding to the wider width.
    pub fn vappend(&self, other: &Block) -> Block {
        let mut lines = self.lines.clone();
        lines.extend(other.lines.iter().cloned());
        Block::from_lines(lines)
    }

    /// Pads this block to `height` rows, centering the content vertically.
    fn centered_rows(&self, height: usize) -> Vec<String> {
        debug_assert!(height >= self.height());
        let top = (height - self.height()) / 2;
        let blank = " ".repeat(self.width);

        let mut rows = vec![blank.clone(); top];
        rows.extend(self.lines.iter().cloned());
        rows.resize(height, blank);
        rows
    }
}

/// Width of a string in characters.
pub(crate) fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Pads a string with trailing spaces to `width` characters.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let len = char_width(s);
    if len >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - len))
}

/// Centers a string within `width` characters, extra space on the right.
pub(crate) fn center(s: &str, width: usize) -> String {
    let len = char_width(s);
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    pad_right(&format!("{}{s}", " ".repeat(left)), width)
}
