//! Character sets used when rendering diagram elements.
//!
//! A [`Charset`] selects the glyph table for borders, rules, and arrow
//! connectors. The default [`Charset::Unicode`] set uses box-drawing
//! characters; [`Charset::Ascii`] restricts output to 7-bit ASCII.

use std::str::FromStr;

/// Glyph table for one character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Top-left frame corner.
    pub top_left: char,
    /// Top-right frame corner.
    pub top_right: char,
    /// Bottom-left frame corner.
    pub bottom_left: char,
    /// Bottom-right frame corner.
    pub bottom_right: char,
    /// Horizontal border, rule, and arrow shaft glyph.
    pub horizontal: char,
    /// Vertical border glyph.
    pub vertical: char,
    /// Left-pointing arrow head.
    pub head_left: char,
    /// Right-pointing arrow head.
    pub head_right: char,
}

const UNICODE: Glyphs = Glyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    head_left: '◀',
    head_right: '▶',
};

const ASCII: Glyphs = Glyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    head_left: '<',
    head_right: '>',
};

/// Character set selection for diagram rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Unicode,
    Ascii,
}

impl Default for Charset {
    fn default() -> Self {
        Self::Unicode
    }
}

impl FromStr for Charset {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            _ => Err("Invalid charset"),
        }
    }
}

impl Charset {
    /// Returns the glyph table for this character set.
    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            Self::Unicode => &UNICODE,
            Self::Ascii => &ASCII,
        }
    }
}
