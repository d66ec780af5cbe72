//! Horizontal separator rules.

use crate::charset::Charset;
use crate::draw::Block;

/// Draws a horizontal rule of `width` characters.
///
/// A zero width yields a single empty line, so a rule on an empty canvas
/// still occupies a row.
pub fn rule(width: usize, charset: Charset) -> Block {
    let line = charset.glyphs().horizontal.to_string().repeat(width);
    Block::from_lines(vec![line])
}
