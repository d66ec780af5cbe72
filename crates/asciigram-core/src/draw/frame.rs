//! Rectangular frames around text.

use log::trace;

use crate::charset::Charset;
use crate::draw::Block;

/// Draws a rectangular frame around `label`.
///
/// Line breaks in the label are preserved inside the frame, and one space
/// of horizontal padding separates the text from the borders. An empty
/// label produces an empty frame.
pub fn frame(label: &str, charset: Charset) -> Block {
    let glyphs = charset.glyphs();
    let inner = Block::from_text(label);
    trace!(width = inner.width(), height = inner.height(); "Framing block");

    let border: String = glyphs
        .horizontal
        .to_string()
        .repeat(inner.width() + 2);

    let mut lines = Vec::with_capacity(inner.height() + 2);
    lines.push(format!("{}{border}{}", glyphs.top_left, glyphs.top_right));
    for line in inner.lines() {
        lines.push(format!("{} {line} {}", glyphs.vertical, glyphs.vertical));
    }
    lines.push(format!(
        "{}{border}{}",
        glyphs.bottom_left, glyphs.bottom_right
    ));

    Block::from_lines(lines)
}
