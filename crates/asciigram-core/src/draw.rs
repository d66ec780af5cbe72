//! Text-drawing primitives for diagram elements.
//!
//! Every diagram element reduces to a [`Block`], a rectangular region of
//! text. Frames, rules, and arrow connectors are built here; composing
//! blocks into a finished diagram is the responsibility of the caller.

mod arrow;
mod block;
mod frame;
mod rule;

pub use arrow::{ArrowLabel, ArrowLabelError, Direction, render_stacked};
pub use block::Block;
pub use frame::frame;
pub use rule::rule;
