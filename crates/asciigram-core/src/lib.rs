//! Asciigram Core Types and Definitions
//!
//! This crate provides the foundational types for composing text diagrams.
//! It includes:
//!
//! - **Charsets**: Glyph tables for borders and connectors ([`charset::Charset`])
//! - **Draw**: Text-drawing primitives for diagram elements ([`draw`] module)

pub mod charset;
pub mod draw;
