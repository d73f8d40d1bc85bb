//! Text rendering module
//!
//! Rasterizes snapshots into a character grid for terminals and logs.

pub mod text;

pub use text::TextRenderer;
