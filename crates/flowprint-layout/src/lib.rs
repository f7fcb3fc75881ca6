//! Layout generation for JavaScript/Flow source printing.
//!
//! This crate provides:
//! - The layout tree IR the downstream printer consumes
//! - Recursive emitters from AST to layout for expressions, statements,
//!   patterns, Flow types, and JSX
//! - Lexical utilities: quote selection, string escaping, shortest-number
//!   formatting
//!
//! The entry point is [`generator::program`]. Generation is purely
//! functional: each call builds a fresh tree from an immutable AST, and
//! independent calls may run in parallel without coordination.

pub mod error;
pub mod generator;
pub mod layout;
pub mod literals;
pub mod precedence;

pub use error::{LayoutError, Result};
pub use generator::program;
pub use layout::{BreakMode, Layout, SequenceConfig};
