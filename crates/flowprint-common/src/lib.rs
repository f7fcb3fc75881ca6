//! Shared source-location types for the flowprint crates.
//!
//! This crate provides:
//! - Line/column/offset positions
//! - Source locations attached to AST nodes and layout nodes

pub mod loc;

pub use loc::{Loc, Position};
