//! Layout generation errors.
//!
//! All failures are fatal: the generator does not recover or retry, and
//! errors unwind to the `program` entry point carrying enough location
//! information to report.

use flowprint_common::Loc;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayoutError {
    /// A production the printer does not support (comprehensions, generator
    /// expressions).
    UnsupportedProduction { loc: Loc, name: &'static str },
    /// An internally inconsistent input tree, e.g. a private name used as a
    /// plain object key, or a `declare function` whose annotation is not a
    /// function type.
    InvalidAst { message: String },
}

impl LayoutError {
    pub fn unsupported(loc: &Loc, name: &'static str) -> Self {
        LayoutError::UnsupportedProduction {
            loc: loc.clone(),
            name,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        LayoutError::InvalidAst {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnsupportedProduction { loc, name } => {
                write!(f, "{name} not supported at {loc}")
            }
            LayoutError::InvalidAst { message } => write!(f, "invalid AST: {message}"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use flowprint_common::{Loc, Position};

    #[test]
    fn test_display_unsupported() {
        let loc = Loc::new(
            Some("m.js".to_string()),
            Position::new(3, 4, 40),
            Position::new(3, 20, 56),
        );
        let err = LayoutError::unsupported(&loc, "comprehension");
        assert_eq!(err.to_string(), "comprehension not supported at m.js:3:4");
    }

    #[test]
    fn test_display_invalid() {
        let err = LayoutError::invalid("declare function with missing annotation");
        assert_eq!(
            err.to_string(),
            "invalid AST: declare function with missing annotation"
        );
    }
}
