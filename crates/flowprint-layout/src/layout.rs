//! Layout tree for printed JavaScript
//!
//! This module defines the tree-structured IR the generator produces instead
//! of strings. The downstream printer walks the tree and renders either a
//! pretty (multi-line, indented) or ugly (compact) form.
//!
//! # Architecture
//!
//! The generator decides what is fusible, what may break, what is
//! conditional on break or pretty mode, and where indentation units apply.
//! It never decides physical line width; that is the printer's call when it
//! resolves `BreakMode::IfNeeded` sequences.
//!
//! Once constructed the tree is immutable; each program produces one tree
//! and the printer consumes it once.

use flowprint_common::Loc;
use serde::Serialize;

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Layout {
    /// A literal token.
    Atom(String),
    /// An atom carrying the source location of the identifier it prints,
    /// for source map emission.
    Identifier(Loc, String),
    /// Attach a source location to a subtree.
    SourceLocation(Loc, Box<Layout>),
    /// No output.
    Empty,
    /// Children concatenated with no break opportunity between them.
    Fuse(Vec<Layout>),
    /// Children separated per the break policy in the config.
    Sequence(SequenceConfig, Vec<Layout>),
    /// First subtree in pretty mode, second in ugly mode.
    IfPretty(Box<Layout>, Box<Layout>),
    /// First subtree if the nearest enclosing sequence broke, second if not.
    IfBreak(Box<Layout>, Box<Layout>),
}

/// When a sequence separates its children with line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakMode {
    Always,
    IfPretty,
    IfNeeded,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceConfig {
    pub break_mode: BreakMode,
    /// `(leading, trailing)`: when `leading` is false a broken sequence
    /// opens with a line break before its first child; when `trailing` is
    /// false it closes with a line break (at the enclosing indentation)
    /// after its last child.
    pub inline: (bool, bool),
    /// Indentation units applied to children when broken.
    pub indent: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            break_mode: BreakMode::IfNeeded,
            inline: (false, false),
            indent: 2,
        }
    }
}

impl SequenceConfig {
    pub fn with_break(break_mode: BreakMode) -> Self {
        SequenceConfig {
            break_mode,
            ..Default::default()
        }
    }

    pub fn inline(mut self, leading: bool, trailing: bool) -> Self {
        self.inline = (leading, trailing);
        self
    }

    pub fn indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }
}

// =============================================================================
// Builders
// =============================================================================

pub fn atom(s: impl Into<String>) -> Layout {
    Layout::Atom(s.into())
}

pub fn identifier(loc: Loc, name: impl Into<String>) -> Layout {
    Layout::Identifier(loc, name.into())
}

pub fn source_location(loc: Loc, layout: Layout) -> Layout {
    Layout::SourceLocation(loc, Box::new(layout))
}

pub fn fuse(items: Vec<Layout>) -> Layout {
    Layout::Fuse(items)
}

pub fn sequence(config: SequenceConfig, items: Vec<Layout>) -> Layout {
    Layout::Sequence(config, items)
}

pub fn if_pretty(pretty: Layout, ugly: Layout) -> Layout {
    Layout::IfPretty(Box::new(pretty), Box::new(ugly))
}

pub fn if_break(broken: Layout, flat: Layout) -> Layout {
    Layout::IfBreak(Box::new(broken), Box::new(flat))
}

/// A space in both modes.
pub fn space() -> Layout {
    atom(" ")
}

/// A space in pretty mode only.
pub fn pretty_space() -> Layout {
    if_pretty(space(), Layout::Empty)
}

/// A line break in pretty mode, nothing in ugly mode.
pub fn pretty_hardline() -> Layout {
    sequence(
        SequenceConfig::with_break(BreakMode::IfPretty)
            .inline(false, true)
            .indent(0),
        vec![Layout::Empty],
    )
}

/// An unconditional line break.
pub fn hardline() -> Layout {
    sequence(
        SequenceConfig::with_break(BreakMode::Always)
            .inline(false, true)
            .indent(0),
        vec![Layout::Empty],
    )
}

impl Layout {
    /// True when the node renders no text in any mode. Used to skip nodes
    /// when computing blank-line gaps.
    pub fn is_empty(&self) -> bool {
        match self {
            Layout::Empty => true,
            Layout::Atom(s) => s.is_empty(),
            Layout::Identifier(_, name) => name.is_empty(),
            Layout::SourceLocation(_, inner) => inner.is_empty(),
            Layout::Fuse(items) | Layout::Sequence(_, items) => {
                items.iter().all(Layout::is_empty)
            }
            Layout::IfPretty(a, b) | Layout::IfBreak(a, b) => a.is_empty() && b.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Layout::Empty.is_empty());
        assert!(atom("").is_empty());
        assert!(fuse(vec![Layout::Empty, atom("")]).is_empty());
        assert!(!pretty_space().is_empty());
        assert!(!atom(";").is_empty());
        assert!(!fuse(vec![Layout::Empty, atom("x")]).is_empty());
    }

    #[test]
    fn test_sequence_config_builder() {
        let cfg = SequenceConfig::with_break(BreakMode::IfPretty)
            .inline(true, false)
            .indent(0);
        assert_eq!(cfg.break_mode, BreakMode::IfPretty);
        assert_eq!(cfg.inline, (true, false));
        assert_eq!(cfg.indent, 0);
    }

    #[test]
    fn test_serializes() {
        let layout = fuse(vec![atom("return"), space(), if_pretty(atom(";"), Layout::Empty)]);
        let json = serde_json::to_string(&layout).expect("layout serializes");
        assert!(json.contains("return"));
    }
}
