//! Layout generation: AST to layout tree.
//!
//! Emission is a strictly top-down recursion. The program driver walks the
//! statement list; statements recurse into expressions, patterns, types, and
//! JSX; every emitter returns a layout subtree whose outermost wrapper
//! carries the node's source location. There is no shared mutable state and
//! no back-edge; ambiguity contexts are threaded as explicit parameters.

mod declarations;
mod expressions;
mod jsx;
mod statements;
mod types;

pub(crate) use declarations::{emit_class, emit_function, emit_pattern, emit_variable_declaration};
pub(crate) use expressions::{
    emit_expression, emit_expression_with_parens, emit_literal, emit_object_key,
};
pub(crate) use statements::{emit_block, emit_statement};
pub(crate) use types::{emit_type, emit_type_annotation};

use flowprint_ast::{Comment, CommentKind, Program, partition_directives};
use flowprint_common::{Loc, Position};

use crate::error::Result;
use crate::layout::{
    BreakMode, Layout, SequenceConfig, atom, fuse, hardline, if_break, if_pretty, pretty_space,
    sequence, source_location,
};

/// Build the layout tree for a whole program.
///
/// When `preserve_docblock` is set and the program has comments, the leading
/// directives are merged with the comments that precede the first
/// non-directive statement, ordered by source position, and emitted as one
/// block ahead of the rest of the program. When `checksum` is set, a final
/// `/* checksum */` line is appended.
pub fn program(
    preserve_docblock: bool,
    checksum: Option<&str>,
    ast: &Program,
) -> Result<Layout> {
    tracing::debug!(
        statements = ast.body.len(),
        comments = ast.comments.len(),
        preserve_docblock,
        "generating program layout"
    );

    let loc = Loc {
        source: ast.loc.source.clone(),
        start: Position::new(1, 0, 0),
        end: ast.loc.end,
    };

    let children = if preserve_docblock && !ast.comments.is_empty() {
        let (directives, rest) = partition_directives(&ast.body);
        let cutoff = rest
            .first()
            .map(|stmt| stmt.loc.start.offset)
            .unwrap_or(u32::MAX);

        let mut merged: Vec<(Loc, Layout)> = Vec::new();
        for stmt in directives {
            merged.push((stmt.loc.clone(), emit_statement(stmt, false)?));
        }
        for comment in &ast.comments {
            if comment.loc.start.offset < cutoff {
                merged.push((comment.loc.clone(), emit_comment(comment)));
            }
        }
        merged.sort_by_key(|(loc, _)| loc.start.offset);

        for (i, stmt) in rest.iter().enumerate() {
            let pretty_semicolon = i + 1 == rest.len();
            merged.push((stmt.loc.clone(), emit_statement(stmt, pretty_semicolon)?));
        }
        list_with_newlines(merged)
    } else {
        let mut items = Vec::with_capacity(ast.body.len());
        for (i, stmt) in ast.body.iter().enumerate() {
            let pretty_semicolon = i + 1 == ast.body.len();
            items.push((stmt.loc.clone(), emit_statement(stmt, pretty_semicolon)?));
        }
        list_with_newlines(items)
    };

    tracing::trace!(children = children.len(), "assembled top-level layout");
    let mut layout = sequence(
        SequenceConfig::with_break(BreakMode::IfPretty)
            .inline(true, true)
            .indent(0),
        children,
    );
    if let Some(checksum) = checksum {
        layout = fuse(vec![layout, hardline(), atom(format!("/* {checksum} */"))]);
    }
    Ok(source_location(loc, layout))
}

fn emit_comment(comment: &Comment) -> Layout {
    match comment.kind {
        CommentKind::Block => atom(format!("/*{}*/", comment.text)),
        CommentKind::Line => atom(format!("//{}", comment.text)),
    }
}

// =============================================================================
// List and terminator helpers
// =============================================================================

/// Lay out located items, inserting a blank separator line wherever the
/// source locations of two consecutive non-empty items are more than one
/// line apart. Empty items are skipped when computing the gap.
pub(crate) fn list_with_newlines(items: Vec<(Loc, Layout)>) -> Vec<Layout> {
    let mut children = Vec::with_capacity(items.len());
    let mut prev: Option<Loc> = None;
    for (loc, layout) in items {
        if layout.is_empty() {
            continue;
        }
        if let Some(prev) = &prev
            && prev.lines_between(&loc) > 0
        {
            children.push(atom(""));
        }
        prev = Some(loc);
        children.push(layout);
    }
    children
}

/// Join items with commas. In flat position the comma takes a pretty-mode
/// space; in broken position the line break separates and, when `trailing`
/// is set, a trailing comma appears after the last item.
pub(crate) fn comma_list(items: Vec<Layout>) -> Layout {
    comma_list_config(SequenceConfig::default(), items, true)
}

pub(crate) fn comma_list_config(
    config: SequenceConfig,
    items: Vec<Layout>,
    trailing: bool,
) -> Layout {
    let len = items.len();
    let children = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if i + 1 < len {
                fuse(vec![item, atom(","), if_break(Layout::Empty, pretty_space())])
            } else if trailing {
                fuse(vec![item, if_break(atom(","), Layout::Empty)])
            } else {
                item
            }
        })
        .collect();
    sequence(config, children)
}

/// Join items with no break opportunity, separated by `sep`.
pub(crate) fn fuse_list(items: Vec<Layout>, sep: Layout) -> Layout {
    let len = items.len();
    let mut children = Vec::with_capacity(len * 2);
    for (i, item) in items.into_iter().enumerate() {
        children.push(item);
        if i + 1 < len {
            children.push(sep.clone());
        }
    }
    fuse(children)
}

pub(crate) fn wrap_in_parens(layout: Layout) -> Layout {
    fuse(vec![atom("("), layout, atom(")")])
}

/// Wrap in parentheses only when the layout breaks, indenting the content:
/// flat renders `x`, broken renders `(\n  x\n)`.
pub(crate) fn wrap_in_parens_on_break(layout: Layout) -> Layout {
    sequence(
        SequenceConfig::default().inline(true, true).indent(0),
        vec![fuse(vec![
            if_break(atom("("), Layout::Empty),
            sequence(SequenceConfig::default(), vec![layout]),
            if_break(atom(")"), Layout::Empty),
        ])],
    )
}

/// A statement terminator that pretty mode renders and ugly mode omits.
pub(crate) fn pretty_semicolon() -> Layout {
    if_pretty(atom(";"), Layout::Empty)
}

/// The terminator for a statement under the given semicolon policy.
pub(crate) fn semicolon(pretty_only: bool) -> Layout {
    if pretty_only { pretty_semicolon() } else { atom(";") }
}
