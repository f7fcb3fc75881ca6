//! Helpers consumed by the layout generator.

use flowprint_common::Loc;

use crate::expr::{ExpressionKind, LiteralValue};
use crate::stmt::{Statement, StatementKind};

/// Split a statement list at the first statement that is not a directive.
///
/// A directive is an expression statement whose expression is a string
/// literal (`"use strict"` and friends). Returns the leading directives and
/// the remainder.
pub fn partition_directives(stmts: &[Statement]) -> (&[Statement], &[Statement]) {
    let split = stmts
        .iter()
        .position(|stmt| !is_directive(stmt))
        .unwrap_or(stmts.len());
    stmts.split_at(split)
}

fn is_directive(stmt: &Statement) -> bool {
    match &stmt.kind {
        StatementKind::Expression { expression } => matches!(
            &expression.kind,
            ExpressionKind::Literal(lit) if matches!(lit.value, LiteralValue::String(_))
        ),
        _ => false,
    }
}

/// Trim a JSX text child the way the JSX grammar collapses whitespace.
///
/// Lines are split on `\n`; tabs become spaces; every line except the first
/// is trimmed at the start and every line except the last is trimmed at the
/// end; non-empty lines are joined with a single space. Returns `None` when
/// nothing remains.
pub fn trim_jsx_text(loc: &Loc, value: &str) -> Option<(Loc, String)> {
    let lines: Vec<&str> = value.split('\n').collect();
    let last_non_empty = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(0);

    let mut trimmed = String::new();
    for (i, line) in lines.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i + 1 == lines.len();

        let line = line.replace('\t', " ");
        let line = if is_first { &line } else { line.trim_start() };
        let line = if is_last { line } else { line.trim_end() };

        if !line.is_empty() {
            trimmed.push_str(line);
            if i < last_non_empty {
                trimmed.push(' ');
            }
        }
    }

    if trimmed.is_empty() {
        None
    } else {
        Some((loc.clone(), trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expression, Literal};
    use flowprint_common::Loc;

    fn stmt(kind: StatementKind) -> Statement {
        Statement {
            loc: Loc::none(),
            kind,
        }
    }

    fn string_stmt(s: &str) -> Statement {
        stmt(StatementKind::Expression {
            expression: Box::new(Expression {
                loc: Loc::none(),
                kind: ExpressionKind::Literal(Literal {
                    loc: Loc::none(),
                    value: LiteralValue::String(s.to_string()),
                    raw: format!("\"{s}\""),
                }),
            }),
        })
    }

    #[test]
    fn test_partition_directives() {
        let stmts = vec![
            string_stmt("use strict"),
            string_stmt("use asm"),
            stmt(StatementKind::Debugger),
            string_stmt("not a directive here"),
        ];
        let (directives, rest) = partition_directives(&stmts);
        assert_eq!(directives.len(), 2);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn test_partition_directives_empty() {
        let (directives, rest) = partition_directives(&[]);
        assert!(directives.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_trim_jsx_text_single_line() {
        let loc = Loc::none();
        let (_, text) = trim_jsx_text(&loc, "  hello world  ").expect("kept");
        assert_eq!(text, "  hello world  ");
    }

    #[test]
    fn test_trim_jsx_text_multiline() {
        let loc = Loc::none();
        let (_, text) = trim_jsx_text(&loc, "\n  hello\n  world\n").expect("kept");
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_trim_jsx_text_whitespace_only() {
        let loc = Loc::none();
        assert_eq!(trim_jsx_text(&loc, "\n   \n\t\n"), None);
    }

    #[test]
    fn test_trim_jsx_text_interior_blank_line() {
        let loc = Loc::none();
        let (_, text) = trim_jsx_text(&loc, "a\n\nb").expect("kept");
        assert_eq!(text, "a b");
    }
}
