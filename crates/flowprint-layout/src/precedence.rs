//! Operator precedence and ambiguity contexts.
//!
//! Precedence is a single numeric scale from 0 (comma sequences) to 20
//! (primaries). An expression emitted at a position requiring at least
//! precedence `p` is parenthesized when its own level is lower.
//!
//! Precedence alone is not enough: several productions are ambiguous based
//! on their lexical neighborhood rather than tree shape (an object literal
//! opening an arrow body reads as a block, `in` inside a `for` head reads as
//! for-in, `x + +y` fuses into `x++y`). The `ExpressionContext` threaded
//! through expression emission tracks those neighborhoods, and
//! `definitely_needs_parens` decides when they force parentheses.

use flowprint_ast::{
    BinaryOp, Expression, ExpressionKind, LogicalOp, PatternKind, UnaryOp, UpdateOp,
};

pub const PREC_MIN: u32 = 1;
pub const PREC_MAX: u32 = 20;
pub const PREC_ASSIGNMENT: u32 = 3;
pub const PREC_EXP: u32 = 15;
pub const PREC_UNARY: u32 = 15;
pub const PREC_CALL: u32 = 16;
pub const PREC_NEW: u32 = 17;
pub const PREC_TAGGED_TEMPLATE: u32 = 18;
pub const PREC_MEMBER: u32 = 19;

/// The precedence level of an expression node.
pub fn precedence_of(expr: &Expression) -> u32 {
    match &expr.kind {
        ExpressionKind::Sequence { .. } => 0,
        ExpressionKind::ArrowFunction(_) => 1,
        ExpressionKind::Yield { .. } => 2,
        ExpressionKind::Assignment { .. } => PREC_ASSIGNMENT,
        ExpressionKind::Conditional { .. } => 4,
        ExpressionKind::Logical { operator, .. } => match operator {
            LogicalOp::Or => 5,
            LogicalOp::And => 6,
        },
        ExpressionKind::Binary { operator, .. } => precedence_of_binary(*operator),
        ExpressionKind::Unary { .. } => PREC_UNARY,
        ExpressionKind::Update { .. } => PREC_UNARY,
        ExpressionKind::Call { .. } | ExpressionKind::Import { .. } => PREC_CALL,
        ExpressionKind::New { .. } => PREC_NEW,
        ExpressionKind::TaggedTemplate { .. } => PREC_TAGGED_TEMPLATE,
        ExpressionKind::Member { .. } => PREC_MEMBER,
        // Unsupported productions sit at the bottom of the scale.
        ExpressionKind::Comprehension | ExpressionKind::Generator => 0,
        ExpressionKind::This
        | ExpressionKind::Super
        | ExpressionKind::Array { .. }
        | ExpressionKind::Object { .. }
        | ExpressionKind::Identifier(_)
        | ExpressionKind::Literal(_)
        | ExpressionKind::TemplateLiteral(_)
        | ExpressionKind::Function(_)
        | ExpressionKind::Class(_)
        | ExpressionKind::JsxElement(_)
        | ExpressionKind::JsxFragment(_)
        | ExpressionKind::TypeCast { .. }
        | ExpressionKind::MetaProperty { .. } => PREC_MAX,
    }
}

pub fn precedence_of_binary(op: BinaryOp) -> u32 {
    match op {
        BinaryOp::BitOr => 7,
        BinaryOp::Xor => 8,
        BinaryOp::BitAnd => 9,
        BinaryOp::Equal | BinaryOp::NotEqual | BinaryOp::StrictEqual | BinaryOp::StrictNotEqual => {
            10
        }
        BinaryOp::LessThan
        | BinaryOp::LessThanEqual
        | BinaryOp::GreaterThan
        | BinaryOp::GreaterThanEqual
        | BinaryOp::In
        | BinaryOp::Instanceof => 11,
        BinaryOp::LShift | BinaryOp::RShift | BinaryOp::RShift3 => 12,
        BinaryOp::Plus | BinaryOp::Minus => 13,
        BinaryOp::Mult | BinaryOp::Div | BinaryOp::Mod => 14,
        BinaryOp::Exp => PREC_EXP,
    }
}

// =============================================================================
// Ambiguity context
// =============================================================================

/// Constraint on the leftmost token of the emitted expression. Cleared by
/// any wrapper and by any token that is not itself leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextLeft {
    #[default]
    Normal,
    /// At the start of an expression statement.
    InExpressionStatement,
    /// In the tag position of a tagged template.
    InTaggedTemplate,
    /// Immediately right of a binary `+`.
    InPlusOp,
    /// Immediately right of a binary `-`.
    InMinusOp,
}

/// Constraint on the shape of the whole subexpression. Cleared only by a
/// wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextGroup {
    #[default]
    Normal,
    /// The concise body of an arrow function.
    InArrowFuncBody,
    /// The init clause of a `for` head.
    InForInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpressionContext {
    pub left: ContextLeft,
    pub group: ContextGroup,
}

impl ExpressionContext {
    pub fn normal() -> Self {
        ExpressionContext::default()
    }

    pub fn with_left(left: ContextLeft) -> Self {
        ExpressionContext {
            left,
            group: ContextGroup::Normal,
        }
    }

    /// The context for a child that is no longer leftmost.
    pub fn reset_left(self) -> Self {
        ExpressionContext {
            left: ContextLeft::Normal,
            group: self.group,
        }
    }
}

/// True when the context alone forces parentheses around `expr`, regardless
/// of precedence.
pub fn definitely_needs_parens(ctxt: ExpressionContext, expr: &Expression) -> bool {
    let group_forces = match ctxt.group {
        // `() => ({})` — an unwrapped object literal would parse as a block
        // with a labeled statement.
        ContextGroup::InArrowFuncBody => matches!(expr.kind, ExpressionKind::Object { .. }),
        // `for ((x in y);;)` — an unwrapped `in` would parse as for-in.
        ContextGroup::InForInit => matches!(
            expr.kind,
            ExpressionKind::Binary {
                operator: BinaryOp::In,
                ..
            }
        ),
        ContextGroup::Normal => false,
    };
    if group_forces {
        return true;
    }

    match ctxt.left {
        ContextLeft::InExpressionStatement => match &expr.kind {
            // `function` / `class` / `{` at statement start start a
            // declaration or block instead.
            ExpressionKind::Function(_)
            | ExpressionKind::Class(_)
            | ExpressionKind::Object { .. } => true,
            ExpressionKind::Assignment { left, .. } => {
                matches!(left.kind, PatternKind::Object { .. })
            }
            _ => false,
        },
        ContextLeft::InTaggedTemplate => matches!(
            expr.kind,
            ExpressionKind::Function(_)
                | ExpressionKind::Class(_)
                | ExpressionKind::New { .. }
                | ExpressionKind::Import { .. }
                | ExpressionKind::Object { .. }
        ),
        // `x - -y` / `x - --y` must not fuse into `x--y`.
        ContextLeft::InMinusOp => match &expr.kind {
            ExpressionKind::Unary { operator, .. } => *operator == UnaryOp::Minus,
            ExpressionKind::Update {
                operator, prefix, ..
            } => *prefix && *operator == UpdateOp::Decrement,
            _ => false,
        },
        // `x + +y` / `x + ++y` must not fuse into `x++y`.
        ContextLeft::InPlusOp => match &expr.kind {
            ExpressionKind::Unary { operator, .. } => *operator == UnaryOp::Plus,
            ExpressionKind::Update {
                operator, prefix, ..
            } => *prefix && *operator == UpdateOp::Increment,
            _ => false,
        },
        ContextLeft::Normal => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowprint_ast::{Expression, Identifier, Pattern};
    use flowprint_common::Loc;

    fn expr(kind: ExpressionKind) -> Expression {
        Expression {
            loc: Loc::none(),
            kind,
        }
    }

    fn ident(name: &str) -> Expression {
        expr(ExpressionKind::Identifier(Identifier::new(Loc::none(), name)))
    }

    fn object() -> Expression {
        expr(ExpressionKind::Object { properties: vec![] })
    }

    #[test]
    fn test_precedence_ordering() {
        let seq = expr(ExpressionKind::Sequence {
            expressions: vec![],
        });
        assert_eq!(precedence_of(&seq), 0);
        assert_eq!(precedence_of(&ident("x")), PREC_MAX);
        assert!(precedence_of_binary(BinaryOp::Mult) > precedence_of_binary(BinaryOp::Plus));
        assert!(precedence_of_binary(BinaryOp::Exp) > precedence_of_binary(BinaryOp::Mult));
        assert!(precedence_of_binary(BinaryOp::In) < precedence_of_binary(BinaryOp::LShift));
    }

    #[test]
    fn test_object_in_arrow_body() {
        let ctxt = ExpressionContext {
            left: ContextLeft::Normal,
            group: ContextGroup::InArrowFuncBody,
        };
        assert!(definitely_needs_parens(ctxt, &object()));
        assert!(!definitely_needs_parens(ctxt, &ident("x")));
    }

    #[test]
    fn test_in_inside_for_init() {
        let ctxt = ExpressionContext {
            left: ContextLeft::Normal,
            group: ContextGroup::InForInit,
        };
        let in_expr = expr(ExpressionKind::Binary {
            operator: BinaryOp::In,
            left: Box::new(ident("x")),
            right: Box::new(ident("y")),
        });
        assert!(definitely_needs_parens(ctxt, &in_expr));
        let lt = expr(ExpressionKind::Binary {
            operator: BinaryOp::LessThan,
            left: Box::new(ident("x")),
            right: Box::new(ident("y")),
        });
        assert!(!definitely_needs_parens(ctxt, &lt));
    }

    #[test]
    fn test_object_assignment_at_statement_start() {
        let ctxt = ExpressionContext::with_left(ContextLeft::InExpressionStatement);
        let assign = expr(ExpressionKind::Assignment {
            operator: flowprint_ast::AssignmentOp::Assign,
            left: Box::new(Pattern {
                loc: Loc::none(),
                kind: PatternKind::Object {
                    properties: vec![],
                    annotation: None,
                },
            }),
            right: Box::new(ident("x")),
        });
        assert!(definitely_needs_parens(ctxt, &assign));
        assert!(definitely_needs_parens(ctxt, &object()));
        assert!(!definitely_needs_parens(ctxt, &ident("x")));
    }

    #[test]
    fn test_sign_fusion() {
        let minus_ctxt = ExpressionContext::with_left(ContextLeft::InMinusOp);
        let neg = expr(ExpressionKind::Unary {
            operator: UnaryOp::Minus,
            argument: Box::new(ident("y")),
        });
        let pos = expr(ExpressionKind::Unary {
            operator: UnaryOp::Plus,
            argument: Box::new(ident("y")),
        });
        assert!(definitely_needs_parens(minus_ctxt, &neg));
        assert!(!definitely_needs_parens(minus_ctxt, &pos));

        let plus_ctxt = ExpressionContext::with_left(ContextLeft::InPlusOp);
        assert!(definitely_needs_parens(plus_ctxt, &pos));
        assert!(!definitely_needs_parens(plus_ctxt, &neg));

        let pre_increment = expr(ExpressionKind::Update {
            operator: UpdateOp::Increment,
            prefix: true,
            argument: Box::new(ident("y")),
        });
        assert!(definitely_needs_parens(plus_ctxt, &pre_increment));
        assert!(!definitely_needs_parens(minus_ctxt, &pre_increment));
    }
}
