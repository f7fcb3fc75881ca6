//! AST node types for JavaScript with Flow type annotations and JSX.
//!
//! This crate provides:
//! - Expression, statement, and pattern nodes in ESTree shape
//! - Flow type annotation nodes, including the `declare` family
//! - JSX elements, fragments, attributes, and children
//! - Helpers consumed by the layout generator (`partition_directives`,
//!   `trim_jsx_text`)
//!
//! Every node is a source location paired with kind-specific payload. The
//! tree is immutable once built; producers (the parser) and consumers (the
//! layout generator) live in other crates.

pub mod expr;
pub mod func;
pub mod helpers;
pub mod jsx;
pub mod pat;
pub mod stmt;
pub mod ty;

pub use expr::{
    ArrayElement, AssignmentOp, BinaryOp, CallArgument, Expression, ExpressionKind, Identifier,
    Literal, LiteralValue, LogicalOp, MemberProperty, ObjectKey, ObjectProperty,
    ObjectPropertyKind, PrivateName, TemplateElement, TemplateLiteral, UnaryOp, UpdateOp,
};
pub use func::{
    Block, Class, ClassBody, ClassImplements, ClassMember, ClassMethod, ClassProperty, Function,
    FunctionBody, FunctionParams, MethodKind, Predicate, PredicateKind,
};
pub use helpers::{partition_directives, trim_jsx_text};
pub use jsx::{
    JsxAttribute, JsxAttributeItem, JsxAttributeName, JsxAttributeValue, JsxChild, JsxChildKind,
    JsxClosingElement, JsxElement, JsxExpressionContainer, JsxFragment, JsxIdentifier,
    JsxMemberExpression, JsxMemberObject, JsxName, JsxOpeningElement,
};
pub use pat::{ArrayPatternElement, ObjectPatternProperty, Pattern, PatternKind};
pub use stmt::{
    CatchClause, Comment, CommentKind, DeclareClass, DeclareExportDeclaration, DeclareFunction,
    DeclareModuleId, DeclareVariable, ExportDefaultDeclaration, ExportNamedSpecifier, ForInLeft,
    ForInit, ImportKind, ImportSpecifiers, Interface, NamedImport, OpaqueType, Program, Statement,
    StatementKind, SwitchCase, TypeAlias, VariableDeclaration, VariableDeclarator, VariableKind,
};
pub use ty::{
    FunctionType, FunctionTypeParam, GenericType, GenericTypeId, InterfaceExtends, ObjectType,
    ObjectTypeCallProperty, ObjectTypeIndexer, ObjectTypeKey, ObjectTypeProp, ObjectTypeProperty,
    Type, TypeKind, TypeParam, TypeParameterDeclaration, TypeParameterInstantiation, Variance,
};
