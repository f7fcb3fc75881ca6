//! JSX nodes: elements, fragments, attributes, and children.

use flowprint_common::Loc;

use crate::expr::{Expression, Literal};

#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    pub opening: JsxOpeningElement,
    pub children: Vec<JsxChild>,
    pub closing: Option<JsxClosingElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxFragment {
    pub children: Vec<JsxChild>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxOpeningElement {
    pub loc: Loc,
    pub name: JsxName,
    pub attributes: Vec<JsxAttributeItem>,
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxClosingElement {
    pub loc: Loc,
    pub name: JsxName,
}

/// An element name: `div`, `a:b`, or `A.B.C`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxName {
    Identifier(JsxIdentifier),
    Namespaced {
        loc: Loc,
        namespace: JsxIdentifier,
        name: JsxIdentifier,
    },
    Member(JsxMemberExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxIdentifier {
    pub loc: Loc,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxMemberExpression {
    pub loc: Loc,
    pub object: Box<JsxMemberObject>,
    pub property: JsxIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxMemberObject {
    Identifier(JsxIdentifier),
    Member(JsxMemberExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeItem {
    Attribute(JsxAttribute),
    /// `{...props}`
    Spread { loc: Loc, argument: Expression },
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    pub loc: Loc,
    pub name: JsxAttributeName,
    pub value: Option<JsxAttributeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeName {
    Identifier(JsxIdentifier),
    Namespaced {
        loc: Loc,
        namespace: JsxIdentifier,
        name: JsxIdentifier,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeValue {
    StringLiteral(Literal),
    Container(JsxExpressionContainer),
}

/// `{expr}` — or the empty container `{}` when `expression` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxExpressionContainer {
    pub loc: Loc,
    pub expression: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxChild {
    pub loc: Loc,
    pub kind: JsxChildKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxChildKind {
    Element(JsxElement),
    Fragment(JsxFragment),
    ExpressionContainer(JsxExpressionContainer),
    /// `{...expr}` in child position.
    SpreadChild(Expression),
    Text { value: String, raw: String },
}
