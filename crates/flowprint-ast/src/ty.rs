//! Flow type annotation nodes.

use flowprint_common::Loc;

use crate::expr::{Identifier, Literal};

#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub loc: Loc,
    pub kind: TypeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Any,
    Mixed,
    Empty,
    Void,
    Null,
    Number,
    String,
    Boolean,
    /// `*`
    Exists,
    /// `?T`
    Nullable(Box<Type>),
    Function(FunctionType),
    Object(ObjectType),
    /// `T[]`
    Array(Box<Type>),
    Generic(GenericType),
    Union(Vec<Type>),
    Intersection(Vec<Type>),
    /// `typeof t`
    Typeof(Box<Type>),
    /// `[T, U]`
    Tuple(Vec<Type>),
    /// `'literal'` — printed from `raw`
    StringLiteral { value: String, raw: String },
    /// `42` — printed from `raw`
    NumberLiteral { value: f64, raw: String },
    BooleanLiteral(bool),
}

/// `(x: T, y?: U, ...rest: R[]) => Ret` or the `:`-separated method form.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub params: Vec<FunctionTypeParam>,
    pub rest: Option<Box<FunctionTypeParam>>,
    pub return_type: Box<Type>,
    pub type_params: Option<TypeParameterDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionTypeParam {
    pub loc: Loc,
    pub name: Option<Identifier>,
    pub annotation: Type,
    pub optional: bool,
}

/// `{ … }` or the exact form `{| … |}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub exact: bool,
    pub properties: Vec<ObjectTypeProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectTypeProperty {
    Prop(ObjectTypeProp),
    /// `...T`
    Spread { loc: Loc, argument: Type },
    Indexer(ObjectTypeIndexer),
    Call(ObjectTypeCallProperty),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeProp {
    pub loc: Loc,
    pub key: ObjectTypeKey,
    pub value: Type,
    pub optional: bool,
    pub is_static: bool,
    pub variance: Option<Variance>,
    /// Method shorthand: `m(): T` rather than `m: () => T`.
    pub method: bool,
}

/// Object type keys are identifiers or string/number literals.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectTypeKey {
    Identifier(Identifier),
    Literal(Literal),
}

/// `[id: K]: V`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeIndexer {
    pub loc: Loc,
    pub id: Option<Identifier>,
    pub key: Box<Type>,
    pub value: Box<Type>,
    pub is_static: bool,
    pub variance: Option<Variance>,
}

/// `(): T` call property.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeCallProperty {
    pub loc: Loc,
    pub value: FunctionType,
    pub is_static: bool,
}

/// `A.B.C<T>` — qualified name plus optional type arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub id: GenericTypeId,
    pub type_args: Option<TypeParameterInstantiation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenericTypeId {
    Unqualified(Identifier),
    Qualified {
        loc: Loc,
        qualification: Box<GenericTypeId>,
        id: Identifier,
    },
}

/// `<T: Bound = Default, +U>` in declaration position.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterDeclaration {
    pub loc: Loc,
    pub params: Vec<TypeParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub loc: Loc,
    pub name: String,
    pub bound: Option<Type>,
    pub variance: Option<Variance>,
    pub default: Option<Type>,
}

/// `<T, U>` in use position.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterInstantiation {
    pub loc: Loc,
    pub params: Vec<Type>,
}

/// Variance sigil: `+` (covariant) or `-` (contravariant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variance {
    Covariant,
    Contravariant,
}

impl Variance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Variance::Covariant => "+",
            Variance::Contravariant => "-",
        }
    }
}

/// `interface I<T> extends A, B { … }` — shared by interface declarations,
/// `declare interface`, and `declare class`.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceExtends {
    pub loc: Loc,
    pub id: GenericTypeId,
    pub type_args: Option<TypeParameterInstantiation>,
}
