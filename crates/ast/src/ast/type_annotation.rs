use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::sequence::Sequence;

/// A Flow type annotation.
///
/// `TypeAnnotation` is one of the eight kinds in the closed `Node` union, so
/// it gets its own comparator family in the Tree Differ rather than being
/// folded into whatever node happens to carry it.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum TypeAnnotation<'a> {
    Any(Span),
    Mixed(Span),
    Unknown(Span),
    Void(Span),
    Null(Span),
    Boolean(Span),
    Number(Span),
    String(Span),
    Nullable(NullableType<'a>),
    Union(UnionType<'a>),
    Intersection(IntersectionType<'a>),
    Array(ArrayType<'a>),
    Function(FunctionType<'a>),
    Reference(TypeReference<'a>),
    Object(ObjectType<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NullableType<'a> {
    pub question_mark: Span,
    pub inner: Box<'a, TypeAnnotation<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UnionType<'a> {
    pub types: Sequence<'a, TypeAnnotation<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct IntersectionType<'a> {
    pub types: Sequence<'a, TypeAnnotation<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArrayType<'a> {
    pub span: Span,
    pub element: Box<'a, TypeAnnotation<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FunctionType<'a> {
    pub span: Span,
    pub params: Sequence<'a, TypeAnnotation<'a>>,
    pub return_type: Box<'a, TypeAnnotation<'a>>,
}

/// A named type reference, optionally parameterized (`Array<T>`, `Foo`).
#[derive(Debug, PartialEq, Serialize)]
pub struct TypeReference<'a> {
    pub span: Span,
    pub name: &'a str,
    pub type_arguments: Sequence<'a, TypeAnnotation<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectType<'a> {
    pub left_brace: Span,
    pub properties: Sequence<'a, ObjectTypeProperty<'a>>,
    pub right_brace: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectTypeProperty<'a> {
    pub span: Span,
    pub key: &'a str,
    pub value: Box<'a, TypeAnnotation<'a>>,
    pub optional: bool,
}

impl HasSpan for TypeAnnotation<'_> {
    fn span(&self) -> Span {
        match self {
            TypeAnnotation::Any(span)
            | TypeAnnotation::Mixed(span)
            | TypeAnnotation::Unknown(span)
            | TypeAnnotation::Void(span)
            | TypeAnnotation::Null(span)
            | TypeAnnotation::Boolean(span)
            | TypeAnnotation::Number(span)
            | TypeAnnotation::String(span) => *span,
            TypeAnnotation::Nullable(inner) => inner.span(),
            TypeAnnotation::Union(inner) => inner.span(),
            TypeAnnotation::Intersection(inner) => inner.span(),
            TypeAnnotation::Array(inner) => inner.span(),
            TypeAnnotation::Function(inner) => inner.span(),
            TypeAnnotation::Reference(inner) => inner.span(),
            TypeAnnotation::Object(inner) => inner.span(),
        }
    }
}

impl HasSpan for NullableType<'_> {
    fn span(&self) -> Span {
        self.question_mark.join(self.inner.span())
    }
}

impl HasSpan for UnionType<'_> {
    fn span(&self) -> Span {
        match (self.types.first_span(), self.types.last_span()) {
            (Some(first), Some(last)) => first.join(last),
            _ => Span::new(flow_diff_span::Position::dummy(), flow_diff_span::Position::dummy()),
        }
    }
}

impl HasSpan for IntersectionType<'_> {
    fn span(&self) -> Span {
        match (self.types.first_span(), self.types.last_span()) {
            (Some(first), Some(last)) => first.join(last),
            _ => Span::new(flow_diff_span::Position::dummy(), flow_diff_span::Position::dummy()),
        }
    }
}

impl HasSpan for ArrayType<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for FunctionType<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for TypeReference<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ObjectType<'_> {
    fn span(&self) -> Span {
        self.left_brace.join(self.right_brace)
    }
}

impl HasSpan for ObjectTypeProperty<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
