use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::function_like::Function;
use crate::ast::identifier::Identifier;
use crate::ast::object::PropertyKey;
use crate::ast::operator::MethodKind;
use crate::ast::type_annotation::TypeAnnotation;
use crate::sequence::Sequence;

#[derive(Debug, PartialEq, Serialize)]
pub struct Class<'a> {
    pub span: Span,
    pub id: Option<Identifier<'a>>,
    pub super_class: Option<Box<'a, Expression<'a>>>,
    pub body: Sequence<'a, ClassElement<'a>>,
}

#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum ClassElement<'a> {
    Property(ClassProperty<'a>),
    Method(ClassMethod<'a>),
}

/// A class field declaration (`foo: number = 1;`).
///
/// `ClassProperty` is one of the eight kinds in the closed `Node` union: the
/// Tree Differ's sequence recursion for `Class::body` locates
/// `Insert`/`Delete`/`Replace` entries against individual properties.
#[derive(Debug, PartialEq, Serialize)]
pub struct ClassProperty<'a> {
    pub span: Span,
    pub key: PropertyKey<'a>,
    pub value: Option<Box<'a, Expression<'a>>>,
    pub type_annotation: Option<Box<'a, TypeAnnotation<'a>>>,
    pub is_static: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ClassMethod<'a> {
    pub span: Span,
    pub key: PropertyKey<'a>,
    pub kind: MethodKind,
    pub is_static: bool,
    pub function: Function<'a>,
}

impl HasSpan for Class<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ClassElement<'_> {
    fn span(&self) -> Span {
        match self {
            ClassElement::Property(inner) => inner.span(),
            ClassElement::Method(inner) => inner.span(),
        }
    }
}

impl HasSpan for ClassProperty<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ClassMethod<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
