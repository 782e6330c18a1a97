use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::identifier::Identifier;
use crate::ast::type_annotation::TypeAnnotation;
use crate::sequence::Sequence;

/// A binding pattern: the left-hand side of a variable declarator, a
/// function parameter, or an assignment target.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum Pattern<'a> {
    Identifier(Identifier<'a>),
    Object(ObjectPattern<'a>),
    Array(ArrayPattern<'a>),
    Assignment(AssignmentPattern<'a>),
    Rest(RestElement<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectPattern<'a> {
    pub left_brace: Span,
    pub properties: Sequence<'a, ObjectPatternProperty<'a>>,
    pub right_brace: Span,
    pub type_annotation: Option<Box<'a, TypeAnnotation<'a>>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectPatternProperty<'a> {
    pub span: Span,
    pub key: &'a str,
    pub value: Box<'a, Pattern<'a>>,
    pub shorthand: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArrayPattern<'a> {
    pub left_bracket: Span,
    pub elements: Sequence<'a, Pattern<'a>>,
    pub right_bracket: Span,
    pub type_annotation: Option<Box<'a, TypeAnnotation<'a>>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AssignmentPattern<'a> {
    pub left: Box<'a, Pattern<'a>>,
    pub equals: Span,
    pub right: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RestElement<'a> {
    pub dot_dot_dot: Span,
    pub argument: Box<'a, Pattern<'a>>,
}

impl HasSpan for Pattern<'_> {
    fn span(&self) -> Span {
        match self {
            Pattern::Identifier(inner) => inner.span(),
            Pattern::Object(inner) => inner.span(),
            Pattern::Array(inner) => inner.span(),
            Pattern::Assignment(inner) => inner.span(),
            Pattern::Rest(inner) => inner.span(),
        }
    }
}

impl HasSpan for ObjectPattern<'_> {
    fn span(&self) -> Span {
        self.left_brace.join(self.right_brace)
    }
}

impl HasSpan for ObjectPatternProperty<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ArrayPattern<'_> {
    fn span(&self) -> Span {
        self.left_bracket.join(self.right_bracket)
    }
}

impl HasSpan for AssignmentPattern<'_> {
    fn span(&self) -> Span {
        self.left.span().join(self.right.span())
    }
}

impl HasSpan for RestElement<'_> {
    fn span(&self) -> Span {
        self.dot_dot_dot.join(self.argument.span())
    }
}
