use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::class_like::ClassProperty;
use crate::ast::expression::Expression;
use crate::ast::identifier::Identifier;
use crate::ast::object::ObjectProperty;
use crate::ast::pattern::Pattern;
use crate::ast::statement::Statement;
use crate::ast::type_annotation::TypeAnnotation;
use crate::Program;

/// The closed union of node kinds the differ is able to locate and emit
/// changes against.
///
/// This is a borrowed view rather than an owning enum: each variant holds a
/// reference into whichever arena the corresponding tree was allocated in,
/// so constructing a `Node` is free and a `Node`'s lifetime is tied to the
/// tree it points into, not to the differ's own state.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program<'a>),
    Statement(&'a Statement<'a>),
    Expression(&'a Expression<'a>),
    Identifier(&'a Identifier<'a>),
    Pattern(&'a Pattern<'a>),
    TypeAnnotation(&'a TypeAnnotation<'a>),
    ClassProperty(&'a ClassProperty<'a>),
    ObjectProperty(&'a ObjectProperty<'a>),
}

impl HasSpan for Node<'_> {
    fn span(&self) -> Span {
        match self {
            Node::Program(inner) => inner.span(),
            Node::Statement(inner) => inner.span(),
            Node::Expression(inner) => inner.span(),
            Node::Identifier(inner) => inner.span(),
            Node::Pattern(inner) => inner.span(),
            Node::TypeAnnotation(inner) => inner.span(),
            Node::ClassProperty(inner) => inner.span(),
            Node::ObjectProperty(inner) => inner.span(),
        }
    }
}

impl<'a> From<&'a Program<'a>> for Node<'a> {
    fn from(value: &'a Program<'a>) -> Self {
        Node::Program(value)
    }
}

impl<'a> From<&'a Statement<'a>> for Node<'a> {
    fn from(value: &'a Statement<'a>) -> Self {
        Node::Statement(value)
    }
}

impl<'a> From<&'a Expression<'a>> for Node<'a> {
    fn from(value: &'a Expression<'a>) -> Self {
        Node::Expression(value)
    }
}

impl<'a> From<&'a Identifier<'a>> for Node<'a> {
    fn from(value: &'a Identifier<'a>) -> Self {
        Node::Identifier(value)
    }
}

impl<'a> From<&'a Pattern<'a>> for Node<'a> {
    fn from(value: &'a Pattern<'a>) -> Self {
        Node::Pattern(value)
    }
}

impl<'a> From<&'a TypeAnnotation<'a>> for Node<'a> {
    fn from(value: &'a TypeAnnotation<'a>) -> Self {
        Node::TypeAnnotation(value)
    }
}

impl<'a> From<&'a ClassProperty<'a>> for Node<'a> {
    fn from(value: &'a ClassProperty<'a>) -> Self {
        Node::ClassProperty(value)
    }
}

impl<'a> From<&'a ObjectProperty<'a>> for Node<'a> {
    fn from(value: &'a ObjectProperty<'a>) -> Self {
        Node::ObjectProperty(value)
    }
}
