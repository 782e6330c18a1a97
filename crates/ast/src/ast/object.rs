use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::function_like::Function;
use crate::ast::identifier::Identifier;
use crate::ast::literal::Literal;
use crate::ast::operator::MethodKind;
use crate::sequence::Sequence;

/// The key of an object property, a class member, or a member-access
/// expression. Shared across those three positions because it diffs the
/// same way in all of them: an identifier key and a computed key are a
/// structural mismatch (whole-property `Replace`); two identifier keys with
/// different names are also a structural mismatch, since renaming an object
/// key is observably different from keeping the key and changing the value.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum PropertyKey<'a> {
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    Computed(Box<'a, Expression<'a>>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectExpression<'a> {
    pub left_brace: Span,
    pub properties: Sequence<'a, ObjectProperty<'a>>,
    pub right_brace: Span,
}

/// An object literal's property.
///
/// `ObjectProperty` is one of the eight kinds in the closed `Node` union:
/// the Tree Differ's sequence recursion for `ObjectExpression::properties`
/// locates `Insert`/`Delete`/`Replace` entries directly against individual
/// properties rather than falling back to a whole-object replace.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum ObjectProperty<'a> {
    Init(ObjectPropertyInit<'a>),
    Method(ObjectPropertyMethod<'a>),
    Spread(ObjectPropertySpread<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectPropertyInit<'a> {
    pub span: Span,
    pub key: PropertyKey<'a>,
    pub value: Box<'a, Expression<'a>>,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectPropertyMethod<'a> {
    pub span: Span,
    pub key: PropertyKey<'a>,
    pub kind: MethodKind,
    pub function: Function<'a>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ObjectPropertySpread<'a> {
    pub dot_dot_dot: Span,
    pub argument: Box<'a, Expression<'a>>,
}

impl HasSpan for PropertyKey<'_> {
    fn span(&self) -> Span {
        match self {
            PropertyKey::Identifier(inner) => inner.span(),
            PropertyKey::Literal(inner) => inner.span(),
            PropertyKey::Computed(inner) => inner.span(),
        }
    }
}

impl HasSpan for ObjectExpression<'_> {
    fn span(&self) -> Span {
        self.left_brace.join(self.right_brace)
    }
}

impl HasSpan for ObjectProperty<'_> {
    fn span(&self) -> Span {
        match self {
            ObjectProperty::Init(inner) => inner.span(),
            ObjectProperty::Method(inner) => inner.span(),
            ObjectProperty::Spread(inner) => inner.span(),
        }
    }
}

impl HasSpan for ObjectPropertyInit<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ObjectPropertyMethod<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ObjectPropertySpread<'_> {
    fn span(&self) -> Span {
        self.dot_dot_dot.join(self.argument.span())
    }
}
