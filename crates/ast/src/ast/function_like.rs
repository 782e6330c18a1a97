use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::block::Block;
use crate::ast::expression::Expression;
use crate::ast::identifier::Identifier;
use crate::ast::pattern::Pattern;
use crate::ast::type_annotation::TypeAnnotation;
use crate::sequence::Sequence;

/// A named function: a function declaration, a function expression, or a
/// class method's underlying function. Arrow functions are represented
/// separately (`ArrowFunctionExpression`) since they can't be named and
/// can't be generators, and diff differently as a result (see the spec's
/// arrow-body scenario, which relies on `body` being independently
/// recursable here).
#[derive(Debug, PartialEq, Serialize)]
pub struct Function<'a> {
    pub span: Span,
    pub asynchronous: bool,
    pub generator: bool,
    pub id: Option<Identifier<'a>>,
    pub params: Sequence<'a, Param<'a>>,
    pub return_type: Option<Box<'a, TypeAnnotation<'a>>>,
    pub body: Block<'a>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArrowFunctionExpression<'a> {
    pub span: Span,
    pub asynchronous: bool,
    pub params: Sequence<'a, Param<'a>>,
    pub return_type: Option<Box<'a, TypeAnnotation<'a>>>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Param<'a> {
    pub span: Span,
    pub pattern: Pattern<'a>,
    pub default: Option<Box<'a, Expression<'a>>>,
}

/// An arrow function's body: either a block (`() => { ... }`) or a bare
/// expression (`() => x + 1`). The two are a structural mismatch for the
/// Tree Differ — swapping one for the other always yields a whole-arrow
/// `Replace`, never a recursable diff.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum FunctionBody<'a> {
    Block(Block<'a>),
    Expression(Box<'a, Expression<'a>>),
}

impl HasSpan for Function<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ArrowFunctionExpression<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for Param<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for FunctionBody<'_> {
    fn span(&self) -> Span {
        match self {
            FunctionBody::Block(inner) => inner.span(),
            FunctionBody::Expression(inner) => inner.span(),
        }
    }
}
