use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::pattern::Pattern;
use crate::ast::statement::Statement;
use crate::ast::statement::VariableDeclaration;

#[derive(Debug, PartialEq, Serialize)]
pub struct For<'a> {
    pub for_keyword: Span,
    pub init: Option<ForInit<'a>>,
    pub test: Option<Box<'a, Expression<'a>>>,
    pub update: Option<Box<'a, Expression<'a>>>,
    pub body: Box<'a, Statement<'a>>,
}

#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum ForInit<'a> {
    VariableDeclaration(VariableDeclaration<'a>),
    Expression(Box<'a, Expression<'a>>),
}

#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum ForHead<'a> {
    VariableDeclaration(VariableDeclaration<'a>),
    Pattern(Pattern<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ForIn<'a> {
    pub for_keyword: Span,
    pub left: ForHead<'a>,
    pub right: Box<'a, Expression<'a>>,
    pub body: Box<'a, Statement<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ForOf<'a> {
    pub for_keyword: Span,
    pub is_await: bool,
    pub left: ForHead<'a>,
    pub right: Box<'a, Expression<'a>>,
    pub body: Box<'a, Statement<'a>>,
}

impl HasSpan for For<'_> {
    fn span(&self) -> Span {
        self.for_keyword.join(self.body.span())
    }
}

impl HasSpan for ForInit<'_> {
    fn span(&self) -> Span {
        match self {
            ForInit::VariableDeclaration(inner) => inner.span(),
            ForInit::Expression(inner) => inner.span(),
        }
    }
}

impl HasSpan for ForHead<'_> {
    fn span(&self) -> Span {
        match self {
            ForHead::VariableDeclaration(inner) => inner.span(),
            ForHead::Pattern(inner) => inner.span(),
        }
    }
}

impl HasSpan for ForIn<'_> {
    fn span(&self) -> Span {
        self.for_keyword.join(self.body.span())
    }
}

impl HasSpan for ForOf<'_> {
    fn span(&self) -> Span {
        self.for_keyword.join(self.body.span())
    }
}
