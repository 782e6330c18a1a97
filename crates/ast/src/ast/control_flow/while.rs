use bumpalo::boxed::Box;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;

#[derive(Debug, PartialEq, Serialize)]
pub struct While<'a> {
    pub while_keyword: Span,
    pub test: Box<'a, Expression<'a>>,
    pub body: Box<'a, Statement<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DoWhile<'a> {
    pub do_keyword: Span,
    pub body: Box<'a, Statement<'a>>,
    pub test: Box<'a, Expression<'a>>,
    pub semicolon: Span,
}

impl HasSpan for While<'_> {
    fn span(&self) -> Span {
        self.while_keyword.join(self.body.span())
    }
}

impl HasSpan for DoWhile<'_> {
    fn span(&self) -> Span {
        self.do_keyword.join(self.semicolon)
    }
}
