use bumpalo::boxed::Box;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;

/// A `with (object) body` statement. Both children are recursable: `object`
/// like any other expression child, `body` like any other statement child.
#[derive(Debug, PartialEq, Serialize)]
pub struct With<'a> {
    pub with_keyword: Span,
    pub object: Box<'a, Expression<'a>>,
    pub body: Box<'a, Statement<'a>>,
}

impl HasSpan for With<'_> {
    fn span(&self) -> Span {
        self.with_keyword.join(self.body.span())
    }
}
