use bumpalo::boxed::Box;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;

/// An `if` statement.
///
/// `alternate` is the asymmetric field the spec's scenario 6 turns on:
/// adding an `else` branch where there was none changes `If` from a
/// two-field to a three-field node, which this crate's Tree Differ treats
/// as a structural mismatch (whole-`If` `Replace`) rather than an `Insert`
/// against a field that doesn't exist yet to insert into.
#[derive(Debug, PartialEq, Serialize)]
pub struct If<'a> {
    pub if_keyword: Span,
    pub test: Box<'a, Expression<'a>>,
    pub consequent: Box<'a, Statement<'a>>,
    pub alternate: Option<Box<'a, Statement<'a>>>,
}

impl HasSpan for If<'_> {
    fn span(&self) -> Span {
        let end = self.alternate.as_ref().map_or_else(|| self.consequent.span(), |alt| alt.span());

        self.if_keyword.join(end)
    }
}
