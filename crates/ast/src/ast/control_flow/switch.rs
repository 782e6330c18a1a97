use bumpalo::boxed::Box;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;
use crate::sequence::Sequence;

#[derive(Debug, PartialEq, Serialize)]
pub struct Switch<'a> {
    pub switch_keyword: Span,
    pub discriminant: Box<'a, Expression<'a>>,
    pub left_brace: Span,
    pub cases: Sequence<'a, SwitchCase<'a>>,
    pub right_brace: Span,
}

/// A single `case`/`default` arm.
///
/// `test: None` marks the `default` arm, which is a structural field —
/// a `case` turning into `default` (or back) is a whole-arm `Replace`,
/// never a recursable edit to `test`.
#[derive(Debug, PartialEq, Serialize)]
pub struct SwitchCase<'a> {
    pub span: Span,
    pub test: Option<Box<'a, Expression<'a>>>,
    pub consequent: Sequence<'a, Statement<'a>>,
}

impl HasSpan for Switch<'_> {
    fn span(&self) -> Span {
        self.switch_keyword.join(self.right_brace)
    }
}

impl HasSpan for SwitchCase<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
