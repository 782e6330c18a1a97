use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::block::Block;
use crate::ast::pattern::Pattern;

#[derive(Debug, PartialEq, Serialize)]
pub struct Try<'a> {
    pub try_keyword: Span,
    pub block: Block<'a>,
    pub handler: Option<CatchClause<'a>>,
    pub finalizer: Option<Block<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CatchClause<'a> {
    pub catch_keyword: Span,
    pub param: Option<Pattern<'a>>,
    pub body: Block<'a>,
}

impl HasSpan for Try<'_> {
    fn span(&self) -> Span {
        let end = self.finalizer.as_ref().map_or_else(
            || self.handler.as_ref().map_or_else(|| self.block.span(), |handler| handler.span()),
            |finalizer| finalizer.span(),
        );

        self.try_keyword.join(end)
    }
}

impl HasSpan for CatchClause<'_> {
    fn span(&self) -> Span {
        self.catch_keyword.join(self.body.span())
    }
}
