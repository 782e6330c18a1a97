use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Position;
use flow_diff_span::Span;

pub use crate::ast::statement::Statement;
pub use crate::node::Node;

pub mod ast;
pub mod node;
pub mod sequence;

use crate::sequence::Sequence;

/// The root of a parsed module.
///
/// `Program` is one of the eight kinds in the closed `Node` union, and the
/// only one whose Tree Differ entry point is a public, top-level function
/// (`program`/`program_with_config` in the differ crate) rather than an
/// internal comparator reached only through recursion.
#[derive(Debug, PartialEq, Serialize)]
pub struct Program<'a> {
    pub statements: Sequence<'a, Statement<'a>>,
}

impl HasSpan for Program<'_> {
    fn span(&self) -> Span {
        match (self.statements.first_span(), self.statements.last_span()) {
            (Some(first), Some(last)) => first.join(last),
            _ => Span::new(Position::dummy(), Position::dummy()),
        }
    }
}
