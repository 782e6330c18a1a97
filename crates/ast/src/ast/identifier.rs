use bumpalo::boxed::Box;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::type_annotation::TypeAnnotation;

/// A bare name: a variable, function, class, or property identifier,
/// optionally carrying its own inline type annotation (`x: number` in a
/// parameter list).
///
/// `Identifier` is always a leaf to the Tree Differ: `name` and
/// `type_annotation` are never diffed independently. Two identifiers that
/// aren't referentially equal always produce a single whole-`Identifier`
/// `Replace`, even when only the annotation changed.
#[derive(Debug, Serialize)]
pub struct Identifier<'a> {
    pub span: Span,
    pub name: &'a str,
    pub type_annotation: Option<Box<'a, TypeAnnotation<'a>>>,
}

/// Name-equal, not span-equal or annotation-equal: callers that compare an
/// `Identifier` structurally (a function's `id`, a label, a property key)
/// only ever care whether it's the same name, matching `Literal`'s
/// value-equal treatment of position.
impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl HasSpan for Identifier<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
