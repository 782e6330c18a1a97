use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

/// A literal value.
///
/// Per the non-goal on literal-interior diffing, a `Literal` is always an
/// atomic leaf to the Tree Differ: two literals are either referentially
/// equal, value-equal (no change), or different (whole-node `Replace`, via
/// the `Expression::Literal` arm of `diff_expression`'s structural-mismatch
/// rule), never partially diffed.
#[derive(Debug, Serialize)]
pub struct Literal<'a> {
    pub span: Span,
    pub value: LiteralValue<'a>,
}

/// Value-equal, not span-equal: two literals that land at different source
/// positions (as they will on either side of an unrelated edit) are still
/// the same literal to the Tree Differ.
impl PartialEq for Literal<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum LiteralValue<'a> {
    String(&'a str),
    /// Stored as the source text rather than a parsed `f64` so two literals
    /// with the same numeric value but different spellings (`1.0` vs `1`)
    /// are still distinguishable, and so the type can derive `PartialEq`
    /// without floating-point equality surprises.
    Number(&'a str),
    Boolean(bool),
    Null,
    RegExp { pattern: &'a str, flags: &'a str },
}

impl HasSpan for Literal<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
