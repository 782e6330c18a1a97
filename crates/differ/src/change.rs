//! The externally visible shape of a diff: located changes over the closed
//! `Node` union, and the `Refinement` control signal comparators use to
//! propagate "cannot refine" strictly upward.

use flow_diff_ast::Node;
use flow_diff_span::Span;

/// The three kinds of edit a comparator can emit. Kept separate from
/// [`Change`] so ordering/tie-breaking logic can compare kinds without
/// matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Insert,
    Delete,
    Replace,
}

/// An edit over nodes, located in source by a [`Span`] once emitted as part
/// of a [`LocatedChange`].
#[derive(Debug, Clone)]
pub enum Change<'a> {
    Insert(Vec<Node<'a>>),
    Delete(Node<'a>),
    Replace(Node<'a>, Node<'a>),
}

impl Change<'_> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Insert(_) => ChangeKind::Insert,
            Change::Delete(_) => ChangeKind::Delete,
            Change::Replace(_, _) => ChangeKind::Replace,
        }
    }
}

/// One entry of the differ's output: a change, located at the old node's
/// span, its `start_of`, or its `end_of` (never a synthesized location, per
/// the Locality invariant).
#[derive(Debug, Clone)]
pub struct LocatedChange<'a> {
    pub location: Span,
    pub change: Change<'a>,
}

/// The result of a single comparator call: either a refined list of located
/// changes, or a signal that the caller must emit a whole-node `Replace` at
/// its own level.
///
/// A named sum type rather than `Option<Vec<LocatedChange>>` so call sites
/// read as a decision (`match`) rather than an absence (`?`/`unwrap_or`).
#[derive(Debug, Clone)]
pub enum Refinement<'a> {
    Refined(Vec<LocatedChange<'a>>),
    CannotRefine,
}

impl<'a> Refinement<'a> {
    pub fn empty() -> Self {
        Refinement::Refined(Vec::new())
    }

    pub fn single(location: Span, change: Change<'a>) -> Self {
        Refinement::Refined(vec![LocatedChange { location, change }])
    }

    pub fn into_changes(self) -> Option<Vec<LocatedChange<'a>>> {
        match self {
            Refinement::Refined(changes) => Some(changes),
            Refinement::CannotRefine => None,
        }
    }

    pub fn is_cannot_refine(&self) -> bool {
        matches!(self, Refinement::CannotRefine)
    }
}

/// Concatenates a run of [`Refinement`]s in order, short-circuiting to
/// `CannotRefine` as soon as any part is.
pub(crate) fn concat<'a>(parts: impl IntoIterator<Item = Refinement<'a>>) -> Refinement<'a> {
    let mut out = Vec::new();
    for part in parts {
        match part {
            Refinement::Refined(changes) => out.extend(changes),
            Refinement::CannotRefine => return Refinement::CannotRefine,
        }
    }
    Refinement::Refined(out)
}
