use std::slice::Iter;

use bumpalo::collections::Vec;
use serde::Serialize;

use flow_diff_span::HasSpan;
use flow_diff_span::Position;
use flow_diff_span::Span;

/// An arena-allocated sequence of nodes, such as a block's statements or a
/// function's parameters.
///
/// This is the element carrier the List Differ operates over: diffing a
/// `Sequence<T>` against another produces the positional `(index, Change<T>)`
/// script described by the differ crate.
#[derive(Debug, Eq, PartialEq, Hash, Serialize)]
#[repr(transparent)]
pub struct Sequence<'a, T> {
    pub nodes: Vec<'a, T>,
}

impl<'a, T: HasSpan> Sequence<'a, T> {
    #[inline]
    pub const fn new(inner: Vec<'a, T>) -> Self {
        Self { nodes: inner }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nodes.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.nodes.first()
    }

    #[inline]
    pub fn first_span(&self) -> Option<Span> {
        self.nodes.first().map(|node| node.span())
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.nodes.last()
    }

    #[inline]
    pub fn last_span(&self) -> Option<Span> {
        self.nodes.last().map(|node| node.span())
    }

    #[inline]
    pub fn span(&self, from: Position) -> Span {
        self.last_span().map_or(Span::new(from, from), |span| Span::new(from, span.end))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.nodes.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.nodes.as_slice()
    }
}

impl<'a, T: HasSpan> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = <Vec<'a, T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 'b, T> IntoIterator for &'b Sequence<'a, T> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
