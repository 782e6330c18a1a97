//! Structural diffing of JavaScript/Flow ASTs.
//!
//! Two differs are exposed: [`list_diff`], a generic polymorphic list
//! differ (Myers trace plus a fast identity-based trivial mode), and a Tree
//! Differ, reachable through [`program`] / [`program_with_config`], which
//! walks a [`flow_diff_ast::Program`] recursively and falls back to a
//! whole-subtree [`Change::Replace`] wherever a finer diff can't be
//! represented.
//!
//! Grounded on `mago_codex::diff`'s split between a generic list-diffing
//! primitive and a domain-specific recursive walker built on top of it.

pub mod change;
pub mod config;
pub mod list_diff;
mod tree_diff;

pub use change::Change;
pub use change::ChangeKind;
pub use change::LocatedChange;
pub use change::Refinement;
pub use config::TreeDiffConfig;
pub use list_diff::Algorithm;
pub use list_diff::ListDiffConfig;

use flow_diff_ast::Node;
use flow_diff_ast::Program;
use flow_diff_span::HasSpan;

use crate::tree_diff::Ctx;

/// Diffs two parsed programs with [`TreeDiffConfig::default()`].
pub fn program<'a>(algorithm: Algorithm, old: &'a Program<'a>, new: &'a Program<'a>) -> Vec<LocatedChange<'a>> {
    program_with_config(algorithm, old, new, TreeDiffConfig::default())
}

/// Diffs two parsed programs with an explicit depth/cost configuration.
///
/// `Program` is always a valid `Replace` target, so this always returns a
/// complete edit script: if every recursive attempt inside bails out to
/// `CannotRefine`, the result is a single whole-program replacement rather
/// than an error.
pub fn program_with_config<'a>(
    algorithm: Algorithm,
    old: &'a Program<'a>,
    new: &'a Program<'a>,
    config: TreeDiffConfig,
) -> Vec<LocatedChange<'a>> {
    let ctx = Ctx { algorithm, cfg: config };

    match tree_diff::diff_program(old, new, ctx) {
        Refinement::Refined(changes) => changes,
        Refinement::CannotRefine => {
            tracing::error!("program-level comparator returned CannotRefine; this should be unreachable");
            vec![LocatedChange { location: old.span(), change: Change::Replace(Node::Program(old), Node::Program(new)) }]
        }
    }
}
