//! The mutually recursive per-node-kind comparator family.
//!
//! Grounded on `mago_codex::diff::CodebaseDiff`'s shape for the overall
//! "walk a tree, recurse where possible, fall back to coarse replacement
//! where not" strategy, generalized here to a full recursive AST comparator
//! rather than a single-level per-symbol diff. Every public entry point in
//! this module is one of the eight Node-kind dispatchers named in the data
//! model: it owns the referential-equality shortcut, the depth cap, and the
//! "catch an internal `CannotRefine` and fall back to a whole-node Replace"
//! boundary. Everything else in this module is an internal helper that is
//! free to propagate `CannotRefine` upward without catching it itself.

use flow_diff_ast::ast::block::Block;
use flow_diff_ast::ast::class_like::Class;
use flow_diff_ast::ast::class_like::ClassElement;
use flow_diff_ast::ast::class_like::ClassMethod;
use flow_diff_ast::ast::class_like::ClassProperty;
use flow_diff_ast::ast::control_flow::r#for::For;
use flow_diff_ast::ast::control_flow::r#for::ForHead;
use flow_diff_ast::ast::control_flow::r#for::ForIn;
use flow_diff_ast::ast::control_flow::r#for::ForInit;
use flow_diff_ast::ast::control_flow::r#for::ForOf;
use flow_diff_ast::ast::control_flow::r#if::If;
use flow_diff_ast::ast::control_flow::switch::Switch;
use flow_diff_ast::ast::control_flow::switch::SwitchCase;
use flow_diff_ast::ast::control_flow::r#try::CatchClause;
use flow_diff_ast::ast::control_flow::r#try::Try;
use flow_diff_ast::ast::control_flow::r#while::DoWhile;
use flow_diff_ast::ast::control_flow::r#while::While;
use flow_diff_ast::ast::control_flow::with::With;
use flow_diff_ast::ast::expression::Expression;
use flow_diff_ast::ast::function_like::ArrowFunctionExpression;
use flow_diff_ast::ast::function_like::Function;
use flow_diff_ast::ast::function_like::FunctionBody;
use flow_diff_ast::ast::identifier::Identifier;
use flow_diff_ast::ast::module::ExportNamedDeclaration;
use flow_diff_ast::ast::module::ExportSpecifier;
use flow_diff_ast::ast::module::ImportDeclaration;
use flow_diff_ast::ast::module::ImportSpecifier;
use flow_diff_ast::ast::object::ObjectProperty;
use flow_diff_ast::ast::object::PropertyKey;
use flow_diff_ast::ast::pattern::ArrayPattern;
use flow_diff_ast::ast::pattern::ObjectPattern;
use flow_diff_ast::ast::pattern::ObjectPatternProperty;
use flow_diff_ast::ast::pattern::Pattern;
use flow_diff_ast::ast::statement::Statement;
use flow_diff_ast::ast::statement::VariableDeclaration;
use flow_diff_ast::ast::statement::VariableDeclarator;
use flow_diff_ast::ast::type_annotation::ObjectTypeProperty;
use flow_diff_ast::ast::type_annotation::TypeAnnotation;
use flow_diff_ast::sequence::Sequence;
use flow_diff_ast::Node;
use flow_diff_ast::Program;
use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::change::concat;
use crate::change::Change;
use crate::change::LocatedChange;
use crate::change::Refinement;
use crate::config::TreeDiffConfig;
use crate::list_diff;
use crate::list_diff::Algorithm;
use crate::list_diff::Change as ListChange;

/// The algorithm and depth/cost limits threaded through one top-level
/// `program`/`program_with_config` call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ctx {
    pub algorithm: Algorithm,
    pub cfg: TreeDiffConfig,
}

/// Identity wrapper bridging arena references into the List Differ's
/// generic `T: Copy + PartialEq` element bound: two wrapped references are
/// equal exactly when they point at the same allocation, matching the
/// referential-equality match points `spec.md` §4.1 requires.
#[derive(Debug, Clone, Copy)]
struct ById<'a, T>(&'a T);

impl<T> PartialEq for ById<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

/// Converts a `CannotRefine` into a whole-node `Replace` at `location`;
/// passes a `Refined` result through unchanged. Called exactly once, at
/// the end of each Node-kind dispatcher below.
fn catch<'a>(location: Span, old: Node<'a>, new: Node<'a>, refinement: Refinement<'a>) -> Refinement<'a> {
    match refinement {
        Refinement::CannotRefine => Refinement::single(location, Change::Replace(old, new)),
        refined => refined,
    }
}

/// Both-None is empty, both-Some recurses, one-None is `CannotRefine` —
/// the default optional-child policy every comparator uses except the
/// type-annotation asymmetric case.
fn diff_optional<'a, T>(
    old: Option<&'a T>,
    new: Option<&'a T>,
    recurse: impl FnOnce(&'a T, &'a T) -> Refinement<'a>,
) -> Refinement<'a> {
    match (old, new) {
        (None, None) => Refinement::empty(),
        (Some(o), Some(n)) => recurse(o, n),
        _ => Refinement::CannotRefine,
    }
}

/// The asymmetric rule for an optional type annotation on a field: absence
/// on both sides is empty; dropping an annotation is always a locatable
/// `Delete`; adding one is a locatable `Insert` only when the caller can
/// supply an anchor span to insert before — otherwise it is `CannotRefine`.
fn diff_optional_type_annotation<'a>(
    old: Option<&'a TypeAnnotation<'a>>,
    new: Option<&'a TypeAnnotation<'a>>,
    insertion_anchor: Option<Span>,
    ctx: Ctx,
    depth: usize,
) -> Refinement<'a> {
    match (old, new) {
        (None, None) => Refinement::empty(),
        (Some(o), Some(n)) => diff_type_annotation(o, n, ctx, depth),
        (Some(o), None) => Refinement::single(o.span(), Change::Delete(Node::TypeAnnotation(o))),
        (None, Some(n)) => match insertion_anchor {
            Some(anchor) => Refinement::single(anchor.start_of(), Change::Insert(vec![Node::TypeAnnotation(n)])),
            None => Refinement::CannotRefine,
        },
    }
}

/// Sequence recursion for element kinds in the closed `Node` set: Insert
/// and Delete entries are locatable against neighboring elements, so they
/// become their own located changes.
fn diff_sequence_nodes<'a, T>(
    ctx: Ctx,
    depth: usize,
    old: &'a Sequence<'a, T>,
    new: &'a Sequence<'a, T>,
    recurse: impl Fn(&'a T, &'a T, Ctx, usize) -> Refinement<'a>,
) -> Refinement<'a>
where
    T: HasSpan,
    Node<'a>: From<&'a T>,
{
    let old_items: Vec<ById<'a, T>> = old.iter().map(ById).collect();
    let new_items: Vec<ById<'a, T>> = new.iter().map(ById).collect();

    let script = match list_diff::diff_with_config(ctx.algorithm, &old_items, &new_items, ctx.cfg.list_diff) {
        Some(script) => script,
        None => return Refinement::CannotRefine,
    };

    let mut out = Vec::new();

    for (index, change) in script {
        match change {
            ListChange::Replace(a, b) => match recurse(a.0, b.0, ctx, depth + 1) {
                Refinement::Refined(changes) => out.extend(changes),
                Refinement::CannotRefine => return Refinement::CannotRefine,
            },
            ListChange::Insert(items) => {
                let location = if index == -1 {
                    match old.first() {
                        Some(first) => first.span().start_of(),
                        None => return Refinement::CannotRefine,
                    }
                } else {
                    let anchor = old.get(index as usize).expect("list diff index within old sequence bounds");
                    anchor.span().end_of()
                };
                let nodes = items.into_iter().map(|item| Node::from(item.0)).collect();
                out.push(LocatedChange { location, change: Change::Insert(nodes) });
            }
            ListChange::Delete(a) => {
                out.push(LocatedChange { location: a.0.span(), change: Change::Delete(Node::from(a.0)) });
            }
        }
    }

    Refinement::Refined(out)
}

/// Sequence recursion for element kinds NOT in the closed `Node` set
/// (variable declarators, class elements, object properties, switch cases,
/// export/import specifiers, pattern-array elements, pattern-object
/// properties, object-type properties): an Insert or Delete can't be
/// located against an element with no Node-kind of its own, so any
/// Insert/Delete propagates `CannotRefine` to the caller; only Replace
/// entries are usable.
fn diff_sequence_no_trivial<'a, T>(
    ctx: Ctx,
    depth: usize,
    old: &'a Sequence<'a, T>,
    new: &'a Sequence<'a, T>,
    recurse: impl Fn(&'a T, &'a T, Ctx, usize) -> Refinement<'a>,
) -> Refinement<'a>
where
    T: HasSpan,
{
    let old_items: Vec<ById<'a, T>> = old.iter().map(ById).collect();
    let new_items: Vec<ById<'a, T>> = new.iter().map(ById).collect();

    let script = match list_diff::diff_with_config(ctx.algorithm, &old_items, &new_items, ctx.cfg.list_diff) {
        Some(script) => script,
        None => return Refinement::CannotRefine,
    };

    let mut out = Vec::new();

    for (_, change) in script {
        match change {
            ListChange::Replace(a, b) => match recurse(a.0, b.0, ctx, depth + 1) {
                Refinement::Refined(changes) => out.extend(changes),
                Refinement::CannotRefine => return Refinement::CannotRefine,
            },
            ListChange::Insert(_) | ListChange::Delete(_) => return Refinement::CannotRefine,
        }
    }

    Refinement::Refined(out)
}

// ---------------------------------------------------------------------
// Node-kind dispatchers
// ---------------------------------------------------------------------

pub(crate) fn diff_program<'a>(old: &'a Program<'a>, new: &'a Program<'a>, ctx: Ctx) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::Program(old);
    let new_node = Node::Program(new);
    let inner = diff_sequence_nodes(ctx, 1, &old.statements, &new.statements, diff_statement);

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_identifier<'a>(old: &'a Identifier<'a>, new: &'a Identifier<'a>) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        Refinement::empty()
    } else {
        Refinement::single(old.span(), Change::Replace(Node::Identifier(old), Node::Identifier(new)))
    }
}

pub(crate) fn diff_statement<'a>(old: &'a Statement<'a>, new: &'a Statement<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::Statement(old);
    let new_node = Node::Statement(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing a statement");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = match (old, new) {
        (Statement::Expression(a), Statement::Expression(b)) => diff_expression(&*a.expression, &*b.expression, ctx, depth + 1),
        (Statement::Block(a), Statement::Block(b)) => diff_block(a, b, ctx, depth + 1),
        (Statement::Empty(_), Statement::Empty(_)) => Refinement::empty(),
        (Statement::Debugger(_), Statement::Debugger(_)) => Refinement::empty(),
        (Statement::VariableDeclaration(a), Statement::VariableDeclaration(b)) => diff_variable_declaration(a, b, ctx, depth + 1),
        (Statement::FunctionDeclaration(a), Statement::FunctionDeclaration(b)) => diff_function(a, b, ctx, depth + 1),
        (Statement::ClassDeclaration(a), Statement::ClassDeclaration(b)) => diff_class(a, b, ctx, depth + 1),
        (Statement::Return(a), Statement::Return(b)) => {
            diff_optional(a.argument.as_deref(), b.argument.as_deref(), |x, y| diff_expression(x, y, ctx, depth + 1))
        }
        (Statement::If(a), Statement::If(b)) => diff_if(a, b, ctx, depth + 1),
        (Statement::While(a), Statement::While(b)) => diff_while(a, b, ctx, depth + 1),
        (Statement::DoWhile(a), Statement::DoWhile(b)) => diff_do_while(a, b, ctx, depth + 1),
        (Statement::For(a), Statement::For(b)) => diff_for(a, b, ctx, depth + 1),
        (Statement::ForIn(a), Statement::ForIn(b)) => diff_for_in(a, b, ctx, depth + 1),
        (Statement::ForOf(a), Statement::ForOf(b)) => diff_for_of(a, b, ctx, depth + 1),
        (Statement::Switch(a), Statement::Switch(b)) => diff_switch(a, b, ctx, depth + 1),
        (Statement::With(a), Statement::With(b)) => diff_with(a, b, ctx, depth + 1),
        (Statement::Break(a), Statement::Break(b)) => {
            if a.label != b.label {
                Refinement::CannotRefine
            } else {
                Refinement::empty()
            }
        }
        (Statement::Continue(a), Statement::Continue(b)) => {
            if a.label != b.label {
                Refinement::CannotRefine
            } else {
                Refinement::empty()
            }
        }
        (Statement::Throw(a), Statement::Throw(b)) => diff_expression(&*a.argument, &*b.argument, ctx, depth + 1),
        (Statement::Try(a), Statement::Try(b)) => diff_try(a, b, ctx, depth + 1),
        (Statement::Labeled(a), Statement::Labeled(b)) => {
            if a.label.name != b.label.name {
                Refinement::CannotRefine
            } else {
                diff_statement(&*a.body, &*b.body, ctx, depth + 1)
            }
        }
        (Statement::Import(a), Statement::Import(b)) => diff_import(a, b, ctx, depth + 1),
        (Statement::ExportNamed(a), Statement::ExportNamed(b)) => diff_export_named(a, b, ctx, depth + 1),
        (Statement::ExportDefault(a), Statement::ExportDefault(b)) => diff_statement(&*a.declaration, &*b.declaration, ctx, depth + 1),
        _ => Refinement::CannotRefine,
    };

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_expression<'a>(old: &'a Expression<'a>, new: &'a Expression<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::Expression(old);
    let new_node = Node::Expression(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing an expression");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = match (old, new) {
        (Expression::Identifier(a), Expression::Identifier(b)) => diff_identifier(a, b),
        // Literal interiors are never diffed: two different literals are a
        // whole-expression Replace, never a partial edit.
        (Expression::Literal(a), Expression::Literal(b)) => {
            if a == b {
                Refinement::empty()
            } else {
                Refinement::CannotRefine
            }
        }
        (Expression::Array(a), Expression::Array(b)) => diff_sequence_nodes(ctx, depth + 1, &a.elements, &b.elements, diff_expression),
        (Expression::Object(a), Expression::Object(b)) => {
            diff_sequence_no_trivial(ctx, depth + 1, &a.properties, &b.properties, diff_object_property)
        }
        (Expression::Function(a), Expression::Function(b)) => diff_function(a, b, ctx, depth + 1),
        (Expression::ArrowFunction(a), Expression::ArrowFunction(b)) => diff_arrow_function(a, b, ctx, depth + 1),
        (Expression::Class(a), Expression::Class(b)) => diff_class(a, b, ctx, depth + 1),
        (Expression::Unary(a), Expression::Unary(b)) => {
            if a.operator != b.operator {
                Refinement::CannotRefine
            } else {
                diff_expression(&*a.argument, &*b.argument, ctx, depth + 1)
            }
        }
        (Expression::Update(a), Expression::Update(b)) => {
            if a.operator != b.operator || a.prefix != b.prefix {
                Refinement::CannotRefine
            } else {
                diff_expression(&*a.argument, &*b.argument, ctx, depth + 1)
            }
        }
        (Expression::Binary(a), Expression::Binary(b)) => {
            if a.operator != b.operator {
                Refinement::CannotRefine
            } else {
                concat([diff_expression(&*a.left, &*b.left, ctx, depth + 1), diff_expression(&*a.right, &*b.right, ctx, depth + 1)])
            }
        }
        (Expression::Logical(a), Expression::Logical(b)) => {
            if a.operator != b.operator {
                Refinement::CannotRefine
            } else {
                concat([diff_expression(&*a.left, &*b.left, ctx, depth + 1), diff_expression(&*a.right, &*b.right, ctx, depth + 1)])
            }
        }
        (Expression::Assignment(a), Expression::Assignment(b)) => {
            if a.operator != b.operator {
                Refinement::CannotRefine
            } else {
                concat([diff_pattern(&*a.left, &*b.left, ctx, depth + 1), diff_expression(&*a.right, &*b.right, ctx, depth + 1)])
            }
        }
        (Expression::Conditional(a), Expression::Conditional(b)) => concat([
            diff_expression(&*a.test, &*b.test, ctx, depth + 1),
            diff_expression(&*a.consequent, &*b.consequent, ctx, depth + 1),
            diff_expression(&*a.alternate, &*b.alternate, ctx, depth + 1),
        ]),
        // Non-goal: call-argument lists are not diffed as a list; `arguments`
        // is a structural field compared up front, the callee is the only
        // recursable part of a call.
        (Expression::Call(a), Expression::Call(b)) => {
            if a.optional != b.optional || a.arguments != b.arguments {
                Refinement::CannotRefine
            } else {
                diff_expression(&*a.callee, &*b.callee, ctx, depth + 1)
            }
        }
        (Expression::New(a), Expression::New(b)) => {
            if a.arguments != b.arguments {
                Refinement::CannotRefine
            } else {
                diff_expression(&*a.callee, &*b.callee, ctx, depth + 1)
            }
        }
        (Expression::Member(a), Expression::Member(b)) => {
            if a.computed != b.computed || a.optional != b.optional {
                Refinement::CannotRefine
            } else {
                concat([diff_expression(&*a.object, &*b.object, ctx, depth + 1), diff_property_key(&a.property, &b.property, ctx, depth + 1)])
            }
        }
        (Expression::Sequence(a), Expression::Sequence(b)) => {
            diff_sequence_nodes(ctx, depth + 1, &a.expressions, &b.expressions, diff_expression)
        }
        (Expression::This(_), Expression::This(_)) | (Expression::Super(_), Expression::Super(_)) => Refinement::empty(),
        (Expression::Spread(a), Expression::Spread(b)) => diff_expression(&*a.argument, &*b.argument, ctx, depth + 1),
        (Expression::Await(a), Expression::Await(b)) => diff_expression(&*a.argument, &*b.argument, ctx, depth + 1),
        (Expression::Yield(a), Expression::Yield(b)) => {
            if a.delegate != b.delegate {
                Refinement::CannotRefine
            } else {
                diff_optional(a.argument.as_deref(), b.argument.as_deref(), |x, y| diff_expression(x, y, ctx, depth + 1))
            }
        }
        _ => Refinement::CannotRefine,
    };

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_pattern<'a>(old: &'a Pattern<'a>, new: &'a Pattern<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::Pattern(old);
    let new_node = Node::Pattern(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing a pattern");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = match (old, new) {
        (Pattern::Identifier(a), Pattern::Identifier(b)) => diff_identifier(a, b),
        (Pattern::Object(a), Pattern::Object(b)) => diff_object_pattern(a, b, ctx, depth + 1),
        (Pattern::Array(a), Pattern::Array(b)) => diff_array_pattern(a, b, ctx, depth + 1),
        (Pattern::Assignment(a), Pattern::Assignment(b)) => {
            concat([diff_pattern(&*a.left, &*b.left, ctx, depth + 1), diff_expression(&*a.right, &*b.right, ctx, depth + 1)])
        }
        (Pattern::Rest(a), Pattern::Rest(b)) => diff_pattern(&*a.argument, &*b.argument, ctx, depth + 1),
        _ => Refinement::CannotRefine,
    };

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_type_annotation<'a>(old: &'a TypeAnnotation<'a>, new: &'a TypeAnnotation<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::TypeAnnotation(old);
    let new_node = Node::TypeAnnotation(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing a type annotation");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = match (old, new) {
        (TypeAnnotation::Any(_), TypeAnnotation::Any(_))
        | (TypeAnnotation::Mixed(_), TypeAnnotation::Mixed(_))
        | (TypeAnnotation::Unknown(_), TypeAnnotation::Unknown(_))
        | (TypeAnnotation::Void(_), TypeAnnotation::Void(_))
        | (TypeAnnotation::Null(_), TypeAnnotation::Null(_))
        | (TypeAnnotation::Boolean(_), TypeAnnotation::Boolean(_))
        | (TypeAnnotation::Number(_), TypeAnnotation::Number(_))
        | (TypeAnnotation::String(_), TypeAnnotation::String(_)) => Refinement::empty(),
        (TypeAnnotation::Nullable(a), TypeAnnotation::Nullable(b)) => diff_type_annotation(&*a.inner, &*b.inner, ctx, depth + 1),
        (TypeAnnotation::Union(a), TypeAnnotation::Union(b)) => {
            diff_sequence_nodes(ctx, depth + 1, &a.types, &b.types, diff_type_annotation)
        }
        (TypeAnnotation::Intersection(a), TypeAnnotation::Intersection(b)) => {
            diff_sequence_nodes(ctx, depth + 1, &a.types, &b.types, diff_type_annotation)
        }
        (TypeAnnotation::Array(a), TypeAnnotation::Array(b)) => diff_type_annotation(&*a.element, &*b.element, ctx, depth + 1),
        (TypeAnnotation::Function(a), TypeAnnotation::Function(b)) => concat([
            diff_sequence_nodes(ctx, depth + 1, &a.params, &b.params, diff_type_annotation),
            diff_type_annotation(&*a.return_type, &*b.return_type, ctx, depth + 1),
        ]),
        (TypeAnnotation::Reference(a), TypeAnnotation::Reference(b)) => {
            if a.name != b.name {
                Refinement::CannotRefine
            } else {
                diff_sequence_nodes(ctx, depth + 1, &a.type_arguments, &b.type_arguments, diff_type_annotation)
            }
        }
        (TypeAnnotation::Object(a), TypeAnnotation::Object(b)) => {
            diff_sequence_no_trivial(ctx, depth + 1, &a.properties, &b.properties, diff_object_type_property)
        }
        _ => Refinement::CannotRefine,
    };

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_class_property<'a>(old: &'a ClassProperty<'a>, new: &'a ClassProperty<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::ClassProperty(old);
    let new_node = Node::ClassProperty(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing a class property");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = if old.key != new.key || old.is_static != new.is_static {
        Refinement::CannotRefine
    } else {
        let value = diff_optional(old.value.as_deref(), new.value.as_deref(), |a, b| diff_expression(a, b, ctx, depth + 1));
        // Unlike a function's return type, a class property's annotation
        // carries no Loc to anchor an insertion at when absent, so a
        // None -> Some transition here always falls back to CannotRefine.
        let type_annotation =
            diff_optional_type_annotation(old.type_annotation.as_deref(), new.type_annotation.as_deref(), None, ctx, depth + 1);
        concat([value, type_annotation])
    };

    catch(location, old_node, new_node, inner)
}

pub(crate) fn diff_object_property<'a>(old: &'a ObjectProperty<'a>, new: &'a ObjectProperty<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if std::ptr::eq(old, new) {
        return Refinement::empty();
    }

    let location = old.span();
    let old_node = Node::ObjectProperty(old);
    let new_node = Node::ObjectProperty(new);

    if depth >= ctx.cfg.max_depth {
        tracing::debug!(depth, "tree diff depth cap reached while diffing an object property");
        return Refinement::single(location, Change::Replace(old_node, new_node));
    }

    let inner = match (old, new) {
        (ObjectProperty::Init(a), ObjectProperty::Init(b)) => {
            if a.shorthand != b.shorthand || a.computed != b.computed {
                Refinement::CannotRefine
            } else {
                concat([diff_property_key(&a.key, &b.key, ctx, depth + 1), diff_expression(&*a.value, &*b.value, ctx, depth + 1)])
            }
        }
        (ObjectProperty::Method(a), ObjectProperty::Method(b)) => {
            if a.kind != b.kind {
                Refinement::CannotRefine
            } else {
                concat([diff_property_key(&a.key, &b.key, ctx, depth + 1), diff_function(&a.function, &b.function, ctx, depth + 1)])
            }
        }
        (ObjectProperty::Spread(a), ObjectProperty::Spread(b)) => diff_expression(&*a.argument, &*b.argument, ctx, depth + 1),
        _ => Refinement::CannotRefine,
    };

    catch(location, old_node, new_node, inner)
}

/// Shared by object-literal properties and member-access expressions:
/// identifier keys recurse through the identifier leaf comparator, literal
/// keys are atomic (per the literal-interior non-goal), and computed keys
/// recurse as ordinary expressions.
fn diff_property_key<'a>(old: &'a PropertyKey<'a>, new: &'a PropertyKey<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    match (old, new) {
        (PropertyKey::Identifier(a), PropertyKey::Identifier(b)) => diff_identifier(a, b),
        (PropertyKey::Literal(a), PropertyKey::Literal(b)) => {
            if a == b {
                Refinement::empty()
            } else {
                Refinement::CannotRefine
            }
        }
        (PropertyKey::Computed(a), PropertyKey::Computed(b)) => diff_expression(a.as_ref(), b.as_ref(), ctx, depth),
        _ => Refinement::CannotRefine,
    }
}

// ---------------------------------------------------------------------
// Non-Node-kind helpers (free to propagate CannotRefine)
// ---------------------------------------------------------------------

fn diff_block<'a>(old: &'a Block<'a>, new: &'a Block<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    diff_sequence_nodes(ctx, depth, &old.statements, &new.statements, diff_statement)
}

fn diff_variable_declaration<'a>(old: &'a VariableDeclaration<'a>, new: &'a VariableDeclaration<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.kind != new.kind {
        return Refinement::CannotRefine;
    }

    diff_sequence_no_trivial(ctx, depth, &old.declarations, &new.declarations, diff_variable_declarator)
}

fn diff_variable_declarator<'a>(
    old: &'a VariableDeclarator<'a>,
    new: &'a VariableDeclarator<'a>,
    ctx: Ctx,
    depth: usize,
) -> Refinement<'a> {
    let id = diff_pattern(&old.id, &new.id, ctx, depth + 1);
    let init = diff_optional(old.init.as_deref(), new.init.as_deref(), |a, b| diff_expression(a, b, ctx, depth + 1));

    concat([id, init])
}

fn diff_function<'a>(old: &'a Function<'a>, new: &'a Function<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    // params is a structural field per the Function contract: any
    // difference, even a single param's pattern or default, bubbles up as a
    // whole-function Replace rather than a refined sub-diff.
    if old.asynchronous != new.asynchronous || old.generator != new.generator || old.id != new.id || old.params != new.params {
        return Refinement::CannotRefine;
    }

    // A missing return type is anchored at the function body's start: that
    // is exactly where a `: T` annotation would sit in source, so a
    // None -> Some transition here can be located, unlike in a class
    // property or a pattern's own annotation.
    let return_type = diff_optional_type_annotation(
        old.return_type.as_deref(),
        new.return_type.as_deref(),
        Some(old.body.span().start_of()),
        ctx,
        depth + 1,
    );
    let body = diff_block(&old.body, &new.body, ctx, depth + 1);

    concat([return_type, body])
}

fn diff_arrow_function<'a>(old: &'a ArrowFunctionExpression<'a>, new: &'a ArrowFunctionExpression<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    // See diff_function: params is structural, not recursable.
    if old.asynchronous != new.asynchronous || old.params != new.params {
        return Refinement::CannotRefine;
    }

    let return_type = diff_optional_type_annotation(
        old.return_type.as_deref(),
        new.return_type.as_deref(),
        Some(old.body.span().start_of()),
        ctx,
        depth + 1,
    );
    let body = diff_function_body(&old.body, &new.body, ctx, depth + 1);

    concat([return_type, body])
}

/// A block body and a bare-expression body are a structural mismatch:
/// swapping one for the other always yields whole-arrow `CannotRefine`,
/// which the `Expression::ArrowFunction` arm of `diff_expression` turns
/// into a whole-arrow `Replace`.
fn diff_function_body<'a>(old: &'a FunctionBody<'a>, new: &'a FunctionBody<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    match (old, new) {
        (FunctionBody::Block(a), FunctionBody::Block(b)) => diff_block(a, b, ctx, depth),
        (FunctionBody::Expression(a), FunctionBody::Expression(b)) => diff_expression(a.as_ref(), b.as_ref(), ctx, depth),
        _ => Refinement::CannotRefine,
    }
}

fn diff_class<'a>(old: &'a Class<'a>, new: &'a Class<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.id != new.id || old.super_class != new.super_class {
        return Refinement::CannotRefine;
    }

    diff_sequence_no_trivial(ctx, depth, &old.body, &new.body, diff_class_element)
}

fn diff_class_element<'a>(old: &'a ClassElement<'a>, new: &'a ClassElement<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    match (old, new) {
        (ClassElement::Property(a), ClassElement::Property(b)) => diff_class_property(a, b, ctx, depth),
        (ClassElement::Method(a), ClassElement::Method(b)) => diff_class_method(a, b, ctx, depth),
        _ => Refinement::CannotRefine,
    }
}

fn diff_class_method<'a>(old: &'a ClassMethod<'a>, new: &'a ClassMethod<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.key != new.key || old.kind != new.kind || old.is_static != new.is_static {
        return Refinement::CannotRefine;
    }

    diff_function(&old.function, &new.function, ctx, depth + 1)
}

fn diff_object_pattern<'a>(old: &'a ObjectPattern<'a>, new: &'a ObjectPattern<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let properties = diff_sequence_no_trivial(ctx, depth, &old.properties, &new.properties, diff_object_pattern_property);
    let type_annotation =
        diff_optional_type_annotation(old.type_annotation.as_deref(), new.type_annotation.as_deref(), None, ctx, depth + 1);

    concat([properties, type_annotation])
}

fn diff_object_pattern_property<'a>(
    old: &'a ObjectPatternProperty<'a>,
    new: &'a ObjectPatternProperty<'a>,
    ctx: Ctx,
    depth: usize,
) -> Refinement<'a> {
    if old.key != new.key || old.shorthand != new.shorthand {
        return Refinement::CannotRefine;
    }

    diff_pattern(&*old.value, &*new.value, ctx, depth + 1)
}

fn diff_array_pattern<'a>(old: &'a ArrayPattern<'a>, new: &'a ArrayPattern<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    // Array-pattern elements use the no-trivial variant like the other
    // non-located sequences, even though `Pattern` is itself a Node kind —
    // this crate's pattern model has no elision marker to make Inserts and
    // Deletes safely locatable against (see the root DESIGN.md entry on
    // array-pattern elision).
    let elements = diff_sequence_no_trivial(ctx, depth, &old.elements, &new.elements, diff_pattern);
    let type_annotation =
        diff_optional_type_annotation(old.type_annotation.as_deref(), new.type_annotation.as_deref(), None, ctx, depth + 1);

    concat([elements, type_annotation])
}

fn diff_object_type_property<'a>(old: &'a ObjectTypeProperty<'a>, new: &'a ObjectTypeProperty<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.key != new.key || old.optional != new.optional {
        return Refinement::CannotRefine;
    }

    diff_type_annotation(&*old.value, &*new.value, ctx, depth + 1)
}

fn diff_if<'a>(old: &'a If<'a>, new: &'a If<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let test = diff_expression(&*old.test, &*new.test, ctx, depth + 1);
    let consequent = diff_statement(&*old.consequent, &*new.consequent, ctx, depth + 1);
    let alternate = diff_optional(old.alternate.as_deref(), new.alternate.as_deref(), |a, b| diff_statement(a, b, ctx, depth + 1));

    concat([test, consequent, alternate])
}

fn diff_while<'a>(old: &'a While<'a>, new: &'a While<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    concat([diff_expression(&*old.test, &*new.test, ctx, depth + 1), diff_statement(&*old.body, &*new.body, ctx, depth + 1)])
}

fn diff_do_while<'a>(old: &'a DoWhile<'a>, new: &'a DoWhile<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    concat([diff_statement(&*old.body, &*new.body, ctx, depth + 1), diff_expression(&*old.test, &*new.test, ctx, depth + 1)])
}

fn diff_with<'a>(old: &'a With<'a>, new: &'a With<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    concat([diff_expression(&*old.object, &*new.object, ctx, depth + 1), diff_statement(&*old.body, &*new.body, ctx, depth + 1)])
}

fn diff_for<'a>(old: &'a For<'a>, new: &'a For<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let init = diff_optional(old.init.as_ref(), new.init.as_ref(), |a, b| diff_for_init(a, b, ctx, depth + 1));
    let test = diff_optional(old.test.as_deref(), new.test.as_deref(), |a, b| diff_expression(a, b, ctx, depth + 1));
    let update = diff_optional(old.update.as_deref(), new.update.as_deref(), |a, b| diff_expression(a, b, ctx, depth + 1));
    let body = diff_statement(&*old.body, &*new.body, ctx, depth + 1);

    concat([init, test, update, body])
}

fn diff_for_init<'a>(old: &'a ForInit<'a>, new: &'a ForInit<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    match (old, new) {
        (ForInit::VariableDeclaration(a), ForInit::VariableDeclaration(b)) => diff_variable_declaration(a, b, ctx, depth),
        (ForInit::Expression(a), ForInit::Expression(b)) => diff_expression(a.as_ref(), b.as_ref(), ctx, depth),
        _ => Refinement::CannotRefine,
    }
}

fn diff_for_head<'a>(old: &'a ForHead<'a>, new: &'a ForHead<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    match (old, new) {
        (ForHead::VariableDeclaration(a), ForHead::VariableDeclaration(b)) => diff_variable_declaration(a, b, ctx, depth),
        (ForHead::Pattern(a), ForHead::Pattern(b)) => diff_pattern(a, b, ctx, depth),
        _ => Refinement::CannotRefine,
    }
}

fn diff_for_in<'a>(old: &'a ForIn<'a>, new: &'a ForIn<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    concat([
        diff_for_head(&old.left, &new.left, ctx, depth + 1),
        diff_expression(&*old.right, &*new.right, ctx, depth + 1),
        diff_statement(&*old.body, &*new.body, ctx, depth + 1),
    ])
}

fn diff_for_of<'a>(old: &'a ForOf<'a>, new: &'a ForOf<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.is_await != new.is_await {
        return Refinement::CannotRefine;
    }

    concat([
        diff_for_head(&old.left, &new.left, ctx, depth + 1),
        diff_expression(&*old.right, &*new.right, ctx, depth + 1),
        diff_statement(&*old.body, &*new.body, ctx, depth + 1),
    ])
}

fn diff_switch<'a>(old: &'a Switch<'a>, new: &'a Switch<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    concat([
        diff_expression(&*old.discriminant, &*new.discriminant, ctx, depth + 1),
        diff_sequence_no_trivial(ctx, depth, &old.cases, &new.cases, diff_switch_case),
    ])
}

fn diff_switch_case<'a>(old: &'a SwitchCase<'a>, new: &'a SwitchCase<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let test = diff_optional(old.test.as_deref(), new.test.as_deref(), |a, b| diff_expression(a, b, ctx, depth + 1));
    let consequent = diff_sequence_nodes(ctx, depth + 1, &old.consequent, &new.consequent, diff_statement);

    concat([test, consequent])
}

fn diff_try<'a>(old: &'a Try<'a>, new: &'a Try<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let block = diff_block(&old.block, &new.block, ctx, depth + 1);
    let handler = diff_optional(old.handler.as_ref(), new.handler.as_ref(), |a, b| diff_catch_clause(a, b, ctx, depth + 1));
    let finalizer = diff_optional(old.finalizer.as_ref(), new.finalizer.as_ref(), |a, b| diff_block(a, b, ctx, depth + 1));

    concat([block, handler, finalizer])
}

fn diff_catch_clause<'a>(old: &'a CatchClause<'a>, new: &'a CatchClause<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    let param = diff_optional(old.param.as_ref(), new.param.as_ref(), |a, b| diff_pattern(a, b, ctx, depth + 1));
    let body = diff_block(&old.body, &new.body, ctx, depth + 1);

    concat([param, body])
}

fn diff_import<'a>(old: &'a ImportDeclaration<'a>, new: &'a ImportDeclaration<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.source != new.source {
        return Refinement::CannotRefine;
    }

    diff_sequence_no_trivial(ctx, depth, &old.specifiers, &new.specifiers, diff_import_specifier)
}

fn diff_import_specifier<'a>(old: &'a ImportSpecifier<'a>, new: &'a ImportSpecifier<'a>, _ctx: Ctx, _depth: usize) -> Refinement<'a> {
    let same = match (old, new) {
        (ImportSpecifier::Named { imported: oi, local: ol, .. }, ImportSpecifier::Named { imported: ni, local: nl, .. }) => {
            oi.name == ni.name && ol.name == nl.name
        }
        (ImportSpecifier::Default { local: ol }, ImportSpecifier::Default { local: nl }) => ol.name == nl.name,
        (ImportSpecifier::Namespace { local: ol, .. }, ImportSpecifier::Namespace { local: nl, .. }) => ol.name == nl.name,
        _ => false,
    };

    if same {
        Refinement::empty()
    } else {
        Refinement::CannotRefine
    }
}

fn diff_export_named<'a>(old: &'a ExportNamedDeclaration<'a>, new: &'a ExportNamedDeclaration<'a>, ctx: Ctx, depth: usize) -> Refinement<'a> {
    if old.source != new.source {
        return Refinement::CannotRefine;
    }

    let declaration = diff_optional(old.declaration.as_deref(), new.declaration.as_deref(), |a, b| diff_statement(a, b, ctx, depth + 1));
    let specifiers = diff_sequence_no_trivial(ctx, depth, &old.specifiers, &new.specifiers, diff_export_specifier);

    concat([declaration, specifiers])
}

fn diff_export_specifier<'a>(old: &'a ExportSpecifier<'a>, new: &'a ExportSpecifier<'a>, _ctx: Ctx, _depth: usize) -> Refinement<'a> {
    if old.local.name == new.local.name && old.exported.name == new.exported.name {
        Refinement::empty()
    } else {
        Refinement::CannotRefine
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::boxed::Box as ABox;
    use bumpalo::collections::Vec as AVec;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    use flow_diff_ast::ast::expression::ExpressionStatement;
    use flow_diff_ast::ast::literal::Literal;
    use flow_diff_ast::ast::literal::LiteralValue;
    use flow_diff_ast::ast::operator::VariableKind;
    use flow_diff_span::Position;

    use super::*;

    fn pos(offset: u32) -> Position {
        Position::new(offset, 1, offset + 1)
    }

    fn span(start: u32, end: u32) -> Span {
        Span::new(pos(start), pos(end))
    }

    fn ctx() -> Ctx {
        Ctx { algorithm: Algorithm::Standard, cfg: TreeDiffConfig::default() }
    }

    fn ident<'a>(name: &'a str, start: u32, end: u32) -> Identifier<'a> {
        Identifier { span: span(start, end), name, type_annotation: None }
    }

    fn number<'a>(text: &'a str, start: u32, end: u32) -> Literal<'a> {
        Literal { span: span(start, end), value: LiteralValue::Number(text) }
    }

    fn program<'a>(bump: &'a Bump, statements: Vec<Statement<'a>>) -> Program<'a> {
        Program { statements: Sequence::new(AVec::from_iter_in(statements, bump)) }
    }

    /// Scenario 1: `var x = 1;` -> `var y = 1;` replaces only the
    /// identifier, located at the old identifier's own span.
    #[test]
    fn scenario_replaces_renamed_declarator_identifier() {
        let bump = Bump::new();

        let old_decl = VariableDeclarator {
            span: span(4, 9),
            id: Pattern::Identifier(ident("x", 4, 5)),
            init: Some(ABox::new_in(Expression::Literal(number("1", 8, 9)), &bump)),
        };
        let new_decl = VariableDeclarator {
            span: span(4, 9),
            id: Pattern::Identifier(ident("y", 4, 5)),
            init: Some(ABox::new_in(Expression::Literal(number("1", 8, 9)), &bump)),
        };

        let old = program(
            &bump,
            vec![Statement::VariableDeclaration(VariableDeclaration {
                span: span(0, 10),
                kind: VariableKind::Var,
                declarations: Sequence::new(AVec::from_iter_in(vec![old_decl], &bump)),
            })],
        );
        let new = program(
            &bump,
            vec![Statement::VariableDeclaration(VariableDeclaration {
                span: span(0, 10),
                kind: VariableKind::Var,
                declarations: Sequence::new(AVec::from_iter_in(vec![new_decl], &bump)),
            })],
        );

        let result = diff_program(&old, &new, ctx());
        let changes = result.into_changes().expect("expected a refined result, not CannotRefine");

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].location, span(4, 5));
        match &changes[0].change {
            Change::Replace(Node::Identifier(a), Node::Identifier(b)) => {
                assert_eq!(a.name, "x");
                assert_eq!(b.name, "y");
            }
            other => panic!("expected an identifier replace, got {other:?}"),
        }
    }

    /// Scenario 4: `() => 1` -> `() => 2`. The arrow function itself, its
    /// params and its block-vs-expression body structure are unchanged, so
    /// the only refinement is a `Replace` of the literal, located at the
    /// literal's own span rather than the arrow's.
    #[test]
    fn scenario_replaces_arrow_body_literal_in_place() {
        let bump = Bump::new();

        let old_arrow = ArrowFunctionExpression {
            span: span(0, 7),
            asynchronous: false,
            params: Sequence::new(AVec::new_in(&bump)),
            return_type: None,
            body: FunctionBody::Expression(ABox::new_in(Expression::Literal(number("1", 6, 7)), &bump)),
        };
        let new_arrow = ArrowFunctionExpression {
            span: span(0, 7),
            asynchronous: false,
            params: Sequence::new(AVec::new_in(&bump)),
            return_type: None,
            body: FunctionBody::Expression(ABox::new_in(Expression::Literal(number("2", 6, 7)), &bump)),
        };

        let old = program(
            &bump,
            vec![Statement::Expression(ExpressionStatement {
                span: span(0, 7),
                expression: ABox::new_in(Expression::ArrowFunction(old_arrow), &bump),
            })],
        );
        let new = program(
            &bump,
            vec![Statement::Expression(ExpressionStatement {
                span: span(0, 7),
                expression: ABox::new_in(Expression::ArrowFunction(new_arrow), &bump),
            })],
        );

        let result = diff_program(&old, &new, ctx());
        let changes = result.into_changes().expect("expected a refined result, not CannotRefine");

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].location, span(6, 7));
        match &changes[0].change {
            Change::Replace(Node::Expression(Expression::Literal(a)), Node::Expression(Expression::Literal(b))) => {
                assert_eq!(a.value, LiteralValue::Number("1"));
                assert_eq!(b.value, LiteralValue::Number("2"));
            }
            other => panic!("expected a literal replace, not a whole-arrow replace: {other:?}"),
        }
    }

    /// Scenario 5: `function f() {}` -> `function f(): number {}` inserts a
    /// return type annotation, anchored at the function body's start since
    /// that's the only locatable point for a field that didn't exist on the
    /// old side.
    #[test]
    fn scenario_inserts_missing_return_type_at_body_start() {
        let bump = Bump::new();

        let old_body = Block { left_brace: span(13, 14), statements: Sequence::new(AVec::new_in(&bump)), right_brace: span(14, 15) };
        let new_body = Block { left_brace: span(22, 23), statements: Sequence::new(AVec::new_in(&bump)), right_brace: span(23, 24) };

        let old_fn = Function {
            span: span(0, 15),
            asynchronous: false,
            generator: false,
            id: Some(ident("f", 9, 10)),
            params: Sequence::new(AVec::new_in(&bump)),
            return_type: None,
            body: old_body,
        };
        let new_fn = Function {
            span: span(0, 24),
            asynchronous: false,
            generator: false,
            id: Some(ident("f", 9, 10)),
            params: Sequence::new(AVec::new_in(&bump)),
            return_type: Some(ABox::new_in(TypeAnnotation::Number(span(14, 20)), &bump)),
            body: new_body,
        };

        let old = program(&bump, vec![Statement::FunctionDeclaration(old_fn)]);
        let new = program(&bump, vec![Statement::FunctionDeclaration(new_fn)]);

        let result = diff_program(&old, &new, ctx());
        let changes = result.into_changes().expect("expected a refined result, not CannotRefine");

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].location, span(13, 13));
        match &changes[0].change {
            Change::Insert(nodes) => {
                assert_eq!(nodes.len(), 1);
                match nodes[0] {
                    Node::TypeAnnotation(TypeAnnotation::Number(_)) => {}
                    other => panic!("expected an inserted number type annotation, got {other:?}"),
                }
            }
            other => panic!("expected an insert, got {other:?}"),
        }
    }

    /// Scenario 6: `if (c) a();` -> `if (c) a(); else b();`. Adding an
    /// `alternate` where there was none is a structural mismatch for `If`,
    /// so the whole `If` statement is replaced rather than an `alternate`
    /// field being inserted into.
    #[test]
    fn scenario_whole_if_replace_when_alternate_is_added() {
        let bump = Bump::new();

        fn call_statement<'a>(bump: &'a Bump, name: &'a str, start: u32, end: u32) -> Statement<'a> {
            Statement::Expression(ExpressionStatement {
                span: span(start, end),
                expression: ABox::new_in(
                    Expression::Call(flow_diff_ast::ast::expression::CallExpression {
                        callee: ABox::new_in(Expression::Identifier(ident(name, start, start + name.len() as u32)), bump),
                        arguments: Sequence::new(AVec::new_in(bump)),
                        right_parenthesis: span(end - 1, end),
                        optional: false,
                    }),
                    bump,
                ),
            })
        }

        let old_if = If {
            if_keyword: span(0, 2),
            test: ABox::new_in(Expression::Identifier(ident("c", 4, 5)), &bump),
            consequent: ABox::new_in(call_statement(&bump, "a", 7, 10), &bump),
            alternate: None,
        };
        let new_if = If {
            if_keyword: span(0, 2),
            test: ABox::new_in(Expression::Identifier(ident("c", 4, 5)), &bump),
            consequent: ABox::new_in(call_statement(&bump, "a", 7, 10), &bump),
            alternate: Some(ABox::new_in(call_statement(&bump, "b", 17, 20), &bump)),
        };

        let old_span = old_if.span();
        let old = program(&bump, vec![Statement::If(old_if)]);
        let new = program(&bump, vec![Statement::If(new_if)]);

        let result = diff_program(&old, &new, ctx());
        let changes = result.into_changes().expect("expected a refined result, not CannotRefine");

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].location, old_span);
        match &changes[0].change {
            Change::Replace(Node::Statement(Statement::If(_)), Node::Statement(Statement::If(_))) => {}
            other => panic!("expected a whole-If replace, got {other:?}"),
        }
    }

    /// Identity: diffing a program against itself (the very same
    /// allocation on both sides) short-circuits on the referential-equality
    /// check before any recursion, yielding no changes at all.
    #[test]
    fn identity_diff_of_a_program_against_itself_is_empty() {
        let bump = Bump::new();

        let p = program(
            &bump,
            vec![Statement::VariableDeclaration(VariableDeclaration {
                span: span(0, 10),
                kind: VariableKind::Let,
                declarations: Sequence::new(AVec::from_iter_in(
                    vec![VariableDeclarator { span: span(4, 9), id: Pattern::Identifier(ident("x", 4, 5)), init: None }],
                    &bump,
                )),
            })],
        );

        let result = diff_program(&p, &p, ctx());
        let changes = result.into_changes().expect("expected a refined result, not CannotRefine");

        assert!(changes.is_empty());
    }
}
