use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::block::Block;
use crate::ast::class_like::Class;
use crate::ast::control_flow::r#for::For;
use crate::ast::control_flow::r#for::ForIn;
use crate::ast::control_flow::r#for::ForOf;
use crate::ast::control_flow::r#if::If;
use crate::ast::control_flow::switch::Switch;
use crate::ast::control_flow::r#try::Try;
use crate::ast::control_flow::r#while::DoWhile;
use crate::ast::control_flow::r#while::While;
use crate::ast::control_flow::with::With;
use crate::ast::expression::Expression;
use crate::ast::function_like::Function;
use crate::ast::identifier::Identifier;
use crate::ast::module::ExportDefaultDeclaration;
use crate::ast::module::ExportNamedDeclaration;
use crate::ast::module::ImportDeclaration;
use crate::ast::operator::VariableKind;
use crate::ast::pattern::Pattern;
use crate::sequence::Sequence;

/// A JavaScript/Flow statement.
///
/// One of the eight kinds in the closed `Node` union. The Tree Differ
/// dispatches on the variant first (a different variant between old and new
/// is always a structural mismatch, i.e. a whole-statement `Replace`) and
/// only recurses field-by-field once both sides agree on the variant.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum Statement<'a> {
    Expression(ExpressionStatement<'a>),
    Block(Block<'a>),
    Empty(Span),
    Debugger(Span),
    VariableDeclaration(VariableDeclaration<'a>),
    FunctionDeclaration(Function<'a>),
    ClassDeclaration(Class<'a>),
    Return(ReturnStatement<'a>),
    If(If<'a>),
    While(While<'a>),
    DoWhile(DoWhile<'a>),
    For(For<'a>),
    ForIn(ForIn<'a>),
    ForOf(ForOf<'a>),
    Switch(Switch<'a>),
    With(With<'a>),
    Break(BreakStatement<'a>),
    Continue(ContinueStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(Try<'a>),
    Labeled(LabeledStatement<'a>),
    Import(ImportDeclaration<'a>),
    ExportNamed(ExportNamedDeclaration<'a>),
    ExportDefault(ExportDefaultDeclaration<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ExpressionStatement<'a> {
    pub span: Span,
    pub expression: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VariableDeclaration<'a> {
    pub span: Span,
    pub kind: VariableKind,
    pub declarations: Sequence<'a, VariableDeclarator<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VariableDeclarator<'a> {
    pub span: Span,
    pub id: Pattern<'a>,
    pub init: Option<Box<'a, Expression<'a>>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ReturnStatement<'a> {
    pub return_keyword: Span,
    pub argument: Option<Box<'a, Expression<'a>>>,
    pub semicolon: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BreakStatement<'a> {
    pub span: Span,
    pub label: Option<Identifier<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContinueStatement<'a> {
    pub span: Span,
    pub label: Option<Identifier<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ThrowStatement<'a> {
    pub throw_keyword: Span,
    pub argument: Box<'a, Expression<'a>>,
    pub semicolon: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LabeledStatement<'a> {
    pub label: Identifier<'a>,
    pub body: Box<'a, Statement<'a>>,
}

impl HasSpan for Statement<'_> {
    fn span(&self) -> Span {
        match self {
            Statement::Expression(inner) => inner.span(),
            Statement::Block(inner) => inner.span(),
            Statement::Empty(span) | Statement::Debugger(span) => *span,
            Statement::VariableDeclaration(inner) => inner.span(),
            Statement::FunctionDeclaration(inner) => inner.span(),
            Statement::ClassDeclaration(inner) => inner.span(),
            Statement::Return(inner) => inner.span(),
            Statement::If(inner) => inner.span(),
            Statement::While(inner) => inner.span(),
            Statement::DoWhile(inner) => inner.span(),
            Statement::For(inner) => inner.span(),
            Statement::ForIn(inner) => inner.span(),
            Statement::ForOf(inner) => inner.span(),
            Statement::Switch(inner) => inner.span(),
            Statement::With(inner) => inner.span(),
            Statement::Break(inner) => inner.span(),
            Statement::Continue(inner) => inner.span(),
            Statement::Throw(inner) => inner.span(),
            Statement::Try(inner) => inner.span(),
            Statement::Labeled(inner) => inner.span(),
            Statement::Import(inner) => inner.span(),
            Statement::ExportNamed(inner) => inner.span(),
            Statement::ExportDefault(inner) => inner.span(),
        }
    }
}

impl HasSpan for ExpressionStatement<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for VariableDeclaration<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for VariableDeclarator<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ReturnStatement<'_> {
    fn span(&self) -> Span {
        self.return_keyword.join(self.semicolon)
    }
}

impl HasSpan for BreakStatement<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ContinueStatement<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ThrowStatement<'_> {
    fn span(&self) -> Span {
        self.throw_keyword.join(self.semicolon)
    }
}

impl HasSpan for LabeledStatement<'_> {
    fn span(&self) -> Span {
        self.label.span().join(self.body.span())
    }
}
