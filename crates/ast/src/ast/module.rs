use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::identifier::Identifier;
use crate::ast::literal::Literal;
use crate::ast::statement::Statement;
use crate::sequence::Sequence;

#[derive(Debug, PartialEq, Serialize)]
pub struct ImportDeclaration<'a> {
    pub import_keyword: Span,
    pub specifiers: Sequence<'a, ImportSpecifier<'a>>,
    pub source: Literal<'a>,
    pub semicolon: Span,
}

#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum ImportSpecifier<'a> {
    Named { span: Span, imported: Identifier<'a>, local: Identifier<'a> },
    Default { local: Identifier<'a> },
    Namespace { span: Span, local: Identifier<'a> },
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ExportNamedDeclaration<'a> {
    pub export_keyword: Span,
    pub declaration: Option<bumpalo::boxed::Box<'a, Statement<'a>>>,
    pub specifiers: Sequence<'a, ExportSpecifier<'a>>,
    pub source: Option<Literal<'a>>,
    pub semicolon: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ExportSpecifier<'a> {
    pub span: Span,
    pub local: Identifier<'a>,
    pub exported: Identifier<'a>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ExportDefaultDeclaration<'a> {
    pub export_keyword: Span,
    pub declaration: bumpalo::boxed::Box<'a, Statement<'a>>,
}

impl HasSpan for ImportDeclaration<'_> {
    fn span(&self) -> Span {
        self.import_keyword.join(self.semicolon)
    }
}

impl HasSpan for ImportSpecifier<'_> {
    fn span(&self) -> Span {
        match self {
            ImportSpecifier::Named { span, .. } | ImportSpecifier::Namespace { span, .. } => *span,
            ImportSpecifier::Default { local } => local.span(),
        }
    }
}

impl HasSpan for ExportNamedDeclaration<'_> {
    fn span(&self) -> Span {
        self.export_keyword.join(self.semicolon)
    }
}

impl HasSpan for ExportSpecifier<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for ExportDefaultDeclaration<'_> {
    fn span(&self) -> Span {
        self.export_keyword.join(self.declaration.span())
    }
}
