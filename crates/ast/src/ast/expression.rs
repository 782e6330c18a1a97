use bumpalo::boxed::Box;
use serde::Serialize;
use strum::Display;

use flow_diff_span::HasSpan;
use flow_diff_span::Span;

use crate::ast::class_like::Class;
use crate::ast::function_like::ArrowFunctionExpression;
use crate::ast::function_like::Function;
use crate::ast::identifier::Identifier;
use crate::ast::literal::Literal;
use crate::ast::object::ObjectExpression;
use crate::ast::object::PropertyKey;
use crate::ast::operator::AssignmentOperator;
use crate::ast::operator::BinaryOperator;
use crate::ast::operator::LogicalOperator;
use crate::ast::operator::UnaryOperator;
use crate::ast::operator::UpdateOperator;
use crate::ast::pattern::Pattern;
use crate::sequence::Sequence;

/// A JavaScript/Flow expression.
///
/// One of the eight kinds in the closed `Node` union. As with `Statement`,
/// a variant mismatch between old and new is always a structural mismatch;
/// the Tree Differ only recurses into an expression's fields once the
/// variant tag matches on both sides.
#[derive(Debug, PartialEq, Serialize, Display)]
#[serde(tag = "type", content = "value")]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    Array(ArrayExpression<'a>),
    Object(ObjectExpression<'a>),
    Function(Function<'a>),
    ArrowFunction(ArrowFunctionExpression<'a>),
    Class(Class<'a>),
    Unary(UnaryExpression<'a>),
    Update(UpdateExpression<'a>),
    Binary(BinaryExpression<'a>),
    Logical(LogicalExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    Member(MemberExpression<'a>),
    Sequence(SequenceExpression<'a>),
    This(Span),
    Super(Span),
    Spread(SpreadElement<'a>),
    Await(AwaitExpression<'a>),
    Yield(YieldExpression<'a>),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArrayExpression<'a> {
    pub left_bracket: Span,
    pub elements: Sequence<'a, Expression<'a>>,
    pub right_bracket: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UnaryExpression<'a> {
    pub span: Span,
    pub operator: UnaryOperator,
    pub argument: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UpdateExpression<'a> {
    pub span: Span,
    pub operator: UpdateOperator,
    pub argument: Box<'a, Expression<'a>>,
    pub prefix: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BinaryExpression<'a> {
    pub operator: BinaryOperator,
    pub left: Box<'a, Expression<'a>>,
    pub right: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LogicalExpression<'a> {
    pub operator: LogicalOperator,
    pub left: Box<'a, Expression<'a>>,
    pub right: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AssignmentExpression<'a> {
    pub operator: AssignmentOperator,
    pub left: Box<'a, Pattern<'a>>,
    pub right: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ConditionalExpression<'a> {
    pub test: Box<'a, Expression<'a>>,
    pub consequent: Box<'a, Expression<'a>>,
    pub alternate: Box<'a, Expression<'a>>,
}

/// `arguments` is a structural field, not a recursable one: diffing
/// `new`/`call` argument lists is an explicit non-goal, so `arguments` is
/// compared element-by-element up front as part of the structural mismatch
/// check, never handed to the List Differ.
#[derive(Debug, PartialEq, Serialize)]
pub struct CallExpression<'a> {
    pub callee: Box<'a, Expression<'a>>,
    pub arguments: Sequence<'a, Expression<'a>>,
    pub right_parenthesis: Span,
    pub optional: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NewExpression<'a> {
    pub new_keyword: Span,
    pub callee: Box<'a, Expression<'a>>,
    pub arguments: Sequence<'a, Expression<'a>>,
    pub right_parenthesis: Span,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MemberExpression<'a> {
    pub object: Box<'a, Expression<'a>>,
    pub property: PropertyKey<'a>,
    pub computed: bool,
    pub optional: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SequenceExpression<'a> {
    pub expressions: Sequence<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SpreadElement<'a> {
    pub dot_dot_dot: Span,
    pub argument: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AwaitExpression<'a> {
    pub await_keyword: Span,
    pub argument: Box<'a, Expression<'a>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct YieldExpression<'a> {
    pub yield_keyword: Span,
    pub argument: Option<Box<'a, Expression<'a>>>,
    pub delegate: bool,
}

impl HasSpan for Expression<'_> {
    fn span(&self) -> Span {
        match self {
            Expression::Identifier(inner) => inner.span(),
            Expression::Literal(inner) => inner.span(),
            Expression::Array(inner) => inner.span(),
            Expression::Object(inner) => inner.span(),
            Expression::Function(inner) => inner.span(),
            Expression::ArrowFunction(inner) => inner.span(),
            Expression::Class(inner) => inner.span(),
            Expression::Unary(inner) => inner.span(),
            Expression::Update(inner) => inner.span(),
            Expression::Binary(inner) => inner.span(),
            Expression::Logical(inner) => inner.span(),
            Expression::Assignment(inner) => inner.span(),
            Expression::Conditional(inner) => inner.span(),
            Expression::Call(inner) => inner.span(),
            Expression::New(inner) => inner.span(),
            Expression::Member(inner) => inner.span(),
            Expression::Sequence(inner) => inner.span(),
            Expression::This(span) | Expression::Super(span) => *span,
            Expression::Spread(inner) => inner.span(),
            Expression::Await(inner) => inner.span(),
            Expression::Yield(inner) => inner.span(),
        }
    }
}

impl HasSpan for ArrayExpression<'_> {
    fn span(&self) -> Span {
        self.left_bracket.join(self.right_bracket)
    }
}

impl HasSpan for UnaryExpression<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for UpdateExpression<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for BinaryExpression<'_> {
    fn span(&self) -> Span {
        self.left.span().join(self.right.span())
    }
}

impl HasSpan for LogicalExpression<'_> {
    fn span(&self) -> Span {
        self.left.span().join(self.right.span())
    }
}

impl HasSpan for AssignmentExpression<'_> {
    fn span(&self) -> Span {
        self.left.span().join(self.right.span())
    }
}

impl HasSpan for ConditionalExpression<'_> {
    fn span(&self) -> Span {
        self.test.span().join(self.alternate.span())
    }
}

impl HasSpan for CallExpression<'_> {
    fn span(&self) -> Span {
        self.callee.span().join(self.right_parenthesis)
    }
}

impl HasSpan for NewExpression<'_> {
    fn span(&self) -> Span {
        self.new_keyword.join(self.right_parenthesis)
    }
}

impl HasSpan for MemberExpression<'_> {
    fn span(&self) -> Span {
        self.object.span().join(self.property.span())
    }
}

impl HasSpan for SequenceExpression<'_> {
    fn span(&self) -> Span {
        match (self.expressions.first_span(), self.expressions.last_span()) {
            (Some(first), Some(last)) => first.join(last),
            _ => Span::new(flow_diff_span::Position::dummy(), flow_diff_span::Position::dummy()),
        }
    }
}

impl HasSpan for SpreadElement<'_> {
    fn span(&self) -> Span {
        self.dot_dot_dot.join(self.argument.span())
    }
}

impl HasSpan for AwaitExpression<'_> {
    fn span(&self) -> Span {
        self.await_keyword.join(self.argument.span())
    }
}

impl HasSpan for YieldExpression<'_> {
    fn span(&self) -> Span {
        self.argument.as_ref().map_or(self.yield_keyword, |arg| self.yield_keyword.join(arg.span()))
    }
}
