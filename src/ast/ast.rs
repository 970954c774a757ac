use std::fmt::{self, Display};

use crate::Span;

use super::{
    expressions::{
        Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
        IntegerLiteral, PrefixExpression,
    },
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Shared by every node of the tree. `Display` renders the node back to
/// source-equivalent text.
pub trait Node: Display {
    /// Returns the literal of the token that defines this node.
    fn token_literal(&self) -> &str;
    /// Returns the span of the defining token.
    fn get_span(&self) -> &Span;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Statement::Let(stmt) => stmt.get_span(),
            Statement::Return(stmt) => stmt.get_span(),
            Statement::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Boolean(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
            Expression::If(expr) => expr.token_literal(),
            Expression::Function(expr) => expr.token_literal(),
            Expression::Call(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expression::Identifier(expr) => expr.get_span(),
            Expression::Integer(expr) => expr.get_span(),
            Expression::Boolean(expr) => expr.get_span(),
            Expression::Prefix(expr) => expr.get_span(),
            Expression::Infix(expr) => expr.get_span(),
            Expression::If(expr) => expr.get_span(),
            Expression::Function(expr) => expr.get_span(),
            Expression::Call(expr) => expr.get_span(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => expr.fmt(f),
            Expression::Integer(expr) => expr.fmt(f),
            Expression::Boolean(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Infix(expr) => expr.fmt(f),
            Expression::If(expr) => expr.fmt(f),
            Expression::Function(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
        }
    }
}

/// Root of every tree the parser produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements, "")
    }
}

/// Writes `statements` back to back.
///
/// Expression statements render without their `;`, so one is inserted
/// whenever another statement follows.
pub(crate) fn write_statements(
    f: &mut fmt::Formatter<'_>,
    statements: &[Statement],
    separator: &str,
) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", stmt)?;

        if matches!(stmt, Statement::Expression(_)) && i + 1 < statements.len() {
            write!(f, ";")?;
        }
    }

    Ok(())
}
