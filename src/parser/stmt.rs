use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. On exit the current token is the last
/// one belonging to the statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name = Identifier::new(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assign)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStatement { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Optional, so the last expression of a block can act as its value
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

/// Parses `{ ... }`. On entry the current token is `{`, on exit `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::RightBrace) {
        if parser.current_token_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RightBrace,
                    found: TokenKind::EOF,
                },
                parser.get_position(),
            ));
        }

        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStatement { token, statements })
}
