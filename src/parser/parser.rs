//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! a [`Lexer`] on demand and keeps two of them in view (`current` and
//! `peek`). Expressions are parsed with NUD/LED handlers looked up by token
//! kind; statements are dispatched in [`parse_stmt`].
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parser gives up on a
/// statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it owns its lexer and walks it forward exactly
/// once. Diagnostics recorded while parsing are read back with
/// [`Parser::errors`] or [`Parser::diagnostics`].
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// Token after `current`
    peek: Token,
    /// Diagnostics, in the order they were found
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser, priming both lookahead slots and building the
    /// handler tables.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a program. A statement that fails to parse is dropped,
    /// its error recorded, and parsing resumes at the next token. Input nested
    /// too deeply is skipped up to the next `;`.
    pub fn parse_program(&mut self) -> Program {
        self.errors.clear();
        self.depth = 0;

        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    if matches!(error.get_impl(), ErrorImpl::NestingTooDeep { .. }) {
                        self.skip_statement();
                    }
                    self.errors.push(error);
                }
            }

            self.advance();
        }

        program
    }

    /// Advances until the current token is `;` or `EOF`.
    fn skip_statement(&mut self) {
        while !self.current.is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF]) {
            self.advance();
        }
    }

    /// Messages for every error found by the last [`Parser::parse_program`].
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Structured errors found by the last [`Parser::parse_program`].
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances only if the peek token is `expected_kind`.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error positioned at
    /// the peek token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.get_peek_position(),
            ))
        }
    }

    /// Records one more level of expression nesting, failing once
    /// [`MAX_NESTING_DEPTH`] is reached. Every successful call must be paired
    /// with [`Parser::leave_nesting`].
    pub(super) fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the current token, `Lowest` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Binding power of the peek token, `Lowest` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub(super) fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub(super) fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Returns the start of the peek token.
    pub fn get_peek_position(&self) -> Position {
        self.peek.span.start.clone()
    }
}
