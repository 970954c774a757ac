//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens on demand for the parser. It handles:
//!
//! - Single and two-character operators and delimiters
//! - Recognition of keywords, identifiers and integer literals
//! - Token position tracking for error reporting
//! - Illegal characters, reported as tokens rather than failures

pub mod lexer;
pub mod tokens;
