use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a single source string.
///
/// Every call to [`Lexer::next_token`] advances the cursor past exactly one
/// token. Once the input is exhausted the lexer keeps returning `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    input: String,
    /// Byte index of `current`
    position: usize,
    /// Byte index just after `current`
    next_position: usize,
    /// Character under examination, `None` past the end of input
    current: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            input: source.to_string(),
            position: 0,
            next_position: 0,
            current: None,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn read_char(&mut self) {
        self.position = self.next_position;
        self.current = self.input[self.position..].chars().next();
        self.next_position = self.position + self.current.map_or(0, char::len_utf8);
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.next_position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Consumes the current character as a token of `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let value = self.input[self.position..self.next_position].to_string();
        self.read_char();

        MK_TOKEN!(kind, value, MK_SPAN!(start, self.position, self.file))
    }

    /// Consumes the current character, plus a following `=` when there is one.
    fn with_equals(&mut self, combined: TokenKind, alone: TokenKind) -> Token {
        if self.peek_char() == Some('=') {
            let start = self.position;
            self.read_char();
            self.read_char();

            let value = self.input[start..self.position].to_string();
            MK_TOKEN!(combined, value, MK_SPAN!(start, self.position, self.file))
        } else {
            self.single(alone)
        }
    }

    /// Consumes the greedy match of `pattern` at the cursor.
    fn run(&mut self, pattern: &Regex) -> (usize, String) {
        let start = self.position;
        let len = pattern
            .find(&self.input[start..])
            .map_or(0, |matched| matched.end());

        while self.position < start + len {
            self.read_char();
        }

        (start, self.input[start..self.position].to_string())
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current else {
            return MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                MK_SPAN!(self.position, self.position, self.file)
            );
        };

        match ch {
            '=' => self.with_equals(TokenKind::Equal, TokenKind::Assign),
            '!' => self.with_equals(TokenKind::NotEqual, TokenKind::Bang),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '/' => self.single(TokenKind::Slash),
            '*' => self.single(TokenKind::Asterisk),
            '<' => self.single(TokenKind::LessThan),
            '>' => self.single(TokenKind::GreaterThan),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let (start, word) = self.run(&WORD_PATTERN);
                MK_TOKEN!(
                    lookup_ident(&word),
                    word,
                    MK_SPAN!(start, self.position, self.file)
                )
            }
            c if c.is_ascii_digit() => {
                let (start, number) = self.run(&NUMBER_PATTERN);
                MK_TOKEN!(
                    TokenKind::IntegerLiteral,
                    number,
                    MK_SPAN!(start, self.position, self.file)
                )
            }
            _ => self.single(TokenKind::Illegal),
        }
    }
}

/// Drains a fresh lexer over `source`.
///
/// The returned vector always ends with exactly one `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return tokens;
        }
    }
}
