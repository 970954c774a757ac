//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of the same source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` (byte offsets) inside `$file`.
/// Offsets past `u32::MAX` saturate.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer.position, lexer.next_position, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position(u32::try_from($start).unwrap_or(u32::MAX), Rc::clone(&$file)),
            end: Position(u32::try_from($end).unwrap_or(u32::MAX), Rc::clone(&$file)),
        }
    };
}
