//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic problems
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
