//! Lexical analysis module.
//!
//! This module contains the hand-written lexer that converts source text
//! into tokens one call at a time. It handles:
//!
//! - Keyword and single-character lookup tables
//! - Identifier and integer literal scanning
//! - One-character lookahead for `==` and `!=`
//! - Whitespace skipping between tokens

pub mod lexer;
pub mod tokens;
