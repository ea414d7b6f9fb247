//! Error types and error reporting.
//!
//! The lexer itself never fails; these types are used by callers that
//! decide an illegal character is fatal, and by the command line driver:
//!
//! - Error structures with source position information
//! - Error names and suggestions for display
//! - Caret-style rendering of the offending source line

pub mod errors;

#[cfg(test)]
mod tests;
