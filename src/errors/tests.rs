//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

fn illegal(character: char, offset: usize) -> Error {
    Error::new(
        ErrorImpl::IllegalCharacter { character },
        Position(offset, Rc::new("test.lang".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = illegal('@', 10);

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_kind(), &ErrorImpl::IllegalCharacter { character: '@' });
}

#[test]
fn test_error_position() {
    let error = illegal('#', 42);

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_error_tip() {
    assert_eq!(illegal('@', 0).get_tip(), "`@` does not start any token");
}

#[test]
fn test_error_tip_escapes_control_characters() {
    assert_eq!(illegal('\0', 0).get_tip(), "`\\0` does not start any token");
}

#[test]
fn test_error_display() {
    assert_eq!(illegal('$', 7).to_string(), "illegal character: '$' at test.lang:7");
}
