//! Integration tests for the public tokenizer API.
//!
//! These tests drive the lexer the way a consumer would: construct it once,
//! pull tokens until `Eof`, and check properties that must hold for any input.

use proptest::prelude::*;
use tokenizer::lexer::{
    lexer::{tokenize, tokenize_strict, Lexer},
    tokens::Token,
};

const SAMPLE: &str = "let five = 5;
let ten = 10;

if (five != ten) {
    return true;
};

if (five == ten) {
    return false;
};
";

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn int(digits: &str) -> Token {
    Token::Int(digits.to_string())
}

#[test]
fn test_sample_program() {
    let tokens = tokenize(SAMPLE);

    #[rustfmt::skip]
    let expected = vec![
        Token::Let, ident("five"), Token::Assign, int("5"), Token::Semicolon,
        Token::Let, ident("ten"), Token::Assign, int("10"), Token::Semicolon,
        Token::If, Token::LParen, ident("five"), Token::NotEqual, ident("ten"), Token::RParen,
        Token::LBrace, Token::Return, Token::True, Token::Semicolon,
        Token::RBrace, Token::Semicolon,
        Token::If, Token::LParen, ident("five"), Token::Equal, ident("ten"), Token::RParen,
        Token::LBrace, Token::Return, Token::False, Token::Semicolon,
        Token::RBrace, Token::Semicolon,
        Token::Eof,
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_function_literal() {
    let tokens = tokenize("let add = fn(x, y) { x + y; };");

    #[rustfmt::skip]
    let expected = vec![
        Token::Let, ident("add"), Token::Assign, Token::Function, Token::LParen,
        ident("x"), Token::Comma, ident("y"), Token::RParen, Token::LBrace,
        ident("x"), Token::Plus, ident("y"), Token::Semicolon, Token::RBrace,
        Token::Semicolon, Token::Eof,
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_operator_soup() {
    let tokens = tokenize("!-/*5; 5 < 10 > 5;");

    #[rustfmt::skip]
    let expected = vec![
        Token::Bang, Token::Minus, Token::Slash, Token::Asterisk, int("5"), Token::Semicolon,
        int("5"), Token::LessThan, int("10"), Token::GreaterThan, int("5"), Token::Semicolon,
        Token::Eof,
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_strict_matches_lenient_without_illegal() {
    let strict = tokenize_strict(SAMPLE, Some("sample.lang".to_string())).unwrap();
    assert_eq!(strict, tokenize(SAMPLE));
}

#[test]
fn test_strict_renders_diagnostic() {
    let source = "let x = 1;\nlet y = %;\n";
    let error = tokenize_strict(source, Some("bad.lang".to_string())).unwrap_err();
    let rendered = tokenizer::render_error(&error, source);

    assert!(rendered.starts_with("Error: IllegalCharacter"));
    assert!(rendered.contains("-> bad.lang"));
    assert!(rendered.contains("2 | let y = %;"));
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,4}"
}

fn token_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,8}",
        "[0-9]{1,8}",
        "(==|!=|=|!|\\(|\\)|,|\\+|\\{|\\}|-|/|\\*|<|>|;|@|#|\\$)",
    ]
}

proptest! {
    #[test]
    fn test_property_terminates(input in any::<String>()) {
        let mut lexer = Lexer::new(input.as_str());
        let limit = input.chars().count() + 1;

        let mut calls = 0;
        while lexer.next_token() != Token::Eof {
            calls += 1;
            prop_assert!(calls <= limit);
        }
    }

    #[test]
    fn test_property_eof_is_sticky(input in any::<String>()) {
        let mut lexer = Lexer::new(input.as_str());
        while lexer.next_token() != Token::Eof {}

        for _ in 0..3 {
            prop_assert_eq!(lexer.next_token(), Token::Eof);
        }
    }

    #[test]
    fn test_property_whitespace_invariance(
        words in prop::collection::vec(token_text(), 1..12),
        gaps in prop::collection::vec(whitespace(), 12),
    ) {
        // Adjacent words/numbers/`=` would merge without a separator, so the
        // compact form still uses a single space.
        let compact = words.join(" ");
        let mut spaced = String::new();
        for (word, gap) in words.iter().zip(gaps.iter()) {
            spaced.push_str(gap);
            spaced.push_str(word);
        }
        spaced.push_str(&gaps[words.len() % gaps.len()]);

        prop_assert_eq!(tokenize(compact), tokenize(spaced));
    }

    #[test]
    fn test_property_int_text_fidelity(digits in "[0-9]{1,40}") {
        prop_assert_eq!(tokenize(digits.as_str()), vec![Token::Int(digits.clone()), Token::Eof]);
    }

    #[test]
    fn test_property_identifier_fidelity(word in "[a-zA-Z]{1,20}") {
        let tokens = tokenize(word.as_str());
        prop_assert_eq!(tokens.len(), 2);

        match &tokens[0] {
            Token::Identifier(name) => prop_assert_eq!(name, &word),
            keyword => prop_assert!(keyword.is_keyword()),
        }
    }
}
