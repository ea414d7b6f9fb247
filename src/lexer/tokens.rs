use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("fn", Token::Function);
        map.insert("let", Token::Let);
        map.insert("if", Token::If);
        map.insert("else", Token::Else);
        map.insert("return", Token::Return);
        map.insert("true", Token::True);
        map.insert("false", Token::False);
        map
    };

    /// Characters that never start a two-character operator.
    pub static ref CHARACTERS: HashMap<char, Token> = {
        let mut map = HashMap::new();
        map.insert('(', Token::LParen);
        map.insert(')', Token::RParen);
        map.insert(',', Token::Comma);
        map.insert('+', Token::Plus);
        map.insert('{', Token::LBrace);
        map.insert('}', Token::RBrace);
        map.insert('-', Token::Minus);
        map.insert('/', Token::Slash);
        map.insert('*', Token::Asterisk);
        map.insert('<', Token::LessThan);
        map.insert('>', Token::GreaterThan);
        map.insert(';', Token::Semicolon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    Eof,
    Illegal,

    Identifier(String),
    Int(String),

    Assign,   // =
    Equal,    // ==
    Bang,     // !
    NotEqual, // !=

    Plus,
    Minus,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl Token {
    /// The variant name without any payload.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Eof => "Eof",
            Token::Illegal => "Illegal",
            Token::Identifier(_) => "Identifier",
            Token::Int(_) => "Int",
            Token::Assign => "Assign",
            Token::Equal => "Equal",
            Token::Bang => "Bang",
            Token::NotEqual => "NotEqual",
            Token::Plus => "Plus",
            Token::Minus => "Minus",
            Token::Asterisk => "Asterisk",
            Token::Slash => "Slash",
            Token::LessThan => "LessThan",
            Token::GreaterThan => "GreaterThan",
            Token::Comma => "Comma",
            Token::Semicolon => "Semicolon",
            Token::LParen => "LParen",
            Token::RParen => "RParen",
            Token::LBrace => "LBrace",
            Token::RBrace => "RBrace",
            Token::Function => "Function",
            Token::Let => "Let",
            Token::If => "If",
            Token::Else => "Else",
            Token::Return => "Return",
            Token::True => "True",
            Token::False => "False",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Function
                | Token::Let
                | Token::If
                | Token::Else
                | Token::Return
                | Token::True
                | Token::False
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}({})", self.kind_name(), name),
            Token::Int(digits) => write!(f, "{}({})", self.kind_name(), digits),
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}

/// Classifies identifier-shaped text as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> Token {
    if let Some(keyword) = KEYWORDS.get(ident) {
        keyword.clone()
    } else {
        Token::Identifier(String::from(ident))
    }
}

pub fn lookup_char(c: char) -> Option<Token> {
    CHARACTERS.get(&c).cloned()
}
