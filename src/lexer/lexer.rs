use std::{fmt::Display, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{lookup_char, lookup_ident, Token};

/// Scanning state over an owned source text.
///
/// `position` is the character under the cursor and `read_position` the next
/// one to read. `current` is `None` once the cursor has run off the end.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    position: usize,
    read_position: usize,
    current: Option<char>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let source: String = source.into();

        let mut lexer = Lexer {
            source: source.chars().collect(),
            position: 0,
            read_position: 0,
            current: None,
        };
        lexer.read_char();

        debug!(chars = lexer.source.len(), "created lexer");
        lexer
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn read_position(&self) -> usize {
        self.read_position
    }

    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    fn read_char(&mut self) {
        self.current = self.source.get(self.read_position).copied();
        // Once past the end, hold the cursor at the source length.
        self.position = self.read_position.min(self.source.len());
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.position;
        while self.current.is_some_and(accept) {
            self.read_char();
        }

        self.source[start..self.position].iter().collect()
    }

    fn read_identifier(&mut self) -> String {
        self.read_while(is_letter)
    }

    fn read_number(&mut self) -> String {
        self.read_while(is_digit)
    }

    pub fn next_token(&mut self) -> Token {
        self.next_positioned().1
    }

    /// Like [`Lexer::next_token`], also returning the character index the
    /// token starts at.
    pub fn next_positioned(&mut self) -> (usize, Token) {
        self.skip_whitespace();
        let start = self.position;

        let token = if let Some(token) = self.current.and_then(lookup_char) {
            token
        } else {
            match self.current {
                Some('=') => {
                    if self.peek_char() == Some('=') {
                        self.read_char();
                        Token::Equal
                    } else {
                        Token::Assign
                    }
                }
                Some('!') => {
                    if self.peek_char() == Some('=') {
                        self.read_char();
                        Token::NotEqual
                    } else {
                        Token::Bang
                    }
                }
                None => Token::Eof,
                // Scans leave the cursor one past the token, so no trailing advance.
                Some(c) if is_letter(c) => {
                    let token = lookup_ident(&self.read_identifier());
                    trace!(start, %token, "scanned word");
                    return (start, token);
                }
                Some(c) if is_digit(c) => {
                    let token = Token::Int(self.read_number());
                    trace!(start, %token, "scanned number");
                    return (start, token);
                }
                Some(_) => Token::Illegal,
            }
        };

        self.read_char();
        trace!(start, %token, "read token");
        (start, token)
    }
}

impl Display for Lexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexer: input='{}', position={}, readPosition={}, char=",
            self.source.iter().collect::<String>(),
            self.position,
            self.read_position
        )?;

        match self.current {
            Some(c) => write!(f, "'{}'", c),
            None => write!(f, "<eof>"),
        }
    }
}

/// Yields tokens up to and including the first [`Token::Eof`].
pub struct Tokens {
    lexer: Lexer,
    finished: bool,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.lexer.next_token();
        self.finished = token == Token::Eof;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens {}

impl IntoIterator for Lexer {
    type Item = Token;
    type IntoIter = Tokens;

    fn into_iter(self) -> Tokens {
        Tokens {
            lexer: self,
            finished: false,
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_numeric()
}

pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).into_iter().collect();
    debug!(count = tokens.len(), "tokenized source");
    tokens
}

/// Tokenizes `source`, failing on the first character that starts no token.
pub fn tokenize_strict(
    source: impl Into<String>,
    file: Option<String>,
) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let (start, token) = lex.next_positioned();

        match token {
            Token::Illegal => {
                // An illegal token always covers exactly one character.
                let character = lex.source[start];
                debug!(start, %character, "illegal character");
                return Err(Error::new(
                    ErrorImpl::IllegalCharacter { character },
                    Position(start, Rc::clone(&file_name)),
                ));
            }
            Token::Eof => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    debug!(count = tokens.len(), file = %file_name, "tokenized source");
    Ok(tokens)
}
