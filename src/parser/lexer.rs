//! Lexer (tokenizer) for propositional formulas
//!
//! Converts formula text into a flat [`Token`] stream consumed by the parser.
//! Spaces, tabs and newlines separate tokens but carry no meaning; every
//! other character must belong to a connective, a parenthesis, or a variable
//! name.

use super::ast::SourceLocation;
use log::debug;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Variable name: a maximal run of lowercase ASCII letters
    Variable(String, SourceLocation),

    // Connectives
    And(SourceLocation),     // &
    Or(SourceLocation),      // +
    Nand(SourceLocation),    // |
    Not(SourceLocation),     // ~
    Implies(SourceLocation), // =>
    Equiv(SourceLocation),   // <=>

    // Grouping
    LParen(SourceLocation), // (
    RParen(SourceLocation), // )

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Variable(_, loc)
            | Token::And(loc)
            | Token::Or(loc)
            | Token::Nand(loc)
            | Token::Not(loc)
            | Token::Implies(loc)
            | Token::Equiv(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(s, _) => write!(f, "variable '{}'", s),
            Token::And(_) => write!(f, "'&'"),
            Token::Or(_) => write!(f, "'+'"),
            Token::Nand(_) => write!(f, "'|'"),
            Token::Not(_) => write!(f, "'~'"),
            Token::Implies(_) => write!(f, "'=>'"),
            Token::Equiv(_) => write!(f, "'<=>'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for formula text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given formula string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        debug!("tokenized {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '&' => Ok(Token::And(loc)),
            '+' => Ok(Token::Or(loc)),
            '|' => Ok(Token::Nand(loc)),
            '~' => Ok(Token::Not(loc)),

            // The multi-character connectives have no shorter prefix form,
            // so their remaining characters are mandatory.
            '=' => {
                self.expect_char('>', "'='")?;
                Ok(Token::Implies(loc))
            }
            '<' => {
                self.expect_char('=', "'<'")?;
                self.expect_char('>', "'<='")?;
                Ok(Token::Equiv(loc))
            }

            // Variables
            'a'..='z' => Ok(self.variable(ch)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Consume the next character, which must be `expected`
    fn expect_char(
        &mut self,
        expected: char,
        after: &str,
    ) -> Result<(), LexError> {
        let loc = self.current_location();
        match self.advance() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(LexError {
                message: format!(
                    "Expected '{}' after {}, found '{}'",
                    expected, after, ch
                ),
                location: loc,
            }),
            None => Err(LexError {
                message: format!(
                    "Expected '{}' after {}, found end of input",
                    expected, after
                ),
                location: loc,
            }),
        }
    }

    /// Parse variable name
    fn variable(&mut self, first_char: char) -> Token {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let mut name = String::new();
        name.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_lowercase() {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Variable(name, loc)
    }

    /// Skip whitespace between tokens
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
