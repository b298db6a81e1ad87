//! Go tokenizer with automatic semicolon insertion.
//!
//! Only the token classes the declaration parser cares about are
//! distinguished; all remaining operators collapse into [`TokenKind::Operator`].

use crate::{decl::Span, error::SyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    fn from_ident(s: &str) -> Option<Self> {
        let kw = match s {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(kw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident,
    Keyword(Keyword),
    Number,
    Rune,
    String,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Dot,
    Ellipsis,
    Star,
    Assign,
    Arrow,
    IncDec,
    Operator,
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Semicolons inserted at line ends rather than written in the source.
    pub implicit: bool,
}

/// Longest operators first so greedy matching is correct.
const OPERATORS: &[&str] = &[
    "...", "<<=", ">>=", "&^=", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "(", ")", "[", "]", "{", "}", ",",
    ";", ".", "*", "=", "+", "-", "/", "%", "&", "|", "^", "<", ">", "!", "~", ":",
];

pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer {
        src,
        pos: 0,
        tokens: Vec::new(),
    }
    .run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn run(mut self) -> Result<Vec<Token>, SyntaxError> {
        loop {
            self.skip_trivia()?;

            let Some(c) = self.peek() else {
                self.insert_semicolon(self.pos, self.pos);
                self.push(TokenKind::Eof, self.pos);
                return Ok(self.tokens);
            };

            let start = self.pos;
            let kind = if c.is_alphabetic() || c == '_' {
                self.ident()
            } else if c.is_ascii_digit()
                || (c == '.' && self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()))
            {
                self.number()
            } else {
                match c {
                    '"' => self.string('"', "string literal not terminated")?,
                    '\'' => self.string('\'', "rune literal not terminated")?,
                    '`' => self.raw_string()?,
                    _ => self.operator()?,
                }
            };
            self.push(kind, start);
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.pos),
            implicit: false,
        });
    }

    /// Whether a line break after the last token terminates a statement.
    fn needs_semicolon(&self) -> bool {
        matches!(
            self.tokens.last().map(|t| t.kind),
            Some(
                TokenKind::Ident
                    | TokenKind::Number
                    | TokenKind::Rune
                    | TokenKind::String
                    | TokenKind::RParen
                    | TokenKind::RBracket
                    | TokenKind::RBrace
                    | TokenKind::IncDec
                    | TokenKind::Keyword(
                        Keyword::Break | Keyword::Continue | Keyword::Fallthrough | Keyword::Return
                    )
            )
        )
    }

    fn insert_semicolon(&mut self, start: usize, end: usize) {
        if self.needs_semicolon() {
            self.tokens.push(Token {
                kind: TokenKind::Semicolon,
                span: Span::new(start, end),
                implicit: true,
            });
        }
    }

    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.pos += 1;
                }
                '\n' => {
                    self.insert_semicolon(self.pos, self.pos + 1);
                    self.pos += 1;
                }
                '/' if self.peek_nth(1) == Some('/') => {
                    let rest = &self.src[self.pos..];
                    self.pos += rest.find('\n').unwrap_or(rest.len());
                }
                '/' if self.peek_nth(1) == Some('*') => {
                    let start = self.pos;
                    let Some(len) = self.src[start + 2..].find("*/") else {
                        return Err(SyntaxError::new(
                            "comment not terminated",
                            Span::new(start, self.src.len()),
                        ));
                    };
                    self.pos = start + 2 + len + 2;
                    // A general comment spanning lines acts like a newline.
                    if self.src[start..self.pos].contains('\n') {
                        self.insert_semicolon(start, self.pos);
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn ident(&mut self) -> TokenKind {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match Keyword::from_ident(&self.src[start..self.pos]) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident,
        }
    }

    fn number(&mut self) -> TokenKind {
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.bump();
            } else {
                break;
            }
        }
        TokenKind::Number
    }

    fn string(&mut self, quote: char, unterminated: &str) -> Result<TokenKind, SyntaxError> {
        let start = self.pos;
        self.bump();
        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(SyntaxError::new(unterminated, Span::new(start, self.pos)));
                }
                Some('\\') => {
                    self.bump();
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        Ok(if quote == '"' {
            TokenKind::String
        } else {
            TokenKind::Rune
        })
    }

    fn raw_string(&mut self) -> Result<TokenKind, SyntaxError> {
        let start = self.pos;
        let Some(len) = self.src[start + 1..].find('`') else {
            return Err(SyntaxError::new(
                "raw string literal not terminated",
                Span::new(start, self.src.len()),
            ));
        };
        self.pos = start + 1 + len + 1;
        Ok(TokenKind::String)
    }

    fn operator(&mut self) -> Result<TokenKind, SyntaxError> {
        let rest = &self.src[self.pos..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            let c = self.peek().unwrap_or_default();
            return Err(SyntaxError::new(
                format!("invalid character {:?}", c),
                Span::new(self.pos, self.pos + c.len_utf8()),
            ));
        };
        self.pos += op.len();
        Ok(match *op {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            "." => TokenKind::Dot,
            "..." => TokenKind::Ellipsis,
            "*" => TokenKind::Star,
            "=" => TokenKind::Assign,
            "<-" => TokenKind::Arrow,
            "++" | "--" => TokenKind::IncDec,
            _ => TokenKind::Operator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_semicolon_inserted_after_line_end() {
        assert_eq!(
            kinds("package main\n"),
            vec![
                TokenKind::Keyword(Keyword::Package),
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_no_semicolon_after_open_brace() {
        assert_eq!(
            kinds("struct {\n}"),
            vec![
                TokenKind::Keyword(Keyword::Struct),
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_implicit_flag() {
        let tokens = tokenize("x; y\n").unwrap();
        assert!(!tokens[1].implicit);
        assert!(tokens[3].implicit);
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            kinds("a // trailing\n/* block */ b"),
            vec![
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multiline_block_comment_acts_as_newline() {
        assert_eq!(
            kinds("a /* one\ntwo */ b"),
            vec![
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds(r#"1.5e-3 'x' "a\"b" `raw`"#),
            vec![
                TokenKind::Number,
                TokenKind::Rune,
                TokenKind::String,
                TokenKind::String,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_longest_operator_wins() {
        assert_eq!(
            kinds("<-chan ... :="),
            vec![
                TokenKind::Arrow,
                TokenKind::Keyword(Keyword::Chan),
                TokenKind::Ellipsis,
                TokenKind::Operator,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"abc\n").unwrap_err();
        assert_eq!(err.message, "string literal not terminated");
        assert_eq!(err.span.start, 0);
    }

    #[test]
    fn test_unterminated_comment() {
        let err = tokenize("a /* never closed").unwrap_err();
        assert_eq!(err.message, "comment not terminated");
    }

    #[test]
    fn test_invalid_character() {
        let err = tokenize("a @ b").unwrap_err();
        assert_eq!(err.message, "invalid character '@'");
        assert_eq!(err.span, Span::new(2, 3));
    }
}
