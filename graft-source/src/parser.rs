//! Recursive-descent parser for the declaration subset of Go.
//!
//! Struct-typed `type` declarations are parsed in full. Other top-level
//! declarations are skipped by balanced-delimiter scanning, which still
//! rejects unbalanced or misplaced delimiters.

use crate::{
    decl::{RawField, RawType, SourceFile, Span, StructDecl},
    error::SyntaxError,
    lexer::{Keyword, Token, TokenKind, tokenize},
};

type PResult<T> = Result<T, SyntaxError>;

pub(crate) fn parse(src: &str) -> PResult<SourceFile> {
    let tokens = tokenize(src)?;
    Parser {
        src,
        tokens,
        pos: 0,
    }
    .source_file()
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    // =========================================================================
    // Token cursor
    // =========================================================================

    fn peek(&self) -> Token {
        self.nth(0)
    }

    fn nth(&self, n: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + n).min(last)]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn bump(&mut self) -> Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Token> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn text(&self, span: Span) -> &'a str {
        &self.src[span.start..span.end]
    }

    /// End offset of the most recently consumed token.
    fn prev_end(&self) -> usize {
        match self.pos {
            0 => 0,
            n => self.tokens[n - 1].span.end,
        }
    }

    fn describe(&self, token: Token) -> String {
        match token.kind {
            TokenKind::Eof => "EOF".to_string(),
            TokenKind::Semicolon if token.implicit => "newline".to_string(),
            _ => format!("'{}'", self.text(token.span)),
        }
    }

    fn unexpected(&self, what: &str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::new(
            format!("expected {}, found {}", what, self.describe(token)),
            token.span,
        )
    }

    /// Accept a declaration terminator: `;`, or nothing before `)` / EOF.
    fn end_of_spec(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Semicolon) || self.at(TokenKind::RParen) || self.at(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected("';' or newline"))
        }
    }

    // =========================================================================
    // Top level
    // =========================================================================

    fn source_file(mut self) -> PResult<SourceFile> {
        self.expect(TokenKind::Keyword(Keyword::Package), "'package'")?;
        let name = self.expect(TokenKind::Ident, "package name")?;
        let package = self.text(name.span).to_string();
        self.end_of_spec()?;

        while self.eat(TokenKind::Keyword(Keyword::Import)) {
            self.import_decl()?;
        }

        let mut structs = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon => {
                    self.bump();
                }
                TokenKind::Keyword(Keyword::Type) => {
                    self.bump();
                    self.type_decl(&mut structs)?;
                }
                TokenKind::Keyword(Keyword::Func | Keyword::Var | Keyword::Const) => {
                    self.skip_decl()?;
                }
                TokenKind::Keyword(Keyword::Import) => {
                    let token = self.peek();
                    return Err(SyntaxError::new(
                        "imports must appear before other declarations",
                        token.span,
                    ));
                }
                _ => {
                    let token = self.peek();
                    return Err(SyntaxError::new(
                        format!(
                            "non-declaration statement outside function body, found {}",
                            self.describe(token)
                        ),
                        token.span,
                    ));
                }
            }
        }

        Ok(SourceFile { package, structs })
    }

    fn import_decl(&mut self) -> PResult<()> {
        if self.eat(TokenKind::LParen) {
            while !self.eat(TokenKind::RParen) {
                self.import_spec()?;
                self.end_of_spec()?;
            }
            self.end_of_spec()
        } else {
            self.import_spec()?;
            self.end_of_spec()
        }
    }

    fn import_spec(&mut self) -> PResult<()> {
        if self.at(TokenKind::Ident) || self.at(TokenKind::Dot) {
            self.bump();
        }
        self.expect(TokenKind::String, "import path")?;
        Ok(())
    }

    /// Skip a `func`, `var` or `const` declaration up to its terminating `;`.
    fn skip_decl(&mut self) -> PResult<()> {
        let mut open: Vec<Token> = Vec::new();
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => open.push(token),
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    let matches = open.pop().is_some_and(|o| {
                        matches!(
                            (o.kind, token.kind),
                            (TokenKind::LParen, TokenKind::RParen)
                                | (TokenKind::LBracket, TokenKind::RBracket)
                                | (TokenKind::LBrace, TokenKind::RBrace)
                        )
                    });
                    if !matches {
                        return Err(SyntaxError::new(
                            format!("unexpected {}", self.describe(token)),
                            token.span,
                        ));
                    }
                }
                TokenKind::Semicolon if open.is_empty() => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Eof => {
                    return match open.last() {
                        Some(o) => Err(SyntaxError::new(
                            format!("{} is never closed", self.describe(*o)),
                            o.span,
                        )),
                        None => Ok(()),
                    };
                }
                _ => {}
            }
            self.bump();
        }
    }

    // =========================================================================
    // Type declarations
    // =========================================================================

    fn type_decl(&mut self, structs: &mut Vec<StructDecl>) -> PResult<()> {
        if self.eat(TokenKind::LParen) {
            while !self.eat(TokenKind::RParen) {
                if self.eat(TokenKind::Semicolon) {
                    continue;
                }
                if let Some(decl) = self.type_spec()? {
                    structs.push(decl);
                }
                self.end_of_spec()?;
            }
        } else if let Some(decl) = self.type_spec()? {
            structs.push(decl);
        }
        self.end_of_spec()
    }

    fn type_spec(&mut self) -> PResult<Option<StructDecl>> {
        let name = self.expect(TokenKind::Ident, "type name")?;

        // `[T any]` declares type parameters; `[]T` and `[N]T` start an array type.
        if self.at(TokenKind::LBracket)
            && self.nth(1).kind == TokenKind::Ident
            && self.nth(2).kind != TokenKind::RBracket
        {
            self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket)?;
        }

        let alias = self.eat(TokenKind::Assign);
        let struct_start = self.at(TokenKind::Keyword(Keyword::Struct));
        let (ty, _) = self.parse_type()?;

        match ty {
            RawType::Composite(fields) if struct_start && !alias => Ok(Some(StructDecl {
                name: self.text(name.span).to_string(),
                fields,
                span: name.span,
            })),
            _ => Ok(None),
        }
    }

    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> PResult<Span> {
        let first = self.expect(open, "opening delimiter")?;
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.bump();
            match token.kind {
                k if k == open => depth += 1,
                k if k == close => depth -= 1,
                TokenKind::Eof => {
                    return Err(SyntaxError::new(
                        format!("{} is never closed", self.describe(first)),
                        first.span,
                    ));
                }
                _ => {}
            }
        }
        Ok(Span::new(first.span.start, self.prev_end()))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> PResult<(RawType, Span)> {
        let start = self.peek().span.start;
        let ty = match self.peek().kind {
            TokenKind::Ident => RawType::Named(self.type_name()?),
            TokenKind::Star => {
                self.bump();
                RawType::pointer(self.parse_type()?.0)
            }
            TokenKind::LBracket => {
                self.bump();
                if !self.eat(TokenKind::RBracket) {
                    // Fixed-size arrays are read as slices; the length is not kept.
                    self.skip_array_length()?;
                }
                RawType::slice(self.parse_type()?.0)
            }
            TokenKind::Keyword(Keyword::Map) => {
                self.bump();
                self.expect(TokenKind::LBracket, "'['")?;
                let (key, _) = self.parse_type()?;
                self.expect(TokenKind::RBracket, "']'")?;
                let (value, _) = self.parse_type()?;
                RawType::map(key, value)
            }
            TokenKind::Keyword(Keyword::Struct) => {
                self.bump();
                RawType::Composite(self.field_list()?)
            }
            TokenKind::LParen => {
                self.bump();
                let (inner, _) = self.parse_type()?;
                self.expect(TokenKind::RParen, "')'")?;
                inner
            }
            TokenKind::Keyword(Keyword::Chan) | TokenKind::Arrow => {
                self.chan_type()?;
                RawType::Named(self.text(Span::new(start, self.prev_end())).to_string())
            }
            TokenKind::Keyword(Keyword::Func) => {
                self.bump();
                self.signature()?;
                RawType::Named(self.text(Span::new(start, self.prev_end())).to_string())
            }
            TokenKind::Keyword(Keyword::Interface) => {
                self.bump();
                self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
                RawType::Named(self.text(Span::new(start, self.prev_end())).to_string())
            }
            _ => return Err(self.unexpected("type")),
        };
        Ok((ty, Span::new(start, self.prev_end())))
    }

    /// `Name`, `pkg.Name`, optionally instantiated as `Name[T, U]`.
    fn type_name(&mut self) -> PResult<String> {
        let first = self.expect(TokenKind::Ident, "type name")?;
        if self.eat(TokenKind::Dot) {
            self.expect(TokenKind::Ident, "qualified type name")?;
        }
        if self.at(TokenKind::LBracket) {
            self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket)?;
        }
        Ok(self
            .text(Span::new(first.span.start, self.prev_end()))
            .to_string())
    }

    fn skip_array_length(&mut self) -> PResult<()> {
        let mut depth = 0usize;
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::RBracket if depth == 0 => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::LBracket | TokenKind::LParen => depth += 1,
                TokenKind::RBracket | TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Semicolon | TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof => {
                    return Err(self.unexpected("']'"));
                }
                _ => {}
            }
            self.bump();
        }
    }

    fn chan_type(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Arrow) {
            self.expect(TokenKind::Keyword(Keyword::Chan), "'chan'")?;
        } else {
            self.expect(TokenKind::Keyword(Keyword::Chan), "'chan'")?;
            self.eat(TokenKind::Arrow);
        }
        self.parse_type()?;
        Ok(())
    }

    /// Parameters and optional result of a function type.
    fn signature(&mut self) -> PResult<()> {
        self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
        if self.at(TokenKind::LParen) {
            self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
        } else if self.starts_type() {
            self.parse_type()?;
        }
        Ok(())
    }

    fn starts_type(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Ident
                | TokenKind::Star
                | TokenKind::LBracket
                | TokenKind::Arrow
                | TokenKind::Keyword(
                    Keyword::Map
                        | Keyword::Struct
                        | Keyword::Chan
                        | Keyword::Func
                        | Keyword::Interface
                )
        )
    }

    // =========================================================================
    // Struct fields
    // =========================================================================

    fn field_list(&mut self) -> PResult<Vec<RawField>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut fields = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            self.field_decl(&mut fields)?;
            if !self.at(TokenKind::RBrace) {
                self.expect(TokenKind::Semicolon, "';', newline or '}'")?;
            }
        }
        Ok(fields)
    }

    fn field_decl(&mut self, fields: &mut Vec<RawField>) -> PResult<()> {
        let start = self.peek().span.start;

        if self.embedded_ahead() {
            let pointer = self.eat(TokenKind::Star);
            let spelling = self.type_name()?;
            let name = embedded_field_name(&spelling);
            let ty = if pointer {
                RawType::pointer(RawType::Named(spelling))
            } else {
                RawType::Named(spelling)
            };
            let tag = self.tag();
            fields.push(RawField {
                name,
                ty,
                embedded: true,
                tag,
                span: Span::new(start, self.prev_end()),
            });
            return Ok(());
        }

        let mut names = vec![self.expect(TokenKind::Ident, "field name")?];
        while self.eat(TokenKind::Comma) {
            names.push(self.expect(TokenKind::Ident, "field name")?);
        }
        let (ty, _) = self.parse_type()?;
        let tag = self.tag();
        let span = Span::new(start, self.prev_end());

        for name in names {
            fields.push(RawField {
                name: self.text(name.span).to_string(),
                ty: ty.clone(),
                embedded: false,
                tag: tag.clone(),
                span,
            });
        }
        Ok(())
    }

    /// Whether the next field is embedded (`T`, `*T`, `pkg.T`, `T[int]`) rather
    /// than named.
    fn embedded_ahead(&self) -> bool {
        match self.peek().kind {
            TokenKind::Star => true,
            TokenKind::Ident => match self.nth(1).kind {
                TokenKind::Dot | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::String => {
                    true
                }
                // `Base[int]` ends the field after its brackets; `Buf [4]byte` does not.
                TokenKind::LBracket => {
                    let close = self.matching_bracket(1);
                    close.is_some_and(|n| {
                        matches!(
                            self.nth(n + 1).kind,
                            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::String
                        )
                    })
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Lookahead offset of the `]` closing the `[` at offset `open`.
    fn matching_bracket(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut n = open;
        loop {
            match self.nth(n).kind {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(n);
                    }
                }
                TokenKind::Eof => return None,
                _ => {}
            }
            n += 1;
        }
    }

    fn tag(&mut self) -> Option<String> {
        if self.at(TokenKind::String) {
            let token = self.bump();
            Some(self.text(token.span).to_string())
        } else {
            None
        }
    }
}

/// `*pkg.Base[T]` embeds a field named `Base`.
fn embedded_field_name(spelling: &str) -> String {
    let base = spelling.split('[').next().unwrap_or(spelling);
    base.rsplit('.').next().unwrap_or(base).to_string()
}
