use crate::ast::{Arg, Call, Program};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    /// Why tokenizing stopped early, if it did. Reported once the parser
    /// runs off the end of `tokens`.
    lex_error: Option<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0, lex_error: None }
    }

    /// Parser over the output of [`Lexer::tokenize_partial`].
    pub fn with_lex_error(tokens: Vec<TokenWithPos>, lex_error: Option<ParseError>) -> Self {
        Self { tokens, pos: 0, lex_error }
    }

    /// Prefers the lexer's error when `e` only happened because the token
    /// stream was cut short.
    fn settle(&mut self, e: ParseError) -> ParseError {
        if self.pos >= self.tokens.len() {
            if let Some(lex) = self.lex_error.take() {
                return lex;
            }
        }
        e
    }

    fn current_col(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.col)
            .unwrap_or(1)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.current_col())
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        let col = self.current_col();
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(ParseError::new(format!("expected {}, got {:?}", what, tok), col)),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let col = self.current_col();
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(ParseError::new(format!("expected {:?}, got {:?}", expected, got), col))
        }
    }

    // ── Program ───────────────────────────────────────────────────────────

    /// Parse `call (';' call)* ';'?`. Empty segments between separators are skipped.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        match self.parse_program_partial() {
            (program, None) => Ok(program),
            (_, Some(e)) => Err(e),
        }
    }

    /// Like [`parse_program`](Self::parse_program), but stops at the first
    /// error and returns the calls parsed before it alongside the error.
    pub fn parse_program_partial(&mut self) -> (Program, Option<ParseError>) {
        let mut calls = Vec::new();
        let mut composite = false;

        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Semi => {
                    self.advance();
                    composite = true;
                }
                _ => {
                    match self.parse_call() {
                        Ok(call) => calls.push(call),
                        Err(e) => {
                            let e = self.settle(e);
                            return (Program { calls, composite }, Some(e));
                        }
                    }
                    match self.peek() {
                        Token::Semi | Token::Eof => {}
                        tok => {
                            let e = self.err(format!(
                                "expected ';' or end of input after ')', got {:?}",
                                tok
                            ));
                            return (Program { calls, composite }, Some(e));
                        }
                    }
                }
            }
        }

        let err = match self.lex_error.take() {
            Some(e) => Some(e),
            None if calls.is_empty() => Some(self.err("empty shape description")),
            None => None,
        };
        (Program { calls, composite }, err)
    }

    // ── Call ──────────────────────────────────────────────────────────────

    pub fn parse_call(&mut self) -> Result<Call, ParseError> {
        let name = self.expect_ident("shape name")?;
        self.expect_token(&Token::LParen)?;

        let mut args = Vec::new();
        loop {
            match self.peek() {
                Token::RParen => { self.advance(); break; }
                Token::Eof => return Err(self.err(format!("unclosed '(' in {}()", name))),
                Token::Ident(_) => {
                    args.push(self.parse_arg()?);
                    match self.peek() {
                        Token::Comma => { self.advance(); }
                        Token::RParen => {}
                        tok => {
                            return Err(self.err(format!("expected ',' or ')', got {:?}", tok)));
                        }
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} in argument list, expected key=value",
                        tok
                    )));
                }
            }
        }

        Ok(Call { name, args })
    }

    // ── Arg ───────────────────────────────────────────────────────────────

    fn parse_arg(&mut self) -> Result<Arg, ParseError> {
        let key = self.expect_ident("argument name")?;
        self.expect_token(&Token::Eq)?;
        match self.advance() {
            Token::Value(value) => Ok(Arg { key, value }),
            tok => Err(self.err(format!("expected a value, got {:?}", tok))),
        }
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a complete shape description, single or `;`-separated.
pub fn parse_program(src: &str) -> Result<Program, ParseError> {
    match parse_program_partial(src) {
        (program, None) => Ok(program),
        (_, Some(e)) => Err(e),
    }
}

/// Parse as much of a description as is valid.
///
/// Returns every call before the first lexical or syntax error, plus that
/// error. `Program::composite` reflects the separators seen before it.
pub fn parse_program_partial(src: &str) -> (Program, Option<ParseError>) {
    let (tokens, lex_error) = Lexer::new(src).tokenize_partial();
    Parser::with_lex_error(tokens, lex_error).parse_program_partial()
}

/// Parse exactly one `name(key=value, ...)` expression.
pub fn parse_call(src: &str) -> Result<Call, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    let mut parser = Parser::new(tokens);
    let call = parser.parse_call()?;
    parser.expect_token(&Token::Eof)?;
    Ok(call)
}
