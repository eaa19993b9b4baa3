use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Shape or argument name.
    Ident(String),
    /// Argument value, raw or quoted. Always follows `=`.
    Value(String),
    // Punctuation
    LParen,
    RParen,
    Eq,
    Comma,
    Semi,
    // Sentinel
    Eof,
}

/// A token together with the 1-based column it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Tokenizer for shape descriptions.
///
/// The lexer is modal: the token right after `=` is always read as a value,
/// so raw values may contain spaces, `#`, `.` and anything else except the
/// delimiters `,` `)` `;`. Values containing delimiters must be quoted.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    col: usize,
    after_eq: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 1, after_eq: false }
    }

    pub fn tokenize(self) -> Result<Vec<TokenWithPos>, ParseError> {
        match self.tokenize_partial() {
            (tokens, None) => Ok(tokens),
            (_, Some(e)) => Err(e),
        }
    }

    /// Tokenizes up to the first error. The tokens before it are returned
    /// with the error; they are not followed by `Eof`.
    pub fn tokenize_partial(mut self) -> (Vec<TokenWithPos>, Option<ParseError>) {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(tok) => {
                    let eof = tok.token == Token::Eof;
                    tokens.push(tok);
                    if eof {
                        return (tokens, None);
                    }
                }
                Err(e) => return (tokens, Some(e)),
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Result<TokenWithPos, ParseError> {
        self.skip_whitespace();
        let col = self.col;

        if std::mem::take(&mut self.after_eq) {
            let token = match self.peek() {
                Some(q @ ('"' | '\'')) => self.lex_quoted(q)?,
                _ => self.lex_raw(),
            };
            return Ok(TokenWithPos { token, col });
        }

        let ch = match self.peek() {
            None => return Ok(TokenWithPos { token: Token::Eof, col }),
            Some(c) => c,
        };

        let token = match ch {
            '(' => { self.advance(); Token::LParen }
            ')' => { self.advance(); Token::RParen }
            ',' => { self.advance(); Token::Comma }
            ';' => { self.advance(); Token::Semi }
            '=' => {
                self.advance();
                self.after_eq = true;
                Token::Eq
            }
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_ident(),
            other => {
                return Err(ParseError::new(format!("unexpected character {:?}", other), col));
            }
        };
        Ok(TokenWithPos { token, col })
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }

    fn lex_raw(&mut self) -> Token {
        let start = self.pos;
        while !matches!(self.peek(), None | Some(',' | ')' | ';')) {
            self.advance();
        }
        Token::Value(self.src[start..self.pos].trim_end().to_string())
    }

    fn lex_quoted(&mut self, quote: char) -> Result<Token, ParseError> {
        let col = self.col;
        self.advance(); // consume opening quote
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(ParseError::new("unterminated quoted value", col)),
                Some(c) if c == quote => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(ParseError::new("unterminated escape sequence", col)),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Value(s))
    }
}
