use derive_more::Deref;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use super::*;


#[derive(Clone, Copy, Debug, Deref)]
pub struct Token<'i> {
    #[deref]
    pub data: TokenData<'i>,
    pub pos:  SourcePos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenData<'i> {
    Ident(&'i str),
    Lambda,
    Dot,
    LParen,
    RParen,
    Eq,
    Semicolon,
    KwLet,
    KwIn,
    EndOfFile,
}

impl<'i> TokenData<'i> {
    pub fn describe(&self) -> String {
        match self {
            TokenData::Ident(name) => format!("identifier `{name}`"),
            TokenData::Lambda    => "`\\`".to_string(),
            TokenData::Dot       => "`.`".to_string(),
            TokenData::LParen    => "`(`".to_string(),
            TokenData::RParen    => "`)`".to_string(),
            TokenData::Eq        => "`=`".to_string(),
            TokenData::Semicolon => "`;`".to_string(),
            TokenData::KwLet     => "`let`".to_string(),
            TokenData::KwIn      => "`in`".to_string(),
            TokenData::EndOfFile => "end of input".to_string(),
        }
    }

    /// tokens that can start an application argument.
    #[inline]
    fn starts_atom(&self) -> bool {
        matches!(self, TokenData::Ident(_) | TokenData::LParen)
    }
}


pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tok = Tokenizer { input, cursor: 0, pos: SourcePos::START };

    let mut tokens = Vec::new();
    while let Some(token) = tok.next()? {
        tokens.push(token);
    }
    tokens.push(Token { data: TokenData::EndOfFile, pos: tok.pos });
    return Ok(tokens);
}

pub fn parse(input: &str) -> ParseResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(tokens);
    let result = parser.parse_expr()?;
    parser.expect(TokenData::EndOfFile, "end of input")?;
    return Ok(result);
}


struct Tokenizer<'i> {
    input:  &'i str,
    cursor: usize,
    pos:    SourcePos,
}

impl<'i> Tokenizer<'i> {
    fn next(&mut self) -> ParseResult<Option<Token<'i>>> {
        loop {
            self.consume_while(|at| at.is_ascii_whitespace());

            if self.rest().starts_with("--") {
                self.consume_while(|at| at != b'\n');
                continue;
            }

            break;
        }

        let pos = self.pos;
        let Some(at) = self.rest().chars().next() else {
            return Ok(None);
        };

        let data = match at {
            '\\' | 'λ' => { self.consume(at.len_utf8()); TokenData::Lambda }
            '.' => { self.consume(1); TokenData::Dot }
            '(' => { self.consume(1); TokenData::LParen }
            ')' => { self.consume(1); TokenData::RParen }
            '=' => { self.consume(1); TokenData::Eq }
            ';' => { self.consume(1); TokenData::Semicolon }

            // idents & keywords.
            _ if at.is_ascii_alphabetic() || at == '_' => {
                let begin = self.cursor;
                self.consume_while(|at|
                    at.is_ascii_alphanumeric() || at == b'_' || at == b'\'');
                let value = &self.input[begin..self.cursor];

                match value {
                    "let" => TokenData::KwLet,
                    "in"  => TokenData::KwIn,
                    _     => TokenData::Ident(value),
                }
            }

            _ => {
                return Err(ParseError { pos, kind: ParseErrorKind::UnexpectedChar(at) });
            }
        };

        return Ok(Some(Token { data, pos }));
    }

    #[inline(always)]
    fn rest(&self) -> &'i str {
        &self.input[self.cursor..]
    }

    // only ever called with whole chars, so `cursor` stays on a char boundary.
    fn consume(&mut self, n: usize) {
        for at in self.input.as_bytes()[self.cursor .. self.cursor + n].iter().copied() {
            if at == b'\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            }
            // continuation bytes don't start a column.
            else if at & 0xC0 != 0x80 {
                self.pos.column += 1;
            }
        }
        self.cursor += n;
    }

    fn consume_while<F: Fn(u8) -> bool>(&mut self, f: F) {
        let n = self.input.as_bytes()[self.cursor..].iter()
            .take_while(|at| f(**at))
            .count();
        self.consume(n);
    }
}


pub struct Parser<'i> {
    tokens: Vec<Token<'i>>,
    cursor: usize,
}

impl<'i> Parser<'i> {
    /// `tokens` must end with `EndOfFile`, as `tokenize` produces them.
    pub fn new(tokens: Vec<Token<'i>>) -> Self {
        debug_assert!(matches!(tokens.last().map(|t| t.data), Some(TokenData::EndOfFile)));
        Self { tokens, cursor: 0 }
    }

    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        match self.peek().data {
            TokenData::Lambda => self.parse_lambda(),
            TokenData::KwLet  => self.parse_let(),
            _ => self.parse_apps(),
        }
    }

    // `\x y z. body`
    fn parse_lambda(&mut self) -> ParseResult<Expr> {
        self.expect(TokenData::Lambda, "`\\`")?;

        let mut params = vec![self.expect_ident()?];
        while self.peek().data != TokenData::Dot {
            params.push(self.expect_ident()?);
        }
        self.expect(TokenData::Dot, "`.`")?;

        let mut result = self.parse_expr()?;
        for param in params.iter().rev() {
            result = Expr::lam(param, result);
        }
        return Ok(result);
    }

    // `let x = e1; y = e2; in body`, the last `;` is optional.
    fn parse_let(&mut self) -> ParseResult<Expr> {
        self.expect(TokenData::KwLet, "`let`")?;

        let mut bindings = Vec::new();
        loop {
            let name = self.expect_ident()?;
            self.expect(TokenData::Eq, "`=`")?;
            let value = self.parse_expr()?;
            bindings.push((name, value));

            if self.consume_if_eq(TokenData::Semicolon) {
                if self.peek().data == TokenData::KwIn {
                    break;
                }
            }
            else { break }
        }
        self.expect(TokenData::KwIn, "`in`")?;

        let mut result = self.parse_expr()?;
        for (name, value) in bindings.into_iter().rev() {
            result = Expr::let_in(name, value, result);
        }
        return Ok(result);
    }

    fn parse_apps(&mut self) -> ParseResult<Expr> {
        let mut result = self.parse_atom()?;

        loop {
            let at = self.peek();
            if at.starts_atom() {
                let arg = self.parse_atom()?;
                result = Expr::app(result, arg);
            }
            // trailing lambda or let extends to the end.
            else if at.data == TokenData::Lambda || at.data == TokenData::KwLet {
                let arg = self.parse_expr()?;
                result = Expr::app(result, arg);
                break;
            }
            else { break }
        }

        return Ok(result);
    }

    fn parse_atom(&mut self) -> ParseResult<Expr> {
        let at = self.peek();
        match at.data {
            TokenData::Ident(name) => {
                self.cursor += 1;
                Ok(Expr::var(name))
            }

            TokenData::LParen => {
                self.cursor += 1;
                let result = self.parse_expr()?;
                self.expect(TokenData::RParen, "`)`")?;
                Ok(result)
            }

            _ => Err(self.error_unexpected(at, "expression")),
        }
    }


    #[inline(always)]
    fn peek(&self) -> Token<'i> {
        // `EndOfFile` is never consumed.
        self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn consume_if_eq(&mut self, data: TokenData) -> bool {
        if self.peek().data == data {
            self.cursor += 1;
            return true;
        }
        false
    }

    pub fn expect(&mut self, data: TokenData, expected: &'static str) -> ParseResult<()> {
        let at = self.peek();
        if at.data == data {
            if data != TokenData::EndOfFile {
                self.cursor += 1;
            }
            return Ok(());
        }
        Err(self.error_unexpected(at, expected))
    }

    fn expect_ident(&mut self) -> ParseResult<&'i str> {
        let at = self.peek();
        if let TokenData::Ident(name) = at.data {
            self.cursor += 1;
            return Ok(name);
        }
        Err(self.error_unexpected(at, "identifier"))
    }

    fn error_unexpected(&self, at: Token, expected: &'static str) -> ParseError {
        let kind = match at.data {
            TokenData::EndOfFile => ParseErrorKind::UnexpectedEof { expected },
            found => ParseErrorKind::UnexpectedToken { found: found.describe(), expected },
        };
        ParseError { pos: at.pos, kind }
    }
}
