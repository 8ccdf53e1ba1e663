//! named surface syntax.
//!
//! `\x. e` abstraction, juxtaposition for application, parentheses for
//! grouping, and `let x = e1; ...; in e2`, which the parser desugars into
//! a chain of applied abstractions. the core never sees names; terms get
//! here and back through the `convert` modules of each representation.

pub mod parser;
pub mod naming;

pub use parser::{parse, tokenize, Parser, Token, TokenData};
pub use naming::{free_name, BinderNames};

use derive_more::Display;


#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
#[display(fmt = "{}:{}", line, column)]
pub struct SourcePos {
    pub line:   u32,
    pub column: u32,
}

impl SourcePos {
    pub const START: SourcePos = SourcePos { line: 1, column: 1 };
}


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Var(String),
    Lam(String, Box<Expr>),
    App(Box<Expr>, Box<Expr>),
}

impl Expr {
    #[inline]
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    #[inline]
    pub fn lam(name: &str, body: Expr) -> Expr {
        Expr::Lam(name.to_string(), Box::new(body))
    }

    #[inline]
    pub fn app(fun: Expr, arg: Expr) -> Expr {
        Expr::App(Box::new(fun), Box::new(arg))
    }

    pub fn apps<I: IntoIterator<Item = Expr>>(fun: Expr, args: I) -> Expr {
        let mut result = fun;
        for arg in args {
            result = Expr::app(result, arg);
        }
        return result;
    }

    /// `let name = value in body`, as the parser desugars it.
    pub fn let_in(name: &str, value: Expr, body: Expr) -> Expr {
        Expr::app(Expr::lam(name, body), value)
    }
}


#[derive(Clone, Copy, PartialEq)]
enum Position {
    Any,
    Fun,
    Arg,
}

impl Expr {
    fn fmt_at(&self, f: &mut core::fmt::Formatter<'_>, pos: Position) -> core::fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{name}"),

            Expr::Lam(name, body) => {
                let parens = pos != Position::Any;
                if parens { write!(f, "(")?; }
                write!(f, "\\{name}. ")?;
                body.fmt_at(f, Position::Any)?;
                if parens { write!(f, ")")?; }
                Ok(())
            }

            Expr::App(fun, arg) => {
                let parens = pos == Position::Arg;
                if parens { write!(f, "(")?; }
                fun.fmt_at(f, Position::Fun)?;
                write!(f, " ")?;
                arg.fmt_at(f, Position::Arg)?;
                if parens { write!(f, ")")?; }
                Ok(())
            }
        }
    }
}

impl core::fmt::Display for Expr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_at(f, Position::Any)
    }
}
