use crate::syntax::SourcePos;


/// a bound index with no enclosing abstraction to refer to.
/// never produced from well-formed input; seeing one means a
/// conversion or traversal has a bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("bound variable #{index} escapes its scope (only {depth} enclosing binders)")]
    Dangling { index: u32, depth: u32 },
}


/// bounded normalization gave up.
/// a normal outcome: the term may or may not have a normal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("ran out of fuel after {fuel} steps")]
pub struct FuelExhausted {
    pub fuel: u64,
}


#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pos}: {kind}")]
pub struct ParseError {
    pub pos: SourcePos,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { found: String, expected: &'static str },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
}

pub type ParseResult<T> = Result<T, ParseError>;


/// everything that can go wrong between source text and a printed normal form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error(transparent)]
    Fuel(#[from] FuelExhausted),
}
