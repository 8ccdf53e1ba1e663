//! capture-avoiding variable binding for the untyped lambda calculus.
//!
//! two representations implement the same contract (`strategy::Strategy`):
//! `ln`, locally nameless terms whose scoping is checked at runtime, and
//! `scoped`, the same encoding with the scope bound tracked in the type.
//! both are built on the lazy `ln::Binder` and the `ln::Syntax` traversal.

pub mod ident;
pub mod error;
pub mod syntax;
pub mod ln;
pub mod scoped;
pub mod strategy;

pub use ident::{FreeId, Names, Fresh};
pub use error::{Error, ScopeError, FuelExhausted, ParseError};
pub use strategy::{Strategy, LocallyNameless, ScopeIndexed, normalize_source};
