//! the contract every term representation implements, so tests and
//! benchmarks can be written once and run against each of them.

use crate::ident::Names;
use crate::error::{Error, FuelExhausted, ScopeError};
use crate::syntax::Expr;
use crate::{ln, scoped};


pub trait Strategy {
    type Term: Clone + core::fmt::Debug;

    const NAME: &'static str;

    /// total. free names are interned into `names`.
    fn from_surface(e: &Expr, names: &mut Names) -> Self::Term;

    /// inverse of `from_surface` up to renaming of binders.
    fn to_surface(t: &Self::Term, names: &Names) -> Result<Expr, ScopeError>;

    /// the normal form. doesn't return if there is none.
    fn normalize(t: &Self::Term) -> Self::Term;

    fn normalize_bounded(t: &Self::Term, fuel: u64) -> Result<Self::Term, FuelExhausted>;

    fn alpha_equivalent(a: &Self::Term, b: &Self::Term) -> bool;
}


#[derive(Clone, Copy, Debug)]
pub struct LocallyNameless;

impl Strategy for LocallyNameless {
    type Term = ln::Term;

    const NAME: &'static str = "ln";

    #[inline]
    fn from_surface(e: &Expr, names: &mut Names) -> ln::Term {
        ln::from_surface(e, names)
    }

    #[inline]
    fn to_surface(t: &ln::Term, names: &Names) -> Result<Expr, ScopeError> {
        ln::to_surface(t, names)
    }

    #[inline]
    fn normalize(t: &ln::Term) -> ln::Term {
        ln::nf(t)
    }

    #[inline]
    fn normalize_bounded(t: &ln::Term, fuel: u64) -> Result<ln::Term, FuelExhausted> {
        ln::nf_bounded(t, fuel)
    }

    #[inline]
    fn alpha_equivalent(a: &ln::Term, b: &ln::Term) -> bool {
        ln::alpha_eq(a, b)
    }
}


#[derive(Clone, Copy, Debug)]
pub struct ScopeIndexed;

impl Strategy for ScopeIndexed {
    type Term = scoped::STerm<scoped::Z>;

    const NAME: &'static str = "scoped";

    #[inline]
    fn from_surface(e: &Expr, names: &mut Names) -> Self::Term {
        scoped::from_surface(e, names)
    }

    #[inline]
    fn to_surface(t: &Self::Term, names: &Names) -> Result<Expr, ScopeError> {
        Ok(scoped::to_surface(t, names))
    }

    #[inline]
    fn normalize(t: &Self::Term) -> Self::Term {
        scoped::nf(t)
    }

    #[inline]
    fn normalize_bounded(t: &Self::Term, fuel: u64) -> Result<Self::Term, FuelExhausted> {
        scoped::nf_bounded(t, fuel)
    }

    #[inline]
    fn alpha_equivalent(a: &Self::Term, b: &Self::Term) -> bool {
        a == b
    }
}


/// parses, normalizes within `fuel` and prints, all through `S`.
pub fn normalize_source<S: Strategy>(source: &str, fuel: u64) -> Result<Expr, Error> {
    let e = crate::syntax::parse(source)?;
    let mut names = Names::new();
    let t = S::from_surface(&e, &mut names);
    let r = S::normalize_bounded(&t, fuel)?;
    Ok(S::to_surface(&r, &names)?)
}
