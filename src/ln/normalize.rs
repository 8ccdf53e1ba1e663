//! normal order reduction.
//!
//! `whnf` contracts head redexes only, `nf` reduces everywhere, including
//! under abstractions, which it enters by opening with a fresh id and
//! leaves by closing over the same id. the `_bounded` variants take a
//! step budget and give up the moment it runs out.

use std::rc::Rc;

use crate::ident::Fresh;
use crate::error::FuelExhausted;
use super::var::Var;
use super::binder::Binder;
use super::traverse::Syntax;
use super::term::Term;


/// step budget of one bounded normalization.
/// every descent and every contraction burns one unit.
#[derive(Clone, Copy, Debug)]
pub struct Fuel {
    initial: u64,
    left:    u64,
}

impl Fuel {
    #[inline(always)]
    pub fn new(fuel: u64) -> Self {
        Self { initial: fuel, left: fuel }
    }

    #[inline(always)]
    pub fn left(&self) -> u64 { self.left }

    #[inline(always)]
    pub fn used(&self) -> u64 { self.initial - self.left }

    #[inline(always)]
    pub fn burn(&mut self) -> Result<(), FuelExhausted> {
        if self.left == 0 {
            return Err(FuelExhausted { fuel: self.initial });
        }
        self.left -= 1;
        Ok(())
    }
}


pub fn whnf(t: &Term) -> Term {
    let _span = tracing::trace_span!("ln/whnf").entered();
    whnf_ex(t)
}

/// the normal form of `t`. loops forever if there is none.
pub fn nf(t: &Term) -> Term {
    let _span = tracing::trace_span!("ln/nf").entered();
    let mut fresh = Fresh::avoiding(t.free_vars());
    nf_ex(t, &mut fresh)
}

pub fn whnf_bounded(t: &Term, fuel: u64) -> Result<Term, FuelExhausted> {
    let _span = tracing::trace_span!("ln/whnf_bounded", fuel).entered();
    let mut fuel = Fuel::new(fuel);
    whnf_bounded_ex(t, &mut fuel)
        .map_err(|e| { tracing::debug!(fuel = e.fuel, "whnf gave up"); e })
}

pub fn nf_bounded(t: &Term, fuel: u64) -> Result<Term, FuelExhausted> {
    let _span = tracing::trace_span!("ln/nf_bounded", fuel).entered();
    let mut fuel = Fuel::new(fuel);
    let mut fresh = Fresh::avoiding(t.free_vars());
    let result = nf_bounded_ex(t, &mut fresh, &mut fuel);
    match &result {
        Ok(t)  => tracing::trace!(used = fuel.used(), size = t.size(), "normalized"),
        Err(e) => tracing::debug!(fuel = e.fuel, "nf gave up"),
    }
    return result;
}


fn whnf_ex(t: &Term) -> Term {
    let mut t = t.clone();
    loop {
        let next = match &t {
            Term::Apply(fun, arg) => {
                let fun = whnf_ex(fun);
                if let Term::Lambda(b) = &fun {
                    b.instantiate(Term::clone(arg))
                }
                else {
                    return Term::Apply(Rc::new(fun), arg.clone());
                }
            }

            _ => break,
        };
        t = next;
    }
    return t;
}

fn nf_ex(t: &Term, fresh: &mut Fresh) -> Term {
    match t {
        Term::Var(Var::Free(_)) => t.clone(),

        Term::Var(Var::Bound(b)) => unreachable!("dangling bound variable {b}"),

        Term::Lambda(b) => {
            let id = fresh.mint();
            let body = nf_ex(&b.open(id), fresh);
            fresh.release(id);
            Term::Lambda(Binder::close(id, body))
        }

        Term::Apply(fun, arg) => {
            let fun = whnf_ex(fun);
            if let Term::Lambda(b) = &fun {
                nf_ex(&b.instantiate(Term::clone(arg)), fresh)
            }
            else {
                Term::apply(nf_ex(&fun, fresh), nf_ex(arg, fresh))
            }
        }
    }
}

fn whnf_bounded_ex(t: &Term, fuel: &mut Fuel) -> Result<Term, FuelExhausted> {
    fuel.burn()?;

    let mut t = t.clone();
    loop {
        let next = match &t {
            Term::Apply(fun, arg) => {
                let fun = whnf_bounded_ex(fun, fuel)?;
                if let Term::Lambda(b) = &fun {
                    fuel.burn()?;
                    b.instantiate(Term::clone(arg))
                }
                else {
                    return Ok(Term::Apply(Rc::new(fun), arg.clone()));
                }
            }

            _ => break,
        };
        t = next;
    }
    return Ok(t);
}

fn nf_bounded_ex(t: &Term, fresh: &mut Fresh, fuel: &mut Fuel) -> Result<Term, FuelExhausted> {
    fuel.burn()?;

    match t {
        Term::Var(Var::Free(_)) => Ok(t.clone()),

        Term::Var(Var::Bound(b)) => unreachable!("dangling bound variable {b}"),

        Term::Lambda(b) => {
            let id = fresh.mint();
            let body = nf_bounded_ex(&b.open(id), fresh, fuel)?;
            fresh.release(id);
            Ok(Term::Lambda(Binder::close(id, body)))
        }

        Term::Apply(fun, arg) => {
            let fun = whnf_bounded_ex(fun, fuel)?;
            if let Term::Lambda(b) = &fun {
                fuel.burn()?;
                nf_bounded_ex(&b.instantiate(Term::clone(arg)), fresh, fuel)
            }
            else {
                let fun = nf_bounded_ex(&fun, fresh, fuel)?;
                let arg = nf_bounded_ex(arg, fresh, fuel)?;
                Ok(Term::apply(fun, arg))
            }
        }
    }
}
