//! normal order reduction on scope-indexed terms.
//!
//! only locally closed terms are reduced: every binder is entered by
//! opening it with a fresh id, so recursion stays at `STerm<Z>` and the
//! bound variable case is statically impossible.

use crate::ident::Fresh;
use crate::error::FuelExhausted;
use crate::ln::Fuel;
use super::nat::Z;
use super::term::{STerm, View};


pub fn whnf(t: &STerm<Z>) -> STerm<Z> {
    let _span = tracing::trace_span!("scoped/whnf").entered();
    whnf_ex(t)
}

pub fn nf(t: &STerm<Z>) -> STerm<Z> {
    let _span = tracing::trace_span!("scoped/nf").entered();
    let mut fresh = Fresh::avoiding(t.free_vars());
    nf_ex(t, &mut fresh)
}

pub fn whnf_bounded(t: &STerm<Z>, fuel: u64) -> Result<STerm<Z>, FuelExhausted> {
    let _span = tracing::trace_span!("scoped/whnf_bounded", fuel).entered();
    let mut fuel = Fuel::new(fuel);
    whnf_bounded_ex(t, &mut fuel)
        .map_err(|e| { tracing::debug!(fuel = e.fuel, "whnf gave up"); e })
}

pub fn nf_bounded(t: &STerm<Z>, fuel: u64) -> Result<STerm<Z>, FuelExhausted> {
    let _span = tracing::trace_span!("scoped/nf_bounded", fuel).entered();
    let mut fuel = Fuel::new(fuel);
    let mut fresh = Fresh::avoiding(t.free_vars());
    let result = nf_bounded_ex(t, &mut fresh, &mut fuel);
    match &result {
        Ok(t)  => tracing::trace!(used = fuel.used(), size = t.size(), "normalized"),
        Err(e) => tracing::debug!(fuel = e.fuel, "nf gave up"),
    }
    return result;
}


fn whnf_ex(t: &STerm<Z>) -> STerm<Z> {
    let mut t = t.clone();
    loop {
        let View::Apply(fun, arg) = t.view() else { break };

        let fun = whnf_ex(&fun);
        match fun.view() {
            View::Lambda(b) => t = b.instantiate(&arg),
            _ => return STerm::apply(fun, arg),
        }
    }
    return t;
}

fn nf_ex(t: &STerm<Z>, fresh: &mut Fresh) -> STerm<Z> {
    match t.view() {
        View::Free(_) => t.clone(),

        View::Bound(i) => i.absurd(),

        View::Lambda(b) => {
            let id = fresh.mint();
            let body = nf_ex(&b.open(id), fresh);
            fresh.release(id);
            STerm::lambda_over(id, body)
        }

        View::Apply(fun, arg) => {
            let fun = whnf_ex(&fun);
            match fun.view() {
                View::Lambda(b) => nf_ex(&b.instantiate(&arg), fresh),
                _ => STerm::apply(nf_ex(&fun, fresh), nf_ex(&arg, fresh)),
            }
        }
    }
}

fn whnf_bounded_ex(t: &STerm<Z>, fuel: &mut Fuel) -> Result<STerm<Z>, FuelExhausted> {
    fuel.burn()?;

    let mut t = t.clone();
    loop {
        let View::Apply(fun, arg) = t.view() else { break };

        let fun = whnf_bounded_ex(&fun, fuel)?;
        match fun.view() {
            View::Lambda(b) => {
                fuel.burn()?;
                t = b.instantiate(&arg);
            }
            _ => return Ok(STerm::apply(fun, arg)),
        }
    }
    return Ok(t);
}

fn nf_bounded_ex(t: &STerm<Z>, fresh: &mut Fresh, fuel: &mut Fuel) -> Result<STerm<Z>, FuelExhausted> {
    fuel.burn()?;

    match t.view() {
        View::Free(_) => Ok(t.clone()),

        View::Bound(i) => i.absurd(),

        View::Lambda(b) => {
            let id = fresh.mint();
            let body = nf_bounded_ex(&b.open(id), fresh, fuel)?;
            fresh.release(id);
            Ok(STerm::lambda_over(id, body))
        }

        View::Apply(fun, arg) => {
            let fun = whnf_bounded_ex(&fun, fuel)?;
            match fun.view() {
                View::Lambda(b) => {
                    fuel.burn()?;
                    nf_bounded_ex(&b.instantiate(&arg), fresh, fuel)
                }
                _ => {
                    let fun = nf_bounded_ex(&fun, fresh, fuel)?;
                    let arg = nf_bounded_ex(&arg, fresh, fuel)?;
                    Ok(STerm::apply(fun, arg))
                }
            }
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::FreeId;
    use crate::scoped::{Idx, S};

    type One = S<Z>;
    type Two = S<S<Z>>;

    fn f(id: u32) -> STerm<Z> { STerm::free(FreeId(id)) }

    fn id() -> STerm<Z> {
        STerm::lambda(STerm::bound(Idx::zero()))
    }

    fn k() -> STerm<Z> {
        STerm::lambda(STerm::lambda(STerm::bound(Idx::<Two>::succ(Idx::zero()))))
    }

    fn omega() -> STerm<Z> {
        let x = || STerm::<One>::bound(Idx::zero());
        let w: STerm<Z> = STerm::lambda(STerm::apply(x(), x()));
        STerm::apply(w.clone(), w)
    }

    #[test]
    fn identity() {
        let t = STerm::apply(id(), f(3));
        assert_eq!(nf(&t), f(3));
        assert_eq!(whnf(&t), f(3));
    }

    #[test]
    fn k_combinator() {
        let t = STerm::apps(k(), [f(0), f(1)]);
        assert_eq!(nf(&t), f(0));
        assert_eq!(nf_bounded(&t, 100), Ok(f(0)));
    }

    #[test]
    fn capture_avoidance() {
        // `(\x. \y. x) y` ~> `\z. y`
        let t = STerm::apply(k(), f(1));
        assert_eq!(nf(&t), STerm::lambda(STerm::free(FreeId(1))));
    }

    #[test]
    fn under_binders() {
        // `\x. (\y. y x) (\z. z)` ~> `\x. x`
        let y_x: STerm<Two> = STerm::apply(
            STerm::bound(Idx::zero()),
            STerm::bound(Idx::succ(Idx::zero())));
        let body: STerm<One> = STerm::apply(STerm::lambda(y_x), id().weaken());
        let t = STerm::lambda(body);
        assert_eq!(nf(&t), id());
    }

    #[test]
    fn omega_runs_out() {
        for fuel in [0, 1, 100] {
            assert_eq!(nf_bounded(&omega(), fuel), Err(FuelExhausted { fuel }));
            assert_eq!(whnf_bounded(&omega(), fuel), Err(FuelExhausted { fuel }));
        }
    }

    #[test]
    fn omega_under_unused_argument() {
        let t = STerm::apply(STerm::lambda(f(0).weaken()), omega());
        assert_eq!(nf_bounded(&t, 10), Ok(f(0)));
    }

    #[test]
    fn largest_free_id() {
        let top = STerm::free(FreeId(u32::MAX));
        let t = STerm::apply(k(), top.clone());
        assert_eq!(nf(&t), STerm::lambda(top.clone().weaken()));
        assert_eq!(nf_bounded(&t, 100), Ok(STerm::lambda(top.weaken())));
    }
}
