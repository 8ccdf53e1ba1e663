//! structural traversal shared by every piece of syntax.
//!
//! a type takes part by implementing `Syntax<V>` once, where `V` is the
//! variable-like term type it contains. compound shapes recurse into their
//! components, atomic leaves return themselves, and the term type itself
//! swaps variables via `VarLike`. binders stop the recursion by deferring
//! the operation into their pending slot (see `Binder`).

use std::rc::Rc;

use fxhash::FxHashSet;

use crate::ident::FreeId;
use super::var::{Var, VarLike};


pub type FreeVars = FxHashSet<FreeId>;


/// one binder operation, as seen from `offset` binders below where it started.
///
/// - `Open(ids)`:     `Bound(offset + i)` becomes `Free(ids[i])`.
/// - `Close(ids)`:    `Free(ids[i])` becomes `Bound(offset + i)`, first match wins.
/// - `Subst(values)`: `Bound(offset + i)` becomes `values[i]`.
///
/// indices below `offset` belong to binders inside the traversed value,
/// indices past the end of the list are left alone.
/// substituted values must be locally closed, so nothing is shifted.
#[derive(Debug)]
pub enum Rebind<'a, V> {
    Open(&'a [FreeId]),
    Close(&'a [FreeId]),
    Subst(&'a [V]),
}

impl<'a, V> Clone for Rebind<'a, V> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<'a, V> Copy for Rebind<'a, V> {}

impl<'a, V> Rebind<'a, V> {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Rebind::Open(ids)     => ids.len(),
            Rebind::Close(ids)    => ids.len(),
            Rebind::Subst(values) => values.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// the replacement for `var`, if the operation touches it.
    pub fn apply_var(&self, var: Var, offset: u32) -> Option<V>
    where V: VarLike + Clone {
        match (*self, var) {
            (Rebind::Open(ids), Var::Bound(b)) => {
                let i = b.offset.checked_sub(offset)?;
                let id = ids.get(i as usize)?;
                Some(V::from_var(Var::Free(*id)))
            }

            (Rebind::Close(ids), Var::Free(id)) => {
                let i = ids.iter().position(|at| *at == id)?;
                Some(V::from_var(Var::bound(offset + i as u32)))
            }

            (Rebind::Subst(values), Var::Bound(b)) => {
                let i = b.offset.checked_sub(offset)?;
                values.get(i as usize).cloned()
            }

            _ => None,
        }
    }
}


pub trait Syntax<V>: Sized {
    fn free_vars_ex(&self, out: &mut FreeVars);

    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self;


    fn free_vars(&self) -> FreeVars {
        let mut result = FreeVars::default();
        self.free_vars_ex(&mut result);
        return result;
    }

    #[inline]
    fn open_ex(&self, offset: u32, ids: &[FreeId]) -> Self {
        self.rebind(offset, Rebind::Open(ids))
    }

    #[inline]
    fn close_ex(&self, offset: u32, ids: &[FreeId]) -> Self {
        self.rebind(offset, Rebind::Close(ids))
    }

    #[inline]
    fn subst_ex(&self, offset: u32, values: &[V]) -> Self {
        self.rebind(offset, Rebind::Subst(values))
    }
}


/// `rebind` on something that may be a variable: the replacement if the
/// operation touches it, otherwise `t` unchanged.
#[inline]
pub fn rebind_var<V: VarLike + Clone>(t: &V, offset: u32, op: Rebind<V>) -> V {
    t.try_var()
        .and_then(|var| op.apply_var(var, offset))
        .unwrap_or_else(|| t.clone())
}


/// implements `Syntax` for types that never contain variables.
///
/// a leaf is `Syntax<V>` for every `V`, so a container holding only leaves
/// (a `Vec<u32>`, say) can't infer `V` from the call. spell it out there:
/// `Syntax::<Term>::free_vars_ex(&self.tags, out)`.
#[macro_export]
macro_rules! syntax_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl<V> $crate::ln::Syntax<V> for $ty {
            #[inline(always)]
            fn free_vars_ex(&self, _: &mut $crate::ln::FreeVars) {}

            #[inline(always)]
            fn rebind(&self, _: u32, _: $crate::ln::Rebind<V>) -> Self { self.clone() }
        }
    )*};
}

syntax_leaf!(
    (), bool, char,
    u8, u16, u32, u64, usize,
    i8, i16, i32, i64, isize,
    String, FreeId,
);


impl<V, T: Syntax<V>> Syntax<V> for Box<T> {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        T::free_vars_ex(self, out)
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        Box::new(T::rebind(self, offset, op))
    }
}

impl<V, T: Syntax<V>> Syntax<V> for Rc<T> {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        T::free_vars_ex(self, out)
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        Rc::new(T::rebind(self, offset, op))
    }
}

impl<V, T: Syntax<V>> Syntax<V> for Vec<T> {
    fn free_vars_ex(&self, out: &mut FreeVars) {
        for at in self {
            at.free_vars_ex(out);
        }
    }

    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        self.iter().map(|at| at.rebind(offset, op)).collect()
    }
}

impl<V, T: Syntax<V>> Syntax<V> for Option<T> {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        if let Some(at) = self {
            at.free_vars_ex(out);
        }
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        self.as_ref().map(|at| at.rebind(offset, op))
    }
}

// the binary sum.
impl<V, A: Syntax<V>, B: Syntax<V>> Syntax<V> for Result<A, B> {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        match self {
            Ok(a)  => a.free_vars_ex(out),
            Err(b) => b.free_vars_ex(out),
        }
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        match self {
            Ok(a)  => Ok(a.rebind(offset, op)),
            Err(b) => Err(b.rebind(offset, op)),
        }
    }
}

impl<V, A: Syntax<V>, B: Syntax<V>> Syntax<V> for (A, B) {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        self.0.free_vars_ex(out);
        self.1.free_vars_ex(out);
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        (self.0.rebind(offset, op), self.1.rebind(offset, op))
    }
}

impl<V, A: Syntax<V>, B: Syntax<V>, C: Syntax<V>> Syntax<V> for (A, B, C) {
    #[inline]
    fn free_vars_ex(&self, out: &mut FreeVars) {
        self.0.free_vars_ex(out);
        self.1.free_vars_ex(out);
        self.2.free_vars_ex(out);
    }

    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        (self.0.rebind(offset, op), self.1.rebind(offset, op), self.2.rebind(offset, op))
    }
}
