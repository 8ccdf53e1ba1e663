use std::rc::Rc;

use crate::ident::FreeId;
use super::traverse::{FreeVars, Rebind, Syntax};
use super::var::VarLike;
use super::term::Term;


/// the body of one abstraction, plus at most one operation that has been
/// requested but not yet pushed through it.
///
/// requests of the same kind fuse: descending through `k` nested binders
/// with an open (or a substitution) records `k` values in the innermost
/// slot and costs a single traversal once someone looks inside.
/// a request of a different kind materializes the slot first.
///
/// the body is shared, so cloning a binder (and deferring into a copy)
/// never copies the term.
#[derive(Debug)]
pub struct Binder<T, V = Term> {
    body:    Rc<T>,
    pending: Pending<V>,
}

#[derive(Clone, Debug)]
enum Pending<V> {
    None,
    Open  { offset: u32, ids:    Vec<FreeId> },
    Close { offset: u32, ids:    Vec<FreeId> },
    Subst { offset: u32, values: Vec<V> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    None,
    Open,
    Close,
    Subst,
}


impl<T, V: Clone> Clone for Binder<T, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { body: self.body.clone(), pending: self.pending.clone() }
    }
}

impl<V: Clone> Pending<V> {
    fn from_op(offset: u32, op: Rebind<V>) -> Self {
        match op {
            Rebind::Open(ids)     => Pending::Open  { offset, ids:    ids.to_vec() },
            Rebind::Close(ids)    => Pending::Close { offset, ids:    ids.to_vec() },
            Rebind::Subst(values) => Pending::Subst { offset, values: values.to_vec() },
        }
    }
}

#[inline]
fn concat<X: Clone>(first: &[X], second: &[X]) -> Vec<X> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    return result;
}


impl<T, V> Binder<T, V> {
    #[inline]
    pub fn bind(body: T) -> Self {
        Self { body: Rc::new(body), pending: Pending::None }
    }

    #[inline]
    pub fn pending_kind(&self) -> PendingKind {
        match &self.pending {
            Pending::None          => PendingKind::None,
            Pending::Open  { .. }  => PendingKind::Open,
            Pending::Close { .. }  => PendingKind::Close,
            Pending::Subst { .. }  => PendingKind::Subst,
        }
    }

    /// number of fused values waiting in the slot.
    #[inline]
    pub fn pending_len(&self) -> usize {
        match &self.pending {
            Pending::None => 0,
            Pending::Open  { ids, .. }    => ids.len(),
            Pending::Close { ids, .. }    => ids.len(),
            Pending::Subst { values, .. } => values.len(),
        }
    }

    #[inline(always)]
    pub fn is_materialized(&self) -> bool {
        matches!(self.pending, Pending::None)
    }

    /// same body, both materialized.
    /// a cheap sufficient condition for equality.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.is_materialized() && other.is_materialized()
        && Rc::ptr_eq(&self.body, &other.body)
    }
}

impl<T: Syntax<V> + Clone, V: VarLike + Clone> Binder<T, V> {
    /// binds `id`: its free occurrences in `body` become the new binder's variable.
    #[inline]
    pub fn close(id: FreeId, body: T) -> Self {
        Self { body: Rc::new(body), pending: Pending::Close { offset: 0, ids: vec![id] } }
    }

    /// the body with the pending operation applied.
    pub fn unbind(&self) -> T {
        match &self.pending {
            Pending::None => (*self.body).clone(),
            Pending::Open  { offset, ids }    => T::rebind(&self.body, *offset, Rebind::Open(ids)),
            Pending::Close { offset, ids }    => T::rebind(&self.body, *offset, Rebind::Close(ids)),
            Pending::Subst { offset, values } => T::rebind(&self.body, *offset, Rebind::Subst(values)),
        }
    }

    /// materializes without unwrapping.
    pub fn force(&self) -> Self {
        if self.is_materialized() {
            return self.clone();
        }
        Self::bind(self.unbind())
    }

    /// the body, with the binder's variable replaced by `Free(id)`.
    #[inline]
    pub fn open(&self, id: FreeId) -> T {
        self.defer(0, Rebind::Open(&[id])).unbind()
    }

    /// the body, with the binder's variable replaced by `value`.
    /// `value` must be locally closed.
    #[inline]
    pub fn instantiate(&self, value: V) -> T {
        self.defer(0, Rebind::Subst(core::slice::from_ref(&value))).unbind()
    }

    /// records `op` to run on the body, `offset` binders below where it started.
    ///
    /// the new request runs *after* the pending one. two opens fuse when the
    /// new one covers exactly the indices just below the pending one, which
    /// is what descending through nested binders produces:
    /// `Open(o, ids)` then `Open(o - n, new)` is `Open(o - n, new ++ ids)`.
    /// substitutions fuse the same way. closes fuse when the new one starts
    /// right past the pending one, `Close(o, ids)` then `Close(o + |ids|, new)`
    /// is `Close(o, ids ++ new)`; lookups take the first match, and the
    /// pending close sees every free id first, as it should.
    pub fn defer(&self, offset: u32, op: Rebind<V>) -> Self {
        if op.is_empty() {
            return self.clone();
        }

        let pending = match (&self.pending, op) {
            (Pending::None, op) => Pending::from_op(offset, op),

            (Pending::Open { offset: o, ids }, Rebind::Open(new))
            if *o == offset + new.len() as u32 => {
                Pending::Open { offset, ids: concat(new, ids) }
            }

            (Pending::Close { offset: o, ids }, Rebind::Close(new))
            if offset == *o + ids.len() as u32 => {
                Pending::Close { offset: *o, ids: concat(ids, new) }
            }

            (Pending::Subst { offset: o, values }, Rebind::Subst(new))
            if *o == offset + new.len() as u32 => {
                Pending::Subst { offset, values: concat(new, values) }
            }

            (_, op) => {
                return Self {
                    body:    Rc::new(self.unbind()),
                    pending: Pending::from_op(offset, op),
                };
            }
        };

        return Self { body: self.body.clone(), pending };
    }
}


impl<T: Syntax<V> + Clone, V: VarLike + Clone> Syntax<V> for Binder<T, V> {
    fn free_vars_ex(&self, out: &mut FreeVars) {
        if self.is_materialized() {
            T::free_vars_ex(&self.body, out);
        }
        else {
            self.unbind().free_vars_ex(out);
        }
    }

    // no traversal here: the body sees the operation one binder deeper.
    #[inline]
    fn rebind(&self, offset: u32, op: Rebind<V>) -> Self {
        self.defer(offset + 1, op)
    }
}
