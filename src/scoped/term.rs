use core::marker::PhantomData;

use crate::ident::FreeId;
use crate::error::ScopeError;
use crate::ln::{alpha_eq, Binder, FreeVars, PendingKind, Syntax, Term, Var};
use super::nat::{Idx, Nat, S, Z};


/// a term whose bound indices are all below `N`.
///
/// the representation is a plain `ln::Term`; the scope bound lives only in
/// the type. `STerm<Z>` is a locally closed term, a body under one more
/// binder is an `STerm<S<N>>`, so an index that escapes every binder can't
/// be built through this api.
pub struct STerm<N> {
    term:    Term,
    phantom: PhantomData<fn() -> N>,
}

/// an abstraction at scope `N`, whose body is an `STerm<S<N>>`.
pub struct SBinder<N> {
    binder:  Binder<Term>,
    phantom: PhantomData<fn() -> N>,
}

/// one layer of an `STerm<N>`, typed.
#[derive(Debug)]
pub enum View<N> {
    Free(FreeId),
    Bound(Idx<N>),
    Lambda(SBinder<N>),
    Apply(STerm<N>, STerm<N>),
}


impl<N> Clone for STerm<N> {
    #[inline(always)]
    fn clone(&self) -> Self { Self { term: self.term.clone(), phantom: PhantomData } }
}

impl<N> Clone for SBinder<N> {
    #[inline(always)]
    fn clone(&self) -> Self { Self { binder: self.binder.clone(), phantom: PhantomData } }
}

impl<N> core::fmt::Debug for STerm<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.term, f)
    }
}

impl<N> core::fmt::Debug for SBinder<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.binder, f)
    }
}

/// alpha-equivalence.
impl<N> PartialEq for STerm<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool { alpha_eq(&self.term, &other.term) }
}

impl<N> Eq for STerm<N> {}


impl<N: Nat> STerm<N> {
    #[inline(always)]
    fn wrap(term: Term) -> Self {
        Self { term, phantom: PhantomData }
    }

    /// checks that `term` really is scoped below `N`.
    pub fn from_ln(term: Term) -> Result<Self, ScopeError> {
        term.check_scope_under(N::VALUE)?;
        Ok(Self::wrap(term))
    }

    #[inline(always)]
    pub fn free(id: FreeId) -> Self {
        Self::wrap(Term::free(id))
    }

    #[inline(always)]
    pub fn bound(i: Idx<N>) -> Self {
        Self::wrap(Term::bound(i.get()))
    }

    #[inline]
    pub fn lambda(body: STerm<S<N>>) -> Self {
        Self::wrap(Term::lambda(body.term))
    }

    #[inline]
    pub fn apply(fun: STerm<N>, arg: STerm<N>) -> Self {
        Self::wrap(Term::apply(fun.term, arg.term))
    }

    pub fn apps<I: IntoIterator<Item = STerm<N>>>(fun: STerm<N>, args: I) -> Self {
        Self::wrap(Term::apps(fun.term, args.into_iter().map(|arg| arg.term)))
    }

    pub fn view(&self) -> View<N> {
        match &self.term {
            Term::Var(Var::Free(id)) => View::Free(*id),

            // every constructor keeps bound indices below `N`.
            Term::Var(Var::Bound(b)) => View::Bound(Idx::new_unck(b.offset)),

            Term::Lambda(b) => View::Lambda(SBinder::wrap(b.clone())),

            Term::Apply(fun, arg) =>
                View::Apply(Self::wrap(Term::clone(fun)), Self::wrap(Term::clone(arg))),
        }
    }

    /// the same term under one more binder.
    ///
    /// indices don't change when the bound grows, so this only changes the
    /// type. the one place the scope discipline is taken on trust rather
    /// than checked; `weaken_checked` is the checked version.
    #[inline(always)]
    pub fn weaken(self) -> STerm<S<N>> {
        STerm::wrap(self.term)
    }

    /// `weaken`, verified by walking the term.
    pub fn weaken_checked(self) -> Result<STerm<S<N>>, ScopeError> {
        self.term.check_scope_under(N::VALUE)?;
        Ok(STerm::wrap(self.term))
    }

    #[inline]
    pub fn free_vars(&self) -> FreeVars {
        self.term.free_vars()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.term.size()
    }
}

impl STerm<Z> {
    /// abstracts `id` out of `body`.
    #[inline]
    pub fn lambda_over(id: FreeId, body: STerm<Z>) -> STerm<Z> {
        STerm::wrap(Term::lambda_over(id, body.term))
    }
}


impl<N: Nat> SBinder<N> {
    #[inline(always)]
    fn wrap(binder: Binder<Term>) -> Self {
        Self { binder, phantom: PhantomData }
    }

    #[inline]
    pub fn bind(body: STerm<S<N>>) -> Self {
        Self::wrap(Binder::bind(body.term))
    }

    #[inline]
    pub fn unbind(&self) -> STerm<S<N>> {
        STerm::wrap(self.binder.unbind())
    }

    #[inline]
    pub fn force(&self) -> Self {
        Self::wrap(self.binder.force())
    }

    #[inline(always)]
    pub fn pending_kind(&self) -> PendingKind { self.binder.pending_kind() }

    #[inline(always)]
    pub fn pending_len(&self) -> usize { self.binder.pending_len() }
}

// open, close and instantiate are only sound on locally closed terms:
// at a larger scope the body's other indices would need shifting.
impl SBinder<Z> {
    #[inline]
    pub fn close(id: FreeId, body: STerm<Z>) -> Self {
        Self::wrap(Binder::close(id, body.term))
    }

    #[inline]
    pub fn open(&self, id: FreeId) -> STerm<Z> {
        STerm::wrap(self.binder.open(id))
    }

    #[inline]
    pub fn instantiate(&self, value: &STerm<Z>) -> STerm<Z> {
        STerm::wrap(self.binder.instantiate(value.term.clone()))
    }
}
