use std::rc::Rc;

use crate::ident::FreeId;
use crate::error::ScopeError;
use super::var::{Var, VarLike};
use super::binder::Binder;
use super::traverse::{rebind_var, FreeVars, Rebind, Syntax};


/// untyped lambda terms, locally nameless.
///
/// bound variables are de bruijn indices, free variables are `FreeId`s.
/// terms are immutable; sub-terms are shared through `Rc`.
/// equality is alpha-equivalence and looks through pending binder operations.
#[derive(Clone, Debug)]
pub enum Term {
    Var(Var),
    Lambda(Binder<Term>),
    Apply(Rc<Term>, Rc<Term>),
}

impl Term {
    #[inline(always)]
    pub fn free(id: FreeId) -> Term {
        Term::Var(Var::Free(id))
    }

    #[inline(always)]
    pub fn bound(offset: u32) -> Term {
        Term::Var(Var::bound(offset))
    }

    /// `body` already uses `Bound(0)` for the new variable.
    #[inline]
    pub fn lambda(body: Term) -> Term {
        Term::Lambda(Binder::bind(body))
    }

    /// abstracts `id` out of `body`.
    #[inline]
    pub fn lambda_over(id: FreeId, body: Term) -> Term {
        Term::Lambda(Binder::close(id, body))
    }

    #[inline]
    pub fn apply(fun: Term, arg: Term) -> Term {
        Term::Apply(Rc::new(fun), Rc::new(arg))
    }

    pub fn apps<I: IntoIterator<Item = Term>>(fun: Term, args: I) -> Term {
        let mut result = fun;
        for arg in args {
            result = Term::apply(result, arg);
        }
        return result;
    }


    #[inline(always)]
    pub fn try_var(&self) -> Option<Var> {
        if let Term::Var(v) = self { Some(*v) } else { None }
    }

    #[inline(always)]
    pub fn try_lambda(&self) -> Option<&Binder<Term>> {
        if let Term::Lambda(b) = self { Some(b) } else { None }
    }

    /// checks that every bound index refers to an enclosing abstraction.
    #[inline]
    pub fn check_scope(&self) -> Result<(), ScopeError> {
        self.check_scope_under(0)
    }

    /// `check_scope`, for a term sitting under `depth` binders.
    pub fn check_scope_under(&self, depth: u32) -> Result<(), ScopeError> {
        match self {
            Term::Var(Var::Bound(b)) => {
                if b.offset >= depth {
                    return Err(ScopeError::Dangling { index: b.offset, depth });
                }
                Ok(())
            }

            Term::Var(Var::Free(_)) => Ok(()),

            Term::Lambda(binder) => binder.unbind().check_scope_under(depth + 1),

            Term::Apply(fun, arg) => {
                fun.check_scope_under(depth)?;
                arg.check_scope_under(depth)
            }
        }
    }

    /// number of variable, abstraction and application nodes.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Lambda(b) => 1 + b.unbind().size(),
            Term::Apply(fun, arg) => 1 + fun.size() + arg.size(),
        }
    }
}


impl VarLike for Term {
    #[inline(always)]
    fn from_var(var: Var) -> Self { Term::Var(var) }

    #[inline(always)]
    fn try_var(&self) -> Option<Var> { Term::try_var(self) }
}

impl Syntax<Term> for Term {
    fn free_vars_ex(&self, out: &mut FreeVars) {
        match self {
            Term::Var(Var::Free(id)) => { out.insert(*id); }
            Term::Var(Var::Bound(_)) => (),
            Term::Lambda(b) => b.free_vars_ex(out),
            Term::Apply(fun, arg) => {
                fun.free_vars_ex(out);
                arg.free_vars_ex(out);
            }
        }
    }

    fn rebind(&self, offset: u32, op: Rebind<Term>) -> Self {
        match self {
            Term::Var(_) => rebind_var(self, offset, op),

            Term::Lambda(b) => Term::Lambda(b.rebind(offset, op)),

            Term::Apply(fun, arg) =>
                Term::Apply(fun.rebind(offset, op), arg.rebind(offset, op)),
        }
    }
}


impl PartialEq for Term {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        super::alpha::alpha_eq(self, other)
    }
}

impl Eq for Term {}


#[derive(Clone, Copy, PartialEq)]
enum Position {
    Any,
    Fun,
    Arg,
}

impl Term {
    fn fmt_at(&self, f: &mut core::fmt::Formatter<'_>, pos: Position) -> core::fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{v}"),

            Term::Lambda(b) => {
                let parens = pos != Position::Any;
                if parens { write!(f, "(")?; }
                write!(f, "λ. ")?;
                b.unbind().fmt_at(f, Position::Any)?;
                if parens { write!(f, ")")?; }
                Ok(())
            }

            Term::Apply(fun, arg) => {
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

/// the raw locally nameless form, `λ. #0 _3`.
impl core::fmt::Display for Term {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_at(f, Position::Any)
    }
}
