use crate::ident::Names;
use crate::error::ScopeError;
use crate::syntax::{Expr, BinderNames, free_name};
use super::var::Var;
use super::traverse::Syntax;
use super::term::Term;


/// names bound by an enclosing `\` become indices, everything else is
/// interned as a free id.
pub fn from_surface(e: &Expr, names: &mut Names) -> Term {
    let mut scope = Vec::new();
    return rec(e, names, &mut scope);

    fn rec<'e>(e: &'e Expr, names: &mut Names, scope: &mut Vec<&'e str>) -> Term {
        match e {
            Expr::Var(name) => {
                // innermost binder with that name.
                match scope.iter().rev().position(|at| *at == name.as_str()) {
                    Some(offset) => Term::bound(offset as u32),
                    None => Term::free(names.intern(name)),
                }
            }

            Expr::Lam(name, body) => {
                scope.push(name.as_str());
                let body = rec(body, names, scope);
                scope.pop();
                Term::lambda(body)
            }

            Expr::App(fun, arg) => {
                let fun = rec(fun, names, scope);
                let arg = rec(arg, names, scope);
                Term::apply(fun, arg)
            }
        }
    }
}

/// fails on dangling bound indices, which well-formed terms never have.
pub fn to_surface(t: &Term, names: &Names) -> Result<Expr, ScopeError> {
    let binders = BinderNames::avoiding(
        t.free_vars().into_iter().map(|id| free_name(names, id)));

    let mut scope = Vec::new();
    return rec(t, names, &binders, &mut scope);

    fn rec(t: &Term, names: &Names, binders: &BinderNames, scope: &mut Vec<String>)
        -> Result<Expr, ScopeError>
    {
        match t {
            Term::Var(Var::Bound(b)) => {
                let depth = scope.len();
                let Some(at) = depth.checked_sub(b.offset as usize + 1) else {
                    return Err(ScopeError::Dangling { index: b.offset, depth: depth as u32 });
                };
                Ok(Expr::Var(scope[at].clone()))
            }

            Term::Var(Var::Free(id)) => Ok(Expr::Var(free_name(names, *id))),

            Term::Lambda(binder) => {
                let name = binders.at(scope.len());
                scope.push(name.clone());
                let body = rec(&binder.unbind(), names, binders, scope);
                scope.pop();
                Ok(Expr::Lam(name, Box::new(body?)))
            }

            Term::Apply(fun, arg) => {
                let fun = rec(fun, names, binders, scope)?;
                let arg = rec(arg, names, binders, scope)?;
                Ok(Expr::app(fun, arg))
            }
        }
    }
}
