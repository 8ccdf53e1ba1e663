use fxhash::FxHashMap;

use crate::ident::{FreeId, Fresh, Names};
use crate::syntax::{Expr, BinderNames, free_name};
use super::nat::Z;
use super::term::{STerm, View};


/// converts without ever leaving `STerm<Z>`: each binder's variable is
/// first a placeholder free id, which `lambda_over` then closes over.
///
/// free names are interned up front, so placeholders can start past every
/// id in `names` and never show up in it.
pub fn from_surface(e: &Expr, names: &mut Names) -> STerm<Z> {
    intern_free(e, names, &mut Vec::new());

    let mut fresh = Fresh::starting_at(names.len() as u32);
    let mut scope = Vec::new();
    return rec(e, names, &mut fresh, &mut scope);

    fn rec<'e>(e: &'e Expr,
        names: &mut Names, fresh: &mut Fresh,
        scope: &mut Vec<(&'e str, FreeId)>,
    ) -> STerm<Z> {
        match e {
            Expr::Var(name) => {
                match scope.iter().rev().find(|(at, _)| *at == name.as_str()) {
                    Some((_, id)) => STerm::free(*id),
                    None => STerm::free(names.intern(name)),
                }
            }

            Expr::Lam(name, body) => {
                let id = fresh.mint();
                scope.push((name.as_str(), id));
                let body = rec(body, names, fresh, scope);
                scope.pop();
                fresh.release(id);
                STerm::lambda_over(id, body)
            }

            Expr::App(fun, arg) => {
                let fun = rec(fun, names, fresh, scope);
                let arg = rec(arg, names, fresh, scope);
                STerm::apply(fun, arg)
            }
        }
    }
}

fn intern_free<'e>(e: &'e Expr, names: &mut Names, scope: &mut Vec<&'e str>) {
    match e {
        Expr::Var(name) => {
            if !scope.contains(&name.as_str()) {
                names.intern(name);
            }
        }

        Expr::Lam(name, body) => {
            scope.push(name.as_str());
            intern_free(body, names, scope);
            scope.pop();
        }

        Expr::App(fun, arg) => {
            intern_free(fun, names, scope);
            intern_free(arg, names, scope);
        }
    }
}

/// total: a locally closed term has no bound variable to get wrong.
pub fn to_surface(t: &STerm<Z>, names: &Names) -> Expr {
    let free = t.free_vars();
    let binders = BinderNames::avoiding(free.iter().map(|id| free_name(names, *id)));

    // binders are opened with ids above every free id of `t`,
    // and named through `local` while they're in scope.
    let mut fresh = Fresh::avoiding(free.iter().copied());
    let mut local = FxHashMap::default();
    return rec(t, names, &binders, &mut fresh, &mut local);

    fn rec(t: &STerm<Z>,
        names: &Names, binders: &BinderNames,
        fresh: &mut Fresh, local: &mut FxHashMap<FreeId, String>,
    ) -> Expr {
        match t.view() {
            View::Free(id) => {
                match local.get(&id) {
                    Some(name) => Expr::Var(name.clone()),
                    None => Expr::Var(free_name(names, id)),
                }
            }

            View::Bound(i) => i.absurd(),

            View::Lambda(b) => {
                let id = fresh.mint();
                let name = binders.at(local.len());
                local.insert(id, name.clone());
                let body = rec(&b.open(id), names, binders, fresh, local);
                local.remove(&id);
                fresh.release(id);
                Expr::Lam(name, Box::new(body))
            }

            View::Apply(fun, arg) => {
                let fun = rec(&fun, names, binders, fresh, local);
                let arg = rec(&arg, names, binders, fresh, local);
                Expr::app(fun, arg)
            }
        }
    }
}
