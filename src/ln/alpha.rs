use std::rc::Rc;

use super::term::Term;


/// bound variables are indices, so alpha-equivalence is plain structural
/// equality once pending binder operations are pushed through.
pub fn alpha_eq(a: &Term, b: &Term) -> bool {
    match (a, b) {
        (Term::Var(x), Term::Var(y)) => x == y,

        (Term::Lambda(x), Term::Lambda(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            alpha_eq(&x.unbind(), &y.unbind())
        }

        (Term::Apply(f1, a1), Term::Apply(f2, a2)) => {
               (Rc::ptr_eq(f1, f2) || alpha_eq(f1, f2))
            && (Rc::ptr_eq(a1, a2) || alpha_eq(a1, a2))
        }

        _ => false,
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::FreeId;
    use crate::ln::Binder;

    fn f(id: u32) -> Term { Term::free(FreeId(id)) }
    fn b(offset: u32) -> Term { Term::bound(offset) }

    #[test]
    fn names_do_not_matter() {
        // `\x. x` and `\y. y`, built by closing different ids.
        let t1 = Term::lambda_over(FreeId(0), f(0));
        let t2 = Term::lambda_over(FreeId(1), f(1));
        assert!(alpha_eq(&t1, &t2));
        assert!(alpha_eq(&t1, &Term::lambda(b(0))));
    }

    #[test]
    fn free_ids_do() {
        assert!(!alpha_eq(&f(0), &f(1)));
        assert!(!alpha_eq(&Term::lambda(f(0)), &Term::lambda(f(1))));
        assert!(!alpha_eq(&Term::lambda(b(0)), &Term::lambda(f(0))));
    }

    #[test]
    fn shapes() {
        let k = Term::lambda(Term::lambda(b(1)));
        let k_star = Term::lambda(Term::lambda(b(0)));
        assert!(!alpha_eq(&k, &k_star));
        assert!(!alpha_eq(&Term::apply(f(0), f(1)), &Term::apply(f(1), f(0))));
        assert!(!alpha_eq(&f(0), &Term::lambda(f(0))));
    }

    #[test]
    fn looks_through_pending() {
        let body = Term::apply(f(3), Term::lambda(Term::apply(f(3), b(0))));
        let pending: Binder<Term> = Binder::close(FreeId(3), body);
        let forced = pending.force();
        assert!(!pending.is_materialized());
        assert!(alpha_eq(&Term::Lambda(pending), &Term::Lambda(forced)));
    }

    #[test]
    fn equivalence() {
        let ts = [
            Term::lambda_over(FreeId(0), Term::apply(f(0), f(2))),
            Term::lambda_over(FreeId(1), Term::apply(f(1), f(2))),
            Term::lambda(Term::apply(b(0), f(2))),
        ];
        for x in &ts {
            assert!(alpha_eq(x, x));
            for y in &ts {
                assert_eq!(alpha_eq(x, y), alpha_eq(y, x));
                for z in &ts {
                    if alpha_eq(x, y) && alpha_eq(y, z) {
                        assert!(alpha_eq(x, z));
                    }
                }
            }
        }
    }
}
