use proptest::prelude::*;

use lambind::syntax::{parse, Expr};
use lambind::strategy::Strategy as Representation;
use lambind::{FuelExhausted, LocallyNameless, Names, ScopeIndexed};


const FUEL: u64 = 2_000;

// few names, so binders shadow each other and free names collide with bound ones.
fn arb_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("x"), Just("y"), Just("z")]
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![arb_name(), Just("a"), Just("b")].prop_map(Expr::var);
    leaf.prop_recursive(6, 40, 2, |inner| {
        prop_oneof![
            (arb_name(), inner.clone()).prop_map(|(name, body)| Expr::lam(name, body)),
            (inner.clone(), inner).prop_map(|(fun, arg)| Expr::app(fun, arg)),
        ]
    })
}


fn roundtrip<S: Representation>(e: &Expr) -> Result<(), TestCaseError> {
    let mut names = Names::new();
    let t = S::from_surface(e, &mut names);
    let back = S::to_surface(&t, &names).unwrap();
    prop_assert!(S::alpha_equivalent(&t, &S::from_surface(&back, &mut names)));

    // and the printed form parses back to the same thing.
    let reparsed = parse(&back.to_string()).unwrap();
    prop_assert_eq!(reparsed, back);
    Ok(())
}

fn idempotent<S: Representation>(e: &Expr) -> Result<(), TestCaseError> {
    let mut names = Names::new();
    let t = S::from_surface(e, &mut names);
    if let Ok(once) = S::normalize_bounded(&t, FUEL) {
        let twice = S::normalize_bounded(&once, 1_000_000);
        prop_assert!(twice.is_ok());
        if let Ok(twice) = twice {
            prop_assert!(S::alpha_equivalent(&once, &twice));
        }
    }
    Ok(())
}

fn fuel_monotone<S: Representation>(e: &Expr, fuel: u64, extra: u64) -> Result<(), TestCaseError> {
    let mut names = Names::new();
    let t = S::from_surface(e, &mut names);
    if let Ok(r) = S::normalize_bounded(&t, fuel) {
        let more = S::normalize_bounded(&t, fuel + extra);
        prop_assert!(more.is_ok());
        if let Ok(more) = more {
            prop_assert!(S::alpha_equivalent(&r, &more));
        }
    }
    Ok(())
}

fn normalize_printed<S: Representation>(e: &Expr) -> Result<String, FuelExhausted> {
    let mut names = Names::new();
    let t = S::from_surface(e, &mut names);
    let r = S::normalize_bounded(&t, FUEL)?;
    Ok(S::to_surface(&r, &names).unwrap().to_string())
}


proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_roundtrip_ln(e in arb_expr()) {
        roundtrip::<LocallyNameless>(&e)?;
    }

    #[test]
    fn prop_roundtrip_scoped(e in arb_expr()) {
        roundtrip::<ScopeIndexed>(&e)?;
    }

    #[test]
    fn prop_idempotent_ln(e in arb_expr()) {
        idempotent::<LocallyNameless>(&e)?;
    }

    #[test]
    fn prop_idempotent_scoped(e in arb_expr()) {
        idempotent::<ScopeIndexed>(&e)?;
    }

    #[test]
    fn prop_fuel_monotone_ln(e in arb_expr(), fuel in 0u64..300, extra in 0u64..300) {
        fuel_monotone::<LocallyNameless>(&e, fuel, extra)?;
    }

    #[test]
    fn prop_fuel_monotone_scoped(e in arb_expr(), fuel in 0u64..300, extra in 0u64..300) {
        fuel_monotone::<ScopeIndexed>(&e, fuel, extra)?;
    }

    // same algorithm on both representations: same answer, same fuel.
    #[test]
    fn prop_representations_agree(e in arb_expr()) {
        prop_assert_eq!(
            normalize_printed::<LocallyNameless>(&e),
            normalize_printed::<ScopeIndexed>(&e));
    }
}


#[test]
fn identity_is_sound() {
    // `(\x. x) t` for a few open and closed `t`.
    for source in ["a", "\\y. y a", "(\\q. q q) b", "\\p. \\q. p (\\r. r q)"] {
        let mut names = Names::new();
        let arg = parse(source).unwrap();
        let t = LocallyNameless::from_surface(&Expr::app(Expr::lam("x", Expr::var("x")), arg.clone()), &mut names);
        let expected = LocallyNameless::normalize(&LocallyNameless::from_surface(&arg, &mut names));
        assert!(LocallyNameless::alpha_equivalent(&LocallyNameless::normalize(&t), &expected));
    }
}
