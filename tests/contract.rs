use lambind::syntax::{parse, Expr};
use lambind::{FuelExhausted, LocallyNameless, Names, ScopeIndexed, Strategy};


fn load<S: Strategy>(source: &str, names: &mut Names) -> S::Term {
    S::from_surface(&parse(source).unwrap(), names)
}

fn normalize_to_source<S: Strategy>(source: &str) -> String {
    let mut names = Names::new();
    let t = load::<S>(source, &mut names);
    let r = S::normalize(&t);
    S::to_surface(&r, &names).unwrap().to_string()
}

fn alpha_eq_sources<S: Strategy>(a: &str, b: &str) -> bool {
    let mut names = Names::new();
    let a = load::<S>(a, &mut names);
    let b = load::<S>(b, &mut names);
    S::alpha_equivalent(&a, &b)
}


const OMEGA: &str = "(\\x. x x) (\\x. x x)";


fn k_applied<S: Strategy>() {
    assert_eq!(normalize_to_source::<S>("(\\x. \\y. x) a b"), "a");
}

fn identity<S: Strategy>() {
    for arg in ["a", "\\z. z a", "f (g h)"] {
        let mut names = Names::new();
        let t = load::<S>(&format!("(\\x. x) ({arg})"), &mut names);
        let expected = load::<S>(arg, &mut names);
        assert!(S::alpha_equivalent(&S::normalize(&t), &expected), "{arg}");
    }
}

fn capture<S: Strategy>() {
    // the substituted `y` stays free, the binder gets another name.
    assert_eq!(normalize_to_source::<S>("(\\x. \\y. x) y"), "\\x. y");
    assert_eq!(normalize_to_source::<S>("(\\x. \\y. y x) y"), "\\x. x y");
    assert_eq!(normalize_to_source::<S>("(\\f. \\x. f x) (\\y. x)"), "\\x'. x");
}

fn church<S: Strategy>() {
    let source = "
        let two = \\f x. f (f x);
            three = \\f x. f (f (f x));
            plus = \\m n f x. m f (n f x);
            mul = \\m n f. m (n f);
        in mul (plus two three) two";
    assert_eq!(
        normalize_to_source::<S>(source),
        "\\x. \\y. x (x (x (x (x (x (x (x (x (x y)))))))))");
}

fn alpha<S: Strategy>() {
    assert!(alpha_eq_sources::<S>("\\x. x", "\\y. y"));
    assert!(alpha_eq_sources::<S>("\\x. \\y. x y z", "\\a. \\b. a b z"));
    assert!(!alpha_eq_sources::<S>("\\x. \\y. x", "\\x. \\y. y"));
    assert!(!alpha_eq_sources::<S>("\\x. a", "\\x. b"));
    assert!(!alpha_eq_sources::<S>("\\x. x", "\\x. a"));
}

fn omega_exhausts<S: Strategy>() {
    let mut names = Names::new();
    let t = load::<S>(OMEGA, &mut names);
    for fuel in [0, 1, 7, 1000] {
        assert_eq!(S::normalize_bounded(&t, fuel).map(|_| ()), Err(FuelExhausted { fuel }));
    }
}

fn lazy_argument<S: Strategy>() {
    let mut names = Names::new();
    let t = load::<S>(&format!("(\\x. a) ({OMEGA})"), &mut names);
    let r = S::normalize_bounded(&t, 100).unwrap();
    assert_eq!(S::to_surface(&r, &names).unwrap(), Expr::var("a"));
}

fn roundtrip<S: Strategy>() {
    for source in ["\\x. \\y. x", "f (\\a. a b) c", "\\p. p (\\p. p) p", "let x = a in x"] {
        let mut names = Names::new();
        let t = load::<S>(source, &mut names);
        let back = S::to_surface(&t, &names).unwrap();
        let t2 = S::from_surface(&back, &mut names);
        assert!(S::alpha_equivalent(&t, &t2), "{source} came back as {back}");
    }
}


macro_rules! contract_tests {
    ($module:ident, $strategy:ty) => {
        mod $module {
            use super::*;

            #[test] fn k_applied()     { super::k_applied::<$strategy>() }
            #[test] fn identity()      { super::identity::<$strategy>() }
            #[test] fn capture()       { super::capture::<$strategy>() }
            #[test] fn church()        { super::church::<$strategy>() }
            #[test] fn alpha()         { super::alpha::<$strategy>() }
            #[test] fn omega_exhausts() { super::omega_exhausts::<$strategy>() }
            #[test] fn lazy_argument() { super::lazy_argument::<$strategy>() }
            #[test] fn roundtrip()     { super::roundtrip::<$strategy>() }
        }
    };
}

contract_tests!(locally_nameless, LocallyNameless);
contract_tests!(scope_indexed, ScopeIndexed);


#[test]
fn normalize_source_errors() {
    use lambind::{normalize_source, Error};

    assert_eq!(
        normalize_source::<LocallyNameless>("(\\x. x) a", 100).unwrap().to_string(), "a");
    assert!(matches!(normalize_source::<ScopeIndexed>("(a", 100), Err(Error::Parse(_))));
    assert!(matches!(normalize_source::<LocallyNameless>(OMEGA, 100), Err(Error::Fuel(_))));
}
