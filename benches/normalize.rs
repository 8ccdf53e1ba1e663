//! both representations on church numeral arithmetic.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lambind::syntax::parse;
use lambind::{LocallyNameless, Names, ScopeIndexed, Strategy};


fn church(n: u32) -> String {
    let mut body = "x".to_string();
    for _ in 0..n {
        body = format!("f ({body})");
    }
    format!("(\\f x. {body})")
}

fn mul_source(n: u32) -> String {
    format!("let mul = \\m n f. m (n f); in mul {} {}", church(n), church(n))
}

fn pow_source(n: u32) -> String {
    format!("(\\b e. e b) {} {}", church(2), church(n))
}

fn bench_one<S: Strategy>(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>, source: &str, n: u32) {
    let e = parse(source).unwrap();
    let mut names = Names::new();
    let t = S::from_surface(&e, &mut names);

    group.bench_with_input(BenchmarkId::new(S::NAME, n), &t, |b, t| {
        b.iter(|| S::normalize(black_box(t)));
    });
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("church_mul");
    for n in [5, 10, 20] {
        let source = mul_source(n);
        bench_one::<LocallyNameless>(&mut group, &source, n);
        bench_one::<ScopeIndexed>(&mut group, &source, n);
    }
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("church_pow");
    for n in [4, 6, 8] {
        let source = pow_source(n);
        bench_one::<LocallyNameless>(&mut group, &source, n);
        bench_one::<ScopeIndexed>(&mut group, &source, n);
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let source = mul_source(20);
    let e = parse(&source).unwrap();

    group.bench_function(LocallyNameless::NAME, |b| b.iter(|| {
        let mut names = Names::new();
        let t = LocallyNameless::from_surface(black_box(&e), &mut names);
        LocallyNameless::to_surface(&t, &names).unwrap()
    }));
    group.bench_function(ScopeIndexed::NAME, |b| b.iter(|| {
        let mut names = Names::new();
        let t = ScopeIndexed::from_surface(black_box(&e), &mut names);
        ScopeIndexed::to_surface(&t, &names).unwrap()
    }));
    group.finish();
}

criterion_group!(benches, bench_mul, bench_pow, bench_roundtrip);
criterion_main!(benches);
