#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use gar_cga::geometry::{
    are_intersected, circle, intersection, is_point_in_circle, line, point, split_point_pair,
};
use gar_cga::{Blade, Multivector};

fn full() -> Multivector {
    Blade::ALL
        .into_iter()
        .zip(1..)
        .map(|(blade, i)| (blade, f64::from(i) * 0.25))
        .collect()
}

pub fn products_bench(c: &mut Criterion) {
    let a = full();
    let b = full().reverse();
    let mut group = c.benchmark_group("full");
    group.bench_function("geometric", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
    group.bench_function("outer", |bencher| {
        bencher.iter(|| black_box(&a) ^ black_box(&b));
    });
    group.bench_function("inner", |bencher| {
        bencher.iter(|| black_box(&a) | black_box(&b));
    });
    group.bench_function("dual", |bencher| {
        bencher.iter(|| black_box(&a).dual());
    });
    group.finish();

    let p = point(1.0, 2.0);
    let q = point(-3.0, 5.0);
    let mut group = c.benchmark_group("blade");
    group.bench_function("point ^ point", |bencher| {
        bencher.iter(|| black_box(&p) ^ black_box(&q));
    });
    group.bench_function("point * point", |bencher| {
        bencher.iter(|| black_box(&p) * black_box(&q));
    });
    group.finish();
}

pub fn geometry_bench(c: &mut Criterion) {
    let occluder = circle(0.0, 0.0, 10.0);
    let ray = line(&point(-20.0, 1.0), &point(20.0, 3.0));

    c.bench_function("intersection: line and circle", |b| {
        b.iter(|| intersection(black_box(&ray), black_box(&occluder)));
    });
    c.bench_function("are_intersected", |b| {
        b.iter(|| are_intersected(black_box(&ray), black_box(&occluder)));
    });
    c.bench_function("split_point_pair", |b| {
        b.iter_batched_ref(
            || intersection(&ray, &occluder),
            |pp| split_point_pair(pp),
            BatchSize::SmallInput,
        );
    });
    c.bench_function("is_point_in_circle", |b| {
        b.iter(|| is_point_in_circle(black_box(&point(3.0, 4.0)), black_box(&occluder)));
    });
}

criterion_group!(benches, products_bench, geometry_bench);
criterion_main!(benches);
