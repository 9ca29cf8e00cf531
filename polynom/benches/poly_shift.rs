use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use polynom::math::other::random_elements;
use polynom::prelude::*;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = poly_shift<5>,
              poly_shift<10>,
              poly_shift<15>,
              poly_shift<20>,
);

fn poly_shift<const LOG2_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("Shift Polynomials of Degree 2^{LOG2_SIZE}"));

    let poly = Polynomial::from_coefficients(random_elements((1 << LOG2_SIZE) + 1));
    let mut output = Polynomial::with_capacity((1 << LOG2_SIZE) + 17);

    group.bench_function(BenchmarkId::new("up by 16", LOG2_SIZE), |b| {
        b.iter(|| output.set_shifted(&poly, 16))
    });

    group.bench_function(BenchmarkId::new("down by 16", LOG2_SIZE), |b| {
        b.iter(|| output.set_shifted(&poly, -16))
    });

    let mut in_place = poly.clone();
    group.bench_function(BenchmarkId::new("in place, up and down", LOG2_SIZE), |b| {
        b.iter(|| {
            in_place.shift_coefficients_mut(16);
            in_place.shift_coefficients_mut(-16);
        })
    });

    group.finish();
}
