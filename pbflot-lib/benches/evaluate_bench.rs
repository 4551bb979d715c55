use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pbflot::{CurveSet, IronModel, Lever, OperatingPoint, PerformanceModel};

fn bench_interpolate(c: &mut Criterion) {
    let curves = CurveSet::default();

    c.bench_function("interpolate_smbs_interior", |b| {
        b.iter(|| black_box(curves.smbs.interpolate(black_box(137.5))));
    });

    c.bench_function("interpolate_ph_clamped", |b| {
        b.iter(|| black_box(curves.ph.interpolate(black_box(11.0))));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let basic = PerformanceModel::default();
    let extended =
        PerformanceModel::new(CurveSet::default(), IronModel::DepressionPlusActivation).unwrap();
    let point = OperatingPoint::new(80.0, 60.0, 150.0, 9.0, 200.0, 11.0, 4.5, 10.5);

    c.bench_function("evaluate_depression_only", |b| {
        b.iter(|| black_box(basic.evaluate(black_box(&point))));
    });

    c.bench_function("evaluate_depression_plus_activation", |b| {
        b.iter(|| black_box(extended.evaluate(black_box(&point))));
    });
}

fn bench_sweep(c: &mut Criterion) {
    let model = PerformanceModel::default();
    let base = OperatingPoint::default();

    c.bench_function("sweep_smbs_30", |b| {
        b.iter(|| black_box(model.sweep_domain(black_box(&base), Lever::Smbs, 30)));
    });
}

criterion_group!(benches, bench_interpolate, bench_evaluate, bench_sweep);
criterion_main!(benches);
