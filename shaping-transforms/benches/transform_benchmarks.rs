//! Benchmarks for the reward transform family

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shaping_core::RewardTransform;
use shaping_transforms::{
    AbsoluteReward, LinearClippedReward, NegExpReward, SigmoidReward, SoftPlusReward,
};

fn bench_apply(c: &mut Criterion) {
    let errors: Vec<f64> = (0..1024).map(|i| f64::from(i) * 0.01 - 5.0).collect();

    let mut group = c.benchmark_group("apply_1024");

    let absolute = AbsoluteReward;
    group.bench_function("absolute", |b| {
        b.iter(|| absolute.apply(black_box(&errors)));
    });

    let linear = LinearClippedReward::new(5.0, 0.0);
    group.bench_function("linear_clipped", |b| {
        b.iter(|| linear.apply(black_box(&errors)));
    });

    let soft_plus = SoftPlusReward::new(5.0, 0.0);
    group.bench_function("soft_plus", |b| {
        b.iter(|| soft_plus.apply(black_box(&errors)));
    });

    let neg_exp = NegExpReward::new(5.0, 0.0);
    group.bench_function("neg_exp", |b| {
        b.iter(|| neg_exp.apply(black_box(&errors)));
    });

    let sigmoid = SigmoidReward::new(5.0, 0.0);
    group.bench_function("sigmoid", |b| {
        b.iter(|| sigmoid.apply(black_box(&errors)));
    });

    group.finish();
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
