use criterion::{criterion_group, criterion_main, Criterion};
use rust_kzg_bls12_381_primitives::polynomial::CoefficientForm;
use rust_kzg_bls12_381_prover::{kzg::commit, srs::ReferenceString};
use std::time::Duration;

fn bench_kzg_commit(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (commit_key, _) = ReferenceString::setup(1 << 14, &mut rng)
        .unwrap()
        .trim(1 << 14)
        .unwrap();

    for degree in [1023usize, 4095, 16383] {
        let polynomial = CoefficientForm::random(degree, &mut rng);
        c.bench_function(&format!("bench_kzg_commit_{}", degree + 1), |b| {
            b.iter(|| commit(&commit_key, &polynomial).unwrap());
        });
    }
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_commit
);
criterion_main!(benches);
