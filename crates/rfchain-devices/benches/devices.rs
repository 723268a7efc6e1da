//! Benchmarks for device construction and evaluation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rfchain_core::{Component, RangePolicy};
use rfchain_devices::{CryoCable, CryoCableFamily, Device, metadata};

fn bench_build_registry(c: &mut Criterion) {
    c.bench_function("build_every_registered_type", |b| {
        b.iter(|| {
            for info in metadata::registry() {
                black_box(Device::with_defaults(info.type_name).ok());
            }
        });
    });
}

fn bench_cryo_cable_noise(c: &mut Criterion) {
    let cable = CryoCable::new(CryoCableFamily::Bcb029, 0.5, 40.0).unwrap();
    let freqs: Vec<f64> = (0..10_000).map(|i| 1e6 + i as f64 * 1e6).collect();
    c.bench_function("cryo_cable_noise_10k_points", |b| {
        b.iter(|| cable.noise_sweep(black_box(&freqs), RangePolicy::Clamp).unwrap());
    });
}

criterion_group!(benches, bench_build_registry, bench_cryo_cable_noise);
criterion_main!(benches);
