#[macro_use]
extern crate criterion;

use beamline_rs::distribution::{self, Gaussian};
use beamline_rs::elements::{Alignment, BeamOptic, Drift, FocusingUnit, TaperedPL};
use beamline_rs::{ParticleContainer, RefPart};
use criterion::Criterion;

fn setup() -> (ParticleContainer, RefPart) {
    let refpart = RefPart::new(938.272088, 1.0, 250.0).unwrap();
    let mut dist = Gaussian::new(1e-3, 1e-3, 1e-3, 1e-4, 1e-4, 1e-4, 0.0, 0.0, 0.0).unwrap();
    let mut pc = ParticleContainer::new(1_000_000);
    distribution::seed(&mut dist, &mut pc, 1e-9, &refpart, 1).unwrap();
    (pc, refpart)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (mut pc, refpart) = setup();
    let lens = TaperedPL::new(0.5, 10.0, FocusingUnit::Tesla, Alignment::new(1e-4, 0.0, 1.0)).unwrap();
    c.bench_function("tapered_pl 1M", move |b| {
        b.iter(|| lens.push(&mut pc, &refpart).unwrap())
    });

    let (mut pc, refpart) = setup();
    let drift = Drift::new(1.0, 1, Alignment::default()).unwrap();
    c.bench_function("drift 1M", move |b| {
        b.iter(|| drift.push(&mut pc, &refpart).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
