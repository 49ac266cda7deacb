use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cctag::{MarkerBank, MarkerFamily};

/// Observation a little off every entry, so each scan runs to the end.
fn perturbed(bank: &MarkerBank) -> Vec<Vec<f32>> {
    bank.signatures()
        .enumerate()
        .map(|(k, sig)| {
            sig.iter()
                .enumerate()
                .map(|(j, v)| v + if (j + k) % 2 == 0 { 0.01 } else { -0.01 })
                .collect()
        })
        .collect()
}

fn bench_identify(c: &mut Criterion) {
    for family in [MarkerFamily::ThreeRings, MarkerFamily::FourRings] {
        let bank = MarkerBank::from_family(family);
        let observations = perturbed(&bank);

        c.bench_function(&format!("identify_{}_rings", family.ring_count()), |b| {
            b.iter(|| {
                for obs in &observations {
                    let _ = black_box(bank.identify(black_box(obs)));
                }
            })
        });
    }

    let bank = MarkerBank::from_family(MarkerFamily::FourRings);
    let far = [20.0f32; 7];
    c.bench_function("identify_reject_4_rings", |b| {
        b.iter(|| black_box(bank.identify(black_box(&far))))
    });
}

criterion_group!(benches, bench_identify);
criterion_main!(benches);
