// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dtif_transform::{
    FlatMatrix, build_transform, decompose_degrees, decompose_radians, recompose_degrees,
};

fn matrices(n: usize) -> Vec<FlatMatrix> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            build_transform(f * 3.0, -f, (f * 7.5) % 360.0)
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for len in [64_usize, 1_024, 16_384] {
        let ms = matrices(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("build", len), &len, |b, &len| {
            b.iter(|| {
                for i in 0..len {
                    let f = i as f64;
                    black_box(build_transform(f, f, f));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("decompose_radians", len), &ms, |b, ms| {
            b.iter(|| {
                for m in ms {
                    black_box(decompose_radians(m));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("decompose_degrees", len), &ms, |b, ms| {
            b.iter(|| {
                for m in ms {
                    black_box(decompose_degrees(m));
                }
            });
        });

        // Read-edit-write cycle a property panel performs per node.
        group.bench_with_input(BenchmarkId::new("edit_cycle", len), &ms, |b, ms| {
            b.iter(|| {
                for m in ms {
                    let mut t = decompose_degrees(m);
                    t.rotation += 1.0;
                    black_box(recompose_degrees(&t));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
