// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dtif_viewport::{CanvasFrame, Dimensions, apply_fit, fit_viewport};

fn bench_viewport(c: &mut Criterion) {
    let content = Dimensions::new(1440.0, 1024.0);

    // Simulates a drag-resize: one fit per frame across a range of widths.
    let containers: Vec<Dimensions> = (0..1_000)
        .map(|i| Dimensions::new(320.0 + f64::from(i) * 2.5, 720.0))
        .collect();

    c.bench_function("viewport/fit_resize_sweep", |b| {
        b.iter(|| {
            for container in &containers {
                black_box(fit_viewport(black_box(*container), content));
            }
        });
    });

    c.bench_function("viewport/apply_resize_sweep", |b| {
        b.iter(|| {
            let mut frame = CanvasFrame::new(content);
            for container in &containers {
                apply_fit(&mut frame, *container, content);
            }
            black_box(frame);
        });
    });
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
