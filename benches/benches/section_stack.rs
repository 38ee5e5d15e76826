// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waymark_stack::{DecodeError, KeyCodec, SectionStack};

struct NumCodec;

impl KeyCodec<u32> for NumCodec {
    fn encode(&self, key: &u32) -> String {
        key.to_string()
    }

    fn decode(&self, raw: &str) -> Result<u32, DecodeError> {
        raw.parse().map_err(|_| DecodeError::InvalidPayload {
            raw: raw.to_string(),
        })
    }
}

/// Four sections with `n` entries each, the last one active.
fn gen_stack(n: u32) -> SectionStack<u32> {
    let mut stack = SectionStack::new(0);
    for section in 0..4 {
        stack.switch_section(section);
        for i in 0..n {
            stack.push(1000 * (section + 1) + i);
        }
    }
    stack
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_stack");
    for n in [16_u32, 256] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("push_n{n}"), |b| {
            b.iter_batched(
                || SectionStack::new(0_u32),
                |mut stack| {
                    for i in 0..n {
                        stack.push(black_box(i));
                    }
                    stack
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("pop_to_root_n{n}"), |b| {
            b.iter_batched(
                || gen_stack(n),
                |mut stack| {
                    while stack.pop_last().changed() {}
                    stack
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for n in [16_u32, 256] {
        let stack = gen_stack(n);
        let snap = stack.snapshot(&NumCodec);
        group.bench_function(format!("snapshot_n{n}"), |b| {
            b.iter(|| black_box(&stack).snapshot(&NumCodec));
        });
        group.bench_function(format!("restore_n{n}"), |b| {
            b.iter(|| SectionStack::<u32>::restore(black_box(&snap), &NumCodec));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_snapshot);
criterion_main!(benches);
