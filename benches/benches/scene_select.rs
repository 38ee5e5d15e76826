// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use waymark_scene::{
    BackPolicy, Entry, EntryMeta, SceneSelector, SceneStrategy, WidthClass, plan_back,
};

const LIST: EntryMeta = EntryMeta::list_pane("home")
    .with_bottom_bar()
    .with_detail_placeholder();
const DETAIL: EntryMeta = EntryMeta::detail_pane("home");
const EXTRA: EntryMeta = EntryMeta::extra_pane("home");

/// A long list-detail run: one list, then alternating details and extras.
fn gen_run(n: usize) -> Vec<Entry<u32>> {
    let mut out = Vec::with_capacity(n + 1);
    out.push(Entry::new(0, LIST));
    for i in 1..=n {
        let meta = if i % 3 == 0 { EXTRA } else { DETAIL };
        out.push(Entry::new(i as u32, meta));
    }
    out
}

/// Many short groups ending in an overlay, so the selector peels layers.
fn gen_mixed(n: usize) -> Vec<Entry<u32>> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let meta = match i % 5 {
            0 => EntryMeta::list_pane("a"),
            1 => EntryMeta::detail_pane("a"),
            2 => EntryMeta::NONE.two_pane(),
            3 => EntryMeta::NONE.two_pane().with_placeholder(),
            _ => EntryMeta::overlay(),
        };
        out.push(Entry::new(i as u32, meta));
    }
    out
}

fn bench_select(c: &mut Criterion) {
    let selector = SceneSelector::default();
    let mut group = c.benchmark_group("select");
    for n in [4_usize, 64, 1024] {
        let run = gen_run(n);
        group.throughput(Throughput::Elements(run.len() as u64));
        for width in [WidthClass::Compact, WidthClass::Expanded] {
            group.bench_function(format!("list_detail_n{n}_{width:?}"), |b| {
                b.iter(|| selector.calculate(black_box(&run), width));
            });
        }
        let mixed = gen_mixed(n);
        group.bench_function(format!("layers_mixed_n{n}"), |b| {
            b.iter(|| selector.select_layers(black_box(&mixed), WidthClass::Medium));
        });
    }
    group.finish();
}

fn bench_plan_back(c: &mut Criterion) {
    let selector = SceneSelector::default();
    let mut group = c.benchmark_group("plan_back");
    for n in [4_usize, 64, 1024] {
        let run = gen_run(n);
        let Some(scene) = selector.select(&run, WidthClass::Expanded) else {
            continue;
        };
        for policy in [
            BackPolicy::PopLatest,
            BackPolicy::PopUntilSceneValueChange,
            BackPolicy::PopUntilContentChange,
        ] {
            group.bench_function(format!("{policy:?}_n{n}"), |b| {
                b.iter(|| plan_back(black_box(&run), &scene, policy));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_plan_back);
criterion_main!(benches);
