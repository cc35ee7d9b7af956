//! Benchmark suite for playback ticking
//!
//! Measures the per-tick cost of the player for plain, looping and idle
//! playback, which bounds how cheaply a front-end timer can drive it.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench playback_tick

use std::{hint::black_box, sync::Arc};

use clippit_benches::generate_descriptors;
use clippit_types::{
	anim::{Catalog, SheetLayout},
	playback::{LoopControls, Player},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const TICKS: u64 = 1_000;

fn build_catalog(frames: usize) -> Arc<Catalog> {
	match Catalog::build(generate_descriptors(8, frames), SheetLayout::default()) {
		Ok(catalog) => Arc::new(catalog),
		Err(err) => panic!("synthetic catalog must build: {err}"),
	}
}

/// Benchmark ticking through animations of growing length
fn bench_tick_plain(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_tick_plain");
	group.throughput(Throughput::Elements(TICKS));

	for frames in [4usize, 32, 256] {
		let catalog = build_catalog(frames);
		group.bench_with_input(BenchmarkId::new("frames", frames), &catalog, |b, catalog| {
			b.iter(|| {
				let mut player = Player::new(Arc::clone(catalog));
				let _ = player.play("Anim0");
				for _ in 0..TICKS {
					black_box(player.tick());
				}
			});
		});
	}

	group.finish();
}

/// Benchmark ticking with loop controls set, so every tick scans loops
fn bench_tick_looping(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_tick_looping");
	group.throughput(Throughput::Elements(TICKS));

	let catalog = build_catalog(16);
	for repeats in [1u32, 100, u32::MAX] {
		group.bench_with_input(BenchmarkId::new("repeats", repeats), &repeats, |b, &repeats| {
			b.iter(|| {
				let mut player = Player::new(Arc::clone(&catalog));
				let controls = LoopControls::from([(0, repeats)]);
				let _ = player.set_animation("Anim0", controls);
				for _ in 0..TICKS {
					black_box(player.tick());
				}
			});
		});
	}

	group.finish();
}

/// Benchmark the resting case: a single-frame idle animation wrapping onto itself
fn bench_tick_idle(c: &mut Criterion) {
	let catalog = build_catalog(4);

	c.bench_function("playback_tick_idle", |b| {
		let mut player = Player::new(Arc::clone(&catalog));
		b.iter(|| black_box(player.tick()));
	});
}

criterion_group!(benches, bench_tick_plain, bench_tick_looping, bench_tick_idle);
criterion_main!(benches);
