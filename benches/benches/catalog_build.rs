//! Benchmark suite for catalog construction
//!
//! Measures JSON parsing plus validation of synthetic catalogs, separating the
//! build step from deserialization.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench catalog_build

use std::hint::black_box;

use clippit_benches::{generate_catalog_json, generate_descriptors};
use clippit_types::anim::{CatalogBuilder, SheetLayout};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark building from JSON text
fn bench_build_from_json(c: &mut Criterion) {
	let mut group = c.benchmark_group("catalog_build_json");
	let builder = CatalogBuilder::new(SheetLayout::default());

	for count in [16usize, 64, 256] {
		let json = generate_catalog_json(count, 12);
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("animations", count), &json, |b, json| {
			b.iter(|| black_box(builder.build_from_json_str(black_box(json))));
		});
	}

	group.finish();
}

/// Benchmark building from already deserialized descriptors
fn bench_build_from_descriptors(c: &mut Criterion) {
	let mut group = c.benchmark_group("catalog_build_descriptors");
	let builder = CatalogBuilder::new(SheetLayout::default()).sound_root("assets");

	for count in [16usize, 64, 256] {
		let descriptors = generate_descriptors(count, 12);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("animations", count), &descriptors, |b, descriptors| {
			b.iter(|| black_box(builder.build(descriptors.clone())));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_build_from_json, bench_build_from_descriptors);
criterion_main!(benches);
