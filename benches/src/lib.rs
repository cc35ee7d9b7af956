//! Benchmark helper utilities for clippit-rs
//!
//! This module generates synthetic catalogs shaped like the stock assistant
//! data: a single-frame `Idle` animation plus a set of animations with one
//! bounded loop near the middle of each.

use clippit_types::anim::{AnimationDescriptor, FrameDescriptor};

/// Number of sprite columns in generated offsets
const COLUMNS: u32 = 27;

/// Generates `count` looping animations of `frames` frames each, plus `Idle`
///
/// Animation `i` is named `Anim{i}`. Every animation with at least four frames
/// loops over frames `1..=2` with entry 1 and exit 3. Every third frame has no
/// offsets so the builder has to carry the previous one forward.
pub fn generate_descriptors(count: usize, frames: usize) -> Vec<AnimationDescriptor> {
	let mut descriptors = Vec::with_capacity(count + 1);
	descriptors.push(AnimationDescriptor::new("Idle", vec![FrameDescriptor::at(0, 0, 1000)]));

	for index in 0..count {
		let frame_list = (0..frames)
			.map(|frame| {
				let cell = (index * frames + frame) as u32;
				let descriptor = if frame % 3 == 2 {
					FrameDescriptor::without_offsets(100)
				} else {
					FrameDescriptor::at(cell / COLUMNS, cell % COLUMNS, 100)
				};

				if frame == 0 {
					descriptor.with_sound(format!("{index}.mp3"))
				} else {
					descriptor
				}
			})
			.collect();

		let mut descriptor = AnimationDescriptor::new(format!("Anim{index}"), frame_list);
		if frames >= 4 {
			descriptor = descriptor.with_loop(1, vec![1, 2], 3);
		}
		descriptors.push(descriptor);
	}

	descriptors
}

/// Serializes generated descriptors as an `animations.json` document
pub fn generate_catalog_json(count: usize, frames: usize) -> String {
	serde_json::to_string(&generate_descriptors(count, frames))
		.unwrap_or_else(|_| String::from("[]"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_json_builds() {
		let json = generate_catalog_json(4, 6);
		let catalog = clippit_types::anim::Catalog::from_json_str(&json, Default::default()).unwrap();
		assert_eq!(catalog.len(), 5);
		assert!(catalog.warnings().iter().all(|w| !matches!(
			w,
			clippit_types::anim::CatalogWarning::MalformedLoop { .. }
		)));
	}
}
