//! Source descriptors for the `animations.json` catalog format.
//!
//! ```text
//! [
//!   {
//!     "Name": "Wave",
//!     "Frames": [
//!       { "Duration": 100, "ImagesOffsets": { "Column": 3, "Row": 1 }, "Sound": "15.mp3" },
//!       { "Duration": 120 }
//!     ],
//!     "Loops": [ { "LoopEntry": 2, "LoopFrames": [3, 4], "LoopExit": 5 } ]
//!   }
//! ]
//! ```
//!
//! Descriptors mirror the file one-to-one and perform no validation; that is the
//! job of [`CatalogBuilder`](super::CatalogBuilder).

use serde::{Deserialize, Serialize};

/// One animation entry of the source document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnimationDescriptor {
	/// Animation name, required by the builder
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	/// Frames in playback order, must not be empty
	#[serde(default)]
	pub frames: Vec<FrameDescriptor>,

	/// Loop definitions, addressed by position
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub loops: Vec<LoopDescriptor>,
}

impl AnimationDescriptor {
	/// Creates a named descriptor with the given frames and no loops
	pub fn new(name: impl Into<String>, frames: Vec<FrameDescriptor>) -> Self {
		Self {
			name: Some(name.into()),
			frames,
			loops: Vec::new(),
		}
	}

	/// Adds a loop descriptor
	pub fn with_loop(mut self, entry: usize, frames: Vec<usize>, exit: usize) -> Self {
		self.loops.push(LoopDescriptor {
			loop_entry: entry,
			loop_frames: frames,
			loop_exit: exit,
		});
		self
	}
}

/// One frame entry of an animation descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameDescriptor {
	/// Display time in milliseconds, the builder's default applies when absent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duration: Option<u32>,

	/// Sprite sheet cell, the previous frame's cell applies when absent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub images_offsets: Option<SpriteOffset>,

	/// Sound reference, relative to the sound root
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sound: Option<String>,
}

impl FrameDescriptor {
	/// Creates a frame at `(row, column)` lasting `duration` milliseconds
	pub fn at(row: u32, column: u32, duration: u32) -> Self {
		Self {
			duration: Some(duration),
			images_offsets: Some(SpriteOffset::new(row, column)),
			sound: None,
		}
	}

	/// Creates a frame without offset information
	pub fn without_offsets(duration: u32) -> Self {
		Self {
			duration: Some(duration),
			images_offsets: None,
			sound: None,
		}
	}

	/// Attaches a sound reference
	pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
		self.sound = Some(sound.into());
		self
	}

	/// Returns the usable `(row, column)` offset.
	///
	/// An offsets object with neither field set counts as missing.
	pub fn offset(&self) -> Option<(u32, u32)> {
		let offsets = self.images_offsets.as_ref()?;
		if offsets.row.is_none() && offsets.column.is_none() {
			return None;
		}
		Some((offsets.row.unwrap_or(0), offsets.column.unwrap_or(0)))
	}

	/// Returns the sound reference when it is present and non-empty
	pub fn sound_ref(&self) -> Option<&str> {
		self.sound.as_deref().filter(|sound| !sound.is_empty())
	}
}

/// Row/column position of a cell on the sprite sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpriteOffset {
	/// Column, defaults to 0
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub column: Option<u32>,

	/// Row, defaults to 0
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub row: Option<u32>,
}

impl SpriteOffset {
	/// Creates an offset with both fields set
	pub fn new(row: u32, column: u32) -> Self {
		Self {
			column: Some(column),
			row: Some(row),
		}
	}
}

/// One loop entry of an animation descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoopDescriptor {
	/// Frame position at which the loop is considered
	pub loop_entry: usize,
	/// Frame positions of one pass
	pub loop_frames: Vec<usize>,
	/// Frame position to continue from after the last pass
	pub loop_exit: usize,
}
