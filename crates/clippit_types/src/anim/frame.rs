//! Frame types for catalog animations.
//!
//! A [`Frame`] is one displayable sprite-sheet cell plus its display time and an
//! optional sound cue. Frames are immutable once the catalog is built.

use std::{fmt, sync::Arc, time::Duration};

/// Opaque identifier of a sound cue handed to the audio collaborator.
///
/// The catalog resolves it against the configured sound root, the engine itself
/// never opens it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundId(Arc<str>);

impl SoundId {
	/// Creates a new sound identifier
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier as a string slice
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for SoundId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for SoundId {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl AsRef<str> for SoundId {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for SoundId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A single resolved animation frame.
///
/// # Examples
///
/// ```
/// use clippit_types::anim::{Frame, SoundId};
///
/// let frame = Frame::new(28, 100, Some(SoundId::from("15.mp3")));
/// assert_eq!(frame.sprite_index(), 28);
/// assert_eq!(frame.duration_ms(), 100);
/// assert_eq!(frame.sound().map(SoundId::as_str), Some("15.mp3"));
///
/// // Durations are never zero
/// assert_eq!(Frame::new(0, 0, None).duration_ms(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	sprite_index: u32,
	duration_ms: u32,
	sound: Option<SoundId>,
}

impl Frame {
	/// Creates a frame. A zero duration is raised to one millisecond.
	pub fn new(sprite_index: u32, duration_ms: u32, sound: Option<SoundId>) -> Self {
		Self {
			sprite_index,
			duration_ms: duration_ms.max(1),
			sound,
		}
	}

	/// Flat sprite index (`row * columns + col`)
	pub fn sprite_index(&self) -> u32 {
		self.sprite_index
	}

	/// Display time in milliseconds
	pub fn duration_ms(&self) -> u32 {
		self.duration_ms
	}

	/// Display time as a [`Duration`]
	pub fn duration(&self) -> Duration {
		Duration::from_millis(u64::from(self.duration_ms))
	}

	/// Sound cue played when this frame becomes active
	pub fn sound(&self) -> Option<&SoundId> {
		self.sound.as_ref()
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.sound {
			Some(sound) => {
				write!(f, "Frame(sprite={}, dur={}, sound={})", self.sprite_index, self.duration_ms, sound)
			}
			None => write!(f, "Frame(sprite={}, dur={})", self.sprite_index, self.duration_ms),
		}
	}
}
