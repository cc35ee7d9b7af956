//! Values handed to the renderer, audio and timer collaborators after a tick.

use std::time::Duration;

use crate::anim::{Frame, SoundId};

/// The frame that became active after a tick or an animation change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEvent {
	/// Position of the frame within its animation
	pub frame_index: usize,
	/// Flat sprite sheet index to draw
	pub sprite_index: u32,
	/// How long the frame stays on screen
	pub duration: Duration,
	/// Sound cue to play, if the frame has one
	pub sound: Option<SoundId>,
}

impl FrameEvent {
	pub(crate) fn from_frame(frame_index: usize, frame: &Frame) -> Self {
		Self {
			frame_index,
			sprite_index: frame.sprite_index(),
			duration: frame.duration(),
			sound: frame.sound().cloned(),
		}
	}
}

/// Result of a single [`Player::tick`](super::Player::tick)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
	/// A frame is active, draw it and re-arm the timer
	Frame(FrameEvent),
	/// An exit was requested and the animation ran out; stop driving the player
	Terminated,
}

impl TickOutcome {
	/// Returns the frame event, `None` on termination
	pub fn frame(&self) -> Option<&FrameEvent> {
		match self {
			Self::Frame(event) => Some(event),
			Self::Terminated => None,
		}
	}

	/// Returns `true` for [`TickOutcome::Terminated`]
	pub fn is_terminated(&self) -> bool {
		matches!(self, Self::Terminated)
	}
}
