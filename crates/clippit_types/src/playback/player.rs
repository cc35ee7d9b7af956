//! The playback state machine.

use std::{sync::Arc, time::Duration};

use log::{debug, info, trace, warn};

use crate::anim::{
	Animation, Catalog, Frame, PlaybackError, PlaybackWarning, constants,
};

use super::{
	event::{FrameEvent, TickOutcome},
	state::{LoopControls, PlaybackState},
};

/// Drives one character through the animations of a [`Catalog`].
///
/// The player is the only mutable piece of the engine. A single timer source
/// calls [`tick`](Self::tick) once per frame, waiting [`next_delay`](Self::next_delay)
/// between calls; `&mut self` keeps calls serialized.
///
/// # Examples
///
/// ```
/// use std::{collections::HashMap, sync::Arc};
///
/// use clippit_types::anim::{AnimationDescriptor, Catalog, FrameDescriptor, SheetLayout};
/// use clippit_types::playback::{Player, TickOutcome};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = (0..6).map(|col| FrameDescriptor::at(0, col, 100)).collect();
/// let look = AnimationDescriptor::new("LookRight", frames).with_loop(2, vec![3, 4], 5);
/// let catalog = Arc::new(Catalog::build(vec![look], SheetLayout::default())?);
///
/// let mut player = Player::new(catalog);
/// player.set_animation("LookRight", HashMap::from([(0, 2)]))?;
///
/// let mut seen = vec![player.frame_index()];
/// for _ in 0..7 {
///     if let TickOutcome::Frame(event) = player.tick() {
///         seen.push(event.frame_index);
///     }
/// }
/// assert_eq!(seen, vec![0, 1, 2, 3, 4, 3, 4, 5]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Player {
	catalog: Arc<Catalog>,
	animation: Arc<Animation>,
	state: PlaybackState,
	min_frame_delay: Duration,
}

impl Player {
	/// Creates a player resting on the catalog's idle animation
	pub fn new(catalog: Arc<Catalog>) -> Self {
		let animation = catalog.idle();
		let state = PlaybackState::new(animation.name(), LoopControls::new());
		Self {
			catalog,
			animation,
			state,
			min_frame_delay: Duration::from_millis(u64::from(constants::MIN_FRAME_DELAY_MS)),
		}
	}

	/// Sets the lower bound applied by [`next_delay`](Self::next_delay)
	pub fn with_min_frame_delay(mut self, delay: Duration) -> Self {
		self.min_frame_delay = delay;
		self
	}

	/// Switches to animation `name` with the given loop repeat budgets.
	///
	/// Playback restarts at frame 0 with empty counters and a cleared exit
	/// request. Control entries naming loops the animation does not define are
	/// reported and otherwise ignored.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::AnimationNotFound`] if the catalog has no such
	/// animation; the current animation keeps playing.
	pub fn set_animation(
		&mut self,
		name: &str,
		loop_controls: LoopControls,
	) -> Result<Vec<PlaybackWarning>, PlaybackError> {
		let Some(animation) = self.catalog.get_shared(name) else {
			warn!("Could not find animation {name:?}");
			return Err(PlaybackError::AnimationNotFound {
				name: name.to_string(),
			});
		};

		let loop_count = animation.loops().len();
		let mut unknown: Vec<usize> =
			loop_controls.keys().copied().filter(|&index| index >= loop_count).collect();
		unknown.sort_unstable();

		let warnings: Vec<PlaybackWarning> = unknown
			.into_iter()
			.map(|loop_index| PlaybackWarning::LoopIndex {
				animation: name.to_string(),
				loop_index,
				loop_count,
			})
			.collect();
		for warning in &warnings {
			warn!("{warning}");
		}

		debug!("Playing animation {name:?} with loop controls {loop_controls:?}");
		self.animation = animation;
		self.state = PlaybackState::new(name, loop_controls);

		Ok(warnings)
	}

	/// Switches to animation `name` without loop controls.
	///
	/// # Errors
	///
	/// See [`set_animation`](Self::set_animation).
	pub fn play(&mut self, name: &str) -> Result<(), PlaybackError> {
		self.set_animation(name, LoopControls::new()).map(|_| ())
	}

	/// Advances playback by one frame step.
	///
	/// Loops are resolved first; when no loop applies and the animation runs
	/// out, playback either terminates (exit requested), falls back to frame 0
	/// of the idle animation, or wraps around when already idle.
	pub fn tick(&mut self) -> TickOutcome {
		if self.state.finished {
			return TickOutcome::Terminated;
		}

		let frame_count = self.animation.len();
		let looped = self.state.advance_loops(self.animation.loops());
		let next = looped.unwrap_or(self.state.frame_index + 1);

		if next < frame_count {
			self.state.frame_index = next;
		} else {
			if looped.is_some() {
				warn!(
					"Loop target {next} is outside animation {:?} ({frame_count} frames)",
					self.state.animation
				);
			}

			if self.state.terminal {
				info!("Animation {:?} finished with exit pending", self.state.animation);
				self.state.finished = true;
				return TickOutcome::Terminated;
			}

			if self.state.animation == self.catalog.idle_name() {
				self.state.frame_index = 0;
			} else {
				debug!("Animation {:?} finished, returning to idle", self.state.animation);
				self.animation = self.catalog.idle();
				self.state = PlaybackState::new(self.animation.name(), LoopControls::new());
			}
		}

		trace!("{:?} -> frame {}", self.state.animation, self.state.frame_index);
		TickOutcome::Frame(self.current_event())
	}

	/// Requests an exit at the next natural end of the current animation
	pub fn request_exit(&mut self) {
		debug!("Exit requested during {:?}", self.state.animation);
		self.state.terminal = true;
	}

	/// Event describing the currently active frame
	pub fn current_event(&self) -> FrameEvent {
		FrameEvent::from_frame(self.state.frame_index, self.current_frame())
	}

	/// The active frame
	pub fn current_frame(&self) -> &Frame {
		&self.animation.frames()[self.state.frame_index]
	}

	/// Delay before the next tick: the active frame's duration, never below the minimum
	pub fn next_delay(&self) -> Duration {
		self.current_frame().duration().max(self.min_frame_delay)
	}

	/// Name of the current animation
	pub fn current_animation(&self) -> &str {
		&self.state.animation
	}

	/// Position of the active frame
	pub fn frame_index(&self) -> usize {
		self.state.frame_index
	}

	/// Returns `true` while the idle animation is playing
	pub fn is_idle(&self) -> bool {
		self.state.animation == self.catalog.idle_name()
	}

	/// Returns `true` once an exit has been requested
	pub fn exit_requested(&self) -> bool {
		self.state.terminal
	}

	/// Returns `true` once playback has reported termination
	pub fn is_terminated(&self) -> bool {
		self.state.finished
	}

	/// Full playback state
	pub fn state(&self) -> &PlaybackState {
		&self.state
	}

	/// The catalog this player reads from
	pub fn catalog(&self) -> &Arc<Catalog> {
		&self.catalog
	}
}
