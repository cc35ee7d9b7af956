//! Mutable playback state and the loop traversal rules.

use std::collections::HashMap;

use crate::anim::LoopDefinition;

/// Maximum repeat count per loop index
pub type LoopControls = HashMap<usize, u32>;

/// Everything that changes while an animation plays.
///
/// All maps start out empty; [`Player::set_animation`](super::Player::set_animation)
/// replaces the whole state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
	pub(crate) animation: String,
	pub(crate) frame_index: usize,
	pub(crate) loop_controls: LoopControls,
	pub(crate) loop_counters: HashMap<usize, u32>,
	pub(crate) active_loop_positions: HashMap<usize, usize>,
	pub(crate) terminal: bool,
	pub(crate) finished: bool,
}

impl PlaybackState {
	/// Fresh state at frame 0 of `animation`
	pub fn new(animation: impl Into<String>, loop_controls: LoopControls) -> Self {
		Self {
			animation: animation.into(),
			frame_index: 0,
			loop_controls,
			loop_counters: HashMap::new(),
			active_loop_positions: HashMap::new(),
			terminal: false,
			finished: false,
		}
	}

	/// Name of the current animation
	pub fn animation(&self) -> &str {
		&self.animation
	}

	/// Position of the active frame
	pub fn frame_index(&self) -> usize {
		self.frame_index
	}

	/// Repeat budget per loop index
	pub fn loop_controls(&self) -> &LoopControls {
		&self.loop_controls
	}

	/// Passes started so far per loop index
	pub fn loop_counters(&self) -> &HashMap<usize, u32> {
		&self.loop_counters
	}

	/// Cursor into `members` for every loop currently being traversed
	pub fn active_loop_positions(&self) -> &HashMap<usize, usize> {
		&self.active_loop_positions
	}

	/// Returns `true` once an exit has been requested
	pub fn exit_requested(&self) -> bool {
		self.terminal
	}

	/// Returns `true` once playback has reported terminal completion
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Resolves the next frame position through the loop definitions.
	///
	/// Loops are scanned in ascending index order and the first one whose entry
	/// or continuation condition holds decides the target; later loops are not
	/// looked at. Returns `None` when no loop applies.
	pub(crate) fn advance_loops(&mut self, loops: &[LoopDefinition]) -> Option<usize> {
		if self.loop_controls.is_empty() {
			return None;
		}

		for (loop_index, definition) in loops.iter().enumerate() {
			if self.frame_index == definition.entry() {
				return Some(self.enter_loop(loop_index, definition));
			}

			if self.active_loop_positions.contains_key(&loop_index)
				&& definition.contains(self.frame_index)
			{
				return Some(self.continue_loop(loop_index, definition));
			}
		}

		None
	}

	fn enter_loop(&mut self, loop_index: usize, definition: &LoopDefinition) -> usize {
		if let Some(first) = definition.first_member()
			&& self.try_start_pass(loop_index)
		{
			self.active_loop_positions.insert(loop_index, 0);
			return first;
		}

		self.active_loop_positions.remove(&loop_index);
		definition.exit()
	}

	fn continue_loop(&mut self, loop_index: usize, definition: &LoopDefinition) -> usize {
		let cursor = self.active_loop_positions.get(&loop_index).copied().unwrap_or(0);

		if !definition.is_last(cursor)
			&& let Some(next) = definition.member_at(cursor + 1)
		{
			self.active_loop_positions.insert(loop_index, cursor + 1);
			return next;
		}

		if let Some(first) = definition.first_member()
			&& self.try_start_pass(loop_index)
		{
			self.active_loop_positions.insert(loop_index, 0);
			return first;
		}

		self.active_loop_positions.remove(&loop_index);
		definition.exit()
	}

	/// Counts a new pass if the loop's budget allows it.
	///
	/// A loop without a control entry has a budget of zero.
	fn try_start_pass(&mut self, loop_index: usize) -> bool {
		let count = self.loop_counters.get(&loop_index).copied().unwrap_or(0);
		let max = self.loop_controls.get(&loop_index).copied().unwrap_or(0);
		if count < max {
			self.loop_counters.insert(loop_index, count + 1);
			true
		} else {
			false
		}
	}
}
