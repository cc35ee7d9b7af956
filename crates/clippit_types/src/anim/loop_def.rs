//! Loop definitions: repeatable sub-sequences inside an animation.

use std::fmt;

/// A repeatable sub-sequence of frame positions.
///
/// Playback considers entering the loop when it sits on [`entry`](Self::entry),
/// walks [`members`](Self::members) in order for one pass, and jumps to
/// [`exit`](Self::exit) once the repeat budget is used up. Loops are addressed by
/// their position in the animation's loop list.
///
/// # Examples
///
/// ```
/// use clippit_types::anim::LoopDefinition;
///
/// let def = LoopDefinition::new(2, vec![3, 4], 5);
/// assert_eq!(def.first_member(), Some(3));
/// assert!(def.contains(4));
/// assert!(def.is_within(6));
/// assert!(!def.is_within(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopDefinition {
	entry: usize,
	members: Vec<usize>,
	exit: usize,
}

impl LoopDefinition {
	/// Creates a loop definition from raw frame positions
	pub fn new(entry: usize, members: Vec<usize>, exit: usize) -> Self {
		Self {
			entry,
			members,
			exit,
		}
	}

	/// Frame position at which the loop is first considered
	pub fn entry(&self) -> usize {
		self.entry
	}

	/// Frame positions of one pass, in traversal order
	pub fn members(&self) -> &[usize] {
		&self.members
	}

	/// Frame position to jump to once the repeat budget is exhausted
	pub fn exit(&self) -> usize {
		self.exit
	}

	/// First member frame, `None` for an empty loop body
	pub fn first_member(&self) -> Option<usize> {
		self.members.first().copied()
	}

	/// Member frame at `cursor`
	pub fn member_at(&self, cursor: usize) -> Option<usize> {
		self.members.get(cursor).copied()
	}

	/// Returns `true` if `cursor` points at the last member frame
	pub fn is_last(&self, cursor: usize) -> bool {
		cursor + 1 >= self.members.len()
	}

	/// Returns `true` if `frame` is one of the member frames
	pub fn contains(&self, frame: usize) -> bool {
		self.members.contains(&frame)
	}

	/// Returns `true` if the body is non-empty and every position is below `frame_count`
	pub fn is_within(&self, frame_count: usize) -> bool {
		!self.members.is_empty()
			&& self.entry < frame_count
			&& self.exit < frame_count
			&& self.members.iter().all(|&member| member < frame_count)
	}
}

impl fmt::Display for LoopDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Loop({} -> {:?} -> {})", self.entry, self.members, self.exit)
	}
}
