//! Error and warning types for catalog construction and playback.

use std::fmt;

use thiserror::Error;

/// Errors that abort catalog construction
#[derive(Debug, Error)]
pub enum CatalogError {
	/// An animation descriptor is unusable (missing name or zero frames)
	#[error("Invalid animation descriptor #{index}: {message}")]
	InvalidCatalog {
		/// Position of the descriptor in the source list
		index: usize,
		/// Description of the problem
		message: String,
	},

	/// The source document is not valid catalog JSON
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl CatalogError {
	/// Creates an `InvalidCatalog` error
	pub fn invalid(index: usize, message: impl Into<String>) -> Self {
		Self::InvalidCatalog {
			index,
			message: message.into(),
		}
	}
}

/// Errors reported by the playback state machine.
///
/// All of them are recoverable: the player state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
	/// The requested animation is not part of the catalog
	#[error("Could not find animation {name:?}")]
	AnimationNotFound {
		/// Requested animation name
		name: String,
	},

	/// A roster used to pick a random animation has no entries
	#[error("The {kind} roster is empty")]
	EmptyRoster {
		/// Which roster was consulted
		kind: &'static str,
	},
}

/// Errors produced while loading the engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration sources could not be read or deserialized
	#[error(transparent)]
	Source(#[from] config::ConfigError),

	/// The configuration was read but holds inconsistent values
	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

/// Advisory conditions found while building a catalog.
///
/// These never fail the build; they are logged and kept on the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
	/// A frame had no sprite offset and reused the previous one
	MissingOffsets {
		/// Animation name
		animation: String,
		/// Frame position within the animation
		frame: usize,
	},

	/// A frame's offset does not fit a sprite index and reused the previous one
	OffsetOffSheet {
		/// Animation name
		animation: String,
		/// Frame position within the animation
		frame: usize,
		/// Row of the rejected offset
		row: u32,
		/// Column of the rejected offset
		column: u32,
	},

	/// Two descriptors share a name, the later one wins
	DuplicateName {
		/// Animation name
		animation: String,
	},

	/// A loop references frame positions that do not exist or has no member frames
	MalformedLoop {
		/// Animation name
		animation: String,
		/// Loop index within the animation
		loop_index: usize,
	},

	/// The source had no idle animation, a one-frame placeholder was inserted
	IdleInserted {
		/// Name of the synthesized animation
		animation: String,
	},
}

impl fmt::Display for CatalogWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingOffsets {
				animation,
				frame,
			} => write!(
				f,
				"Missing ImagesOffsets for animation '{animation}', frame {frame}. Using last known offset."
			),
			Self::OffsetOffSheet {
				animation,
				frame,
				row,
				column,
			} => write!(
				f,
				"ImagesOffsets (row {row}, column {column}) of animation '{animation}', frame {frame} is off the sheet. Using last known offset."
			),
			Self::DuplicateName {
				animation,
			} => write!(f, "Animation '{animation}' is defined more than once, keeping the last one"),
			Self::MalformedLoop {
				animation,
				loop_index,
			} => write!(
				f,
				"Loop {loop_index} of animation '{animation}' points outside its frame list or has no frames"
			),
			Self::IdleInserted {
				animation,
			} => write!(f, "No '{animation}' animation defined, inserted a single-frame placeholder"),
		}
	}
}

/// Advisory conditions found while starting an animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackWarning {
	/// A loop control names a loop index the animation does not define
	LoopIndex {
		/// Animation name
		animation: String,
		/// Loop index named by the control
		loop_index: usize,
		/// Number of loops the animation defines
		loop_count: usize,
	},
}

impl fmt::Display for PlaybackWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LoopIndex {
				animation,
				loop_index,
				loop_count,
			} => write!(
				f,
				"loop_controls specifies loop index of {loop_index} which does not exist in animation '{animation}' ({loop_count} loops)"
			),
		}
	}
}
