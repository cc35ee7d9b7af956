//! Prelude module for `clippit_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use clippit_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::open("animations.json", SheetLayout::default())?;
//! let player = Player::new(std::sync::Arc::new(catalog));
//! assert_eq!(player.current_animation(), IDLE_ANIMATION);
//! # Ok(())
//! # }
//! ```

// Catalog types
#[doc(inline)]
pub use crate::anim::{
	Animation, AnimationDescriptor, Catalog, CatalogBuilder, CatalogError, CatalogWarning,
	CellRect, ConfigError, Frame, FrameDescriptor, LoopDefinition, PlaybackError,
	PlaybackWarning, SheetLayout, SoundId,
};

// Constants
#[doc(inline)]
pub use crate::anim::constants::IDLE_ANIMATION;

// Playback types
#[doc(inline)]
pub use crate::playback::{
	FrameEvent, IdleRoutine, IdleScheduler, LoopControls, PlaybackState, Player, RepeatRange,
	Roster, TickOutcome,
};

// Configuration
#[doc(inline)]
pub use crate::config::EngineConfig;

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{anim, playback};
