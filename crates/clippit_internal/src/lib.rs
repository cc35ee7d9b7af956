//! This module is separated into its own crate to give `clippit-rs` a stable facade over
//! its engine crates, and should not be used directly.

/// `use clippit_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export clippit_types for convenience
pub use clippit_types;

// Re-export commonly used types at crate root
pub use clippit_types::{
	anim::{Catalog, CatalogBuilder, CatalogError, PlaybackError},
	config::EngineConfig,
	playback::{FrameEvent, Player, TickOutcome},
};
