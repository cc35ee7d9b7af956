//! This crate provides the animation sequencing engine of the `clippit-rs` project.
//!
//! # Modules
//!
//! - **`anim`**: the animation catalog, built once from `animations.json`: frames,
//!   sprite sheet geometry, loop definitions, errors
//! - **`playback`**: the playback state machine that picks the active frame on
//!   every tick, plus random greeting/idle/farewell selection
//! - **`config`**: engine settings loaded from TOML and the environment
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use clippit_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EngineConfig::load(None)?;
//! let catalog = Arc::new(config.catalog_builder().open(config.catalog_path())?);
//!
//! let mut player = Player::new(catalog).with_min_frame_delay(config.min_frame_delay());
//! config.roster.greet(&mut player, &mut rand::rng())?;
//!
//! while let TickOutcome::Frame(event) = player.tick() {
//!     // draw event.sprite_index, play event.sound, wait player.next_delay()
//!     std::thread::sleep(player.next_delay());
//! }
//! # Ok(())
//! # }
//! ```

pub mod anim;
pub mod config;
pub mod playback;

/// `use clippit_types::prelude::*;` to import commonly used items.
pub mod prelude;
