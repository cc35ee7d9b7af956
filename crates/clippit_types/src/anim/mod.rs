//! Animation catalog support for `clippit-rs`.
//!
//! This module loads the declarative animation table (`animations.json`) that
//! drives the assistant's sprite sheet and turns it into an immutable
//! [`Catalog`] of named animations.
//!
//! # Source Format Overview
//!
//! The table is a JSON array of animation descriptors:
//!
//! ```text
//! Field          Type               Description
//! -------------  -----------------  ------------------------------------------
//! Name           string             Animation name (required)
//! Frames         array of frames    Playback order, at least one entry
//! Loops          array of loops     Optional repeatable sub-sequences
//! ```
//!
//! ## Frame Descriptor
//!
//! ```text
//! Field          Type               Description
//! -------------  -----------------  ------------------------------------------
//! Duration       integer            Display time in ms (default 100)
//! ImagesOffsets  {Column, Row}      Sheet cell; reuses previous cell if absent
//! Sound          string             Sound cue played when the frame shows
//! ```
//!
//! The flat sprite index is `Row * columns + Column`, where `columns` comes
//! from the [`SheetLayout`].
//!
//! ## Loop Descriptor
//!
//! ```text
//! Field          Type               Description
//! -------------  -----------------  ------------------------------------------
//! LoopEntry      integer            Frame position where the loop is considered
//! LoopFrames     array of integers  Frame positions of one pass
//! LoopExit       integer            Frame position after the last pass
//! ```
//!
//! Loops are addressed by their position in the list. How often a loop repeats
//! is not part of the table: the caller supplies it when starting playback (see
//! [`crate::playback`]).
//!
//! # Usage Examples
//!
//! ## Loading a catalog file
//!
//! ```no_run
//! use clippit_types::anim::{Catalog, SheetLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::open("assets/animations.json", SheetLayout::default())?;
//!
//! for warning in catalog.warnings() {
//!     eprintln!("warning: {warning}");
//! }
//!
//! if let Some(wave) = catalog.lookup("Wave") {
//!     println!("Wave has {} frames and {} loops", wave.len(), wave.loops().len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building from descriptors
//!
//! ```
//! use clippit_types::anim::{AnimationDescriptor, Catalog, FrameDescriptor, SheetLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let look = AnimationDescriptor::new(
//!     "LookRight",
//!     vec![
//!         FrameDescriptor::at(0, 0, 100),
//!         FrameDescriptor::at(0, 1, 100),
//!         FrameDescriptor::at(0, 2, 100),
//!     ],
//! )
//! .with_loop(1, vec![1], 2);
//!
//! let catalog = Catalog::build(vec![look], SheetLayout::default())?;
//! assert_eq!(catalog.lookup("LookRight").unwrap().loops().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod constants;
pub mod error;
pub mod frame;
pub mod loop_def;
pub mod sheet;
pub mod source;

// Re-exports for convenience
pub use self::catalog::{Animation, Catalog, CatalogBuilder};
pub use self::error::{CatalogError, CatalogWarning, ConfigError, PlaybackError, PlaybackWarning};
pub use self::frame::{Frame, SoundId};
pub use self::loop_def::LoopDefinition;
pub use self::sheet::{CellRect, SheetLayout};
pub use self::source::{AnimationDescriptor, FrameDescriptor, LoopDescriptor, SpriteOffset};
