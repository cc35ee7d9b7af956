//! Playback state machine for catalog animations.
//!
//! A [`Player`] holds the current animation, the active frame position and the
//! loop bookkeeping, and advances one frame per [`Player::tick`]. Everything
//! else (drawing, sound output, timers) is left to the caller, which receives a
//! [`FrameEvent`] per tick.
//!
//! # Tick Algorithm
//!
//! ```text
//! next = frame_index + 1
//! if loop controls are set:
//!     for each loop, in ascending index order:
//!         entry:        frame_index == loop.entry
//!                       -> start a pass (members[0]) if budget remains, else loop.exit
//!         continuation: loop is active and frame_index is a member
//!                       -> next member, or a new pass, or loop.exit
//!         the first loop that matches decides `next`; stop scanning
//! if next is past the last frame:
//!     exit requested  -> Terminated
//!     not idle        -> frame 0 of the idle animation
//!     idle            -> frame 0
//! ```
//!
//! A loop without a control entry has a budget of zero: once any control is
//! set, reaching that loop's entry jumps straight to its exit.
//!
//! # Known Limitations
//!
//! Loops whose entries or member frames overlap are resolved only by scan
//! order. Only one loop is resolved per tick, so nested loop contexts are not
//! tracked independently.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use clippit_types::anim::{AnimationDescriptor, Catalog, FrameDescriptor, SheetLayout};
//! use clippit_types::playback::{Player, TickOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wave = AnimationDescriptor::new(
//!     "Wave",
//!     vec![FrameDescriptor::at(0, 1, 100), FrameDescriptor::at(0, 2, 100).with_sound("wave.mp3")],
//! );
//! let catalog = Arc::new(Catalog::build(vec![wave], SheetLayout::default())?);
//!
//! let mut player = Player::new(catalog);
//! player.play("Wave")?;
//! player.request_exit();
//!
//! let TickOutcome::Frame(event) = player.tick() else { unreachable!() };
//! assert_eq!(event.sprite_index, 2);
//! assert_eq!(event.sound.as_ref().map(|s| s.as_str()), Some("wave.mp3"));
//!
//! assert_eq!(player.tick(), TickOutcome::Terminated);
//! # Ok(())
//! # }
//! ```

mod event;
mod idle;
mod player;
mod state;


pub use self::event::{FrameEvent, TickOutcome};
pub use self::idle::{IdleRoutine, IdleScheduler, RepeatRange, Roster};
pub use self::player::Player;
pub use self::state::{LoopControls, PlaybackState};
