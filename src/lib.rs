#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `clippit-rs` drives the sprite animations of a desktop paperclip assistant.
//!
//! Given a sprite sheet and a declarative animation table, the engine decides on
//! every tick which frame to show, when to play a sound cue, how many times to
//! repeat the loops inside an animation, and when to rest in the idle animation
//! or stop for good. Drawing, audio output and timers stay with the caller.
//!
pub use clippit_internal::*;
