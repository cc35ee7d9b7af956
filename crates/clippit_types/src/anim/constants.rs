//! Animation catalog constants.
//!
//! Defaults mirror the stock paperclip sprite sheet (`clippy-map.png`) and the
//! timing values of its `animations.json` table.

/// Name of the resting animation playback falls back to.
pub const IDLE_ANIMATION: &str = "Idle";

/// Duration assigned to frame descriptors that omit `Duration` (milliseconds)
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// Duration of the single frame of a synthesized Idle animation (milliseconds)
pub const DEFAULT_IDLE_DURATION_MS: u32 = 1000;

/// Lower bound applied to frame durations when re-arming the driving timer (milliseconds)
pub const MIN_FRAME_DELAY_MS: u32 = 10;

/// Number of sprite columns in the stock sheet
pub const SHEET_COLUMNS: u32 = 27;

/// Number of sprite rows in the stock sheet
pub const SHEET_ROWS: u32 = 34;

/// Width of a single sprite cell in pixels
pub const CELL_WIDTH: u32 = 124;

/// Height of a single sprite cell in pixels
pub const CELL_HEIGHT: u32 = 93;
