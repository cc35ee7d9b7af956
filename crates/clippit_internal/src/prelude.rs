//! Prelude module for `clippit_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use clippit_internal::prelude::*;
//!
//! let layout = SheetLayout::default();
//! assert_eq!(layout.index(1, 0), Some(27));
//!
//! let roster = Roster::default();
//! assert!(roster.greetings.iter().any(|name| name == "Show"));
//! ```

// Re-export everything from clippit_types::prelude
#[doc(inline)]
pub use clippit_types::prelude::*;

// Re-export the entire clippit_types module for advanced usage
#[doc(inline)]
pub use clippit_types;
