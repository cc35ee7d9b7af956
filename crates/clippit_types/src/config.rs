//! Engine configuration.
//!
//! Settings come from an optional TOML file and `CLIPPIT_*` environment
//! variables (nested keys separated by `__`, e.g. `CLIPPIT_SHEET__COLUMNS=27`).
//! Every field has a default matching the stock assistant assets.
//!
//! ```toml
//! asset_root = "assets"
//! min_frame_delay_ms = 10
//!
//! [sheet]
//! columns = 27
//! rows = 34
//!
//! [roster]
//! greetings = ["Show"]
//! ```

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
	anim::{CatalogBuilder, ConfigError, SheetLayout, constants},
	playback::{IdleScheduler, Roster},
};

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "CLIPPIT";

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Sprite sheet geometry
	pub sheet: SheetLayout,
	/// Directory holding the catalog file and sound assets
	pub asset_root: Option<PathBuf>,
	/// Catalog file name, relative to `asset_root`
	pub catalog_file: PathBuf,
	/// Animation played while resting
	pub idle_animation: String,
	/// Duration of frames that do not declare one (milliseconds)
	pub default_frame_duration_ms: u32,
	/// Lower bound for the delay between ticks (milliseconds)
	pub min_frame_delay_ms: u32,
	/// Shortest wait before an idle routine (seconds)
	pub idle_delay_min_secs: u64,
	/// Longest wait before an idle routine (seconds)
	pub idle_delay_max_secs: u64,
	/// Animations used for random selection
	pub roster: Roster,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			sheet: SheetLayout::default(),
			asset_root: None,
			catalog_file: PathBuf::from("animations.json"),
			idle_animation: constants::IDLE_ANIMATION.to_string(),
			default_frame_duration_ms: constants::DEFAULT_FRAME_DURATION_MS,
			min_frame_delay_ms: constants::MIN_FRAME_DELAY_MS,
			idle_delay_min_secs: 20,
			idle_delay_max_secs: 45,
			roster: Roster::default(),
		}
	}
}

impl EngineConfig {
	/// Loads settings from `path` (if given) and the environment.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read, a value has the wrong type,
	/// or the result fails [`validate`](Self::validate).
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let mut builder = config::Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(config::File::from(path).required(true));
		}

		let settings = builder
			.add_source(
				config::Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("_")
					.separator("__")
					.try_parsing(true),
			)
			.build()?;

		let config: Self = settings.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	/// Parses settings from a TOML string, ignoring the environment.
	///
	/// # Errors
	///
	/// Returns an error if the TOML is malformed or the result fails validation.
	pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
		let settings = config::Config::builder()
			.add_source(config::File::from_str(toml, config::FileFormat::Toml))
			.build()?;

		let config: Self = settings.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the settings are consistent.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Invalid`] describing the first problem found.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.sheet.columns == 0 || self.sheet.rows == 0 {
			return Err(ConfigError::Invalid("sheet must have at least one row and column".into()));
		}
		if self.idle_animation.trim().is_empty() {
			return Err(ConfigError::Invalid("idle_animation must not be empty".into()));
		}
		if self.idle_delay_min_secs > self.idle_delay_max_secs {
			return Err(ConfigError::Invalid(format!(
				"idle delay range {}..={} is empty",
				self.idle_delay_min_secs, self.idle_delay_max_secs
			)));
		}
		for routine in &self.roster.idle_routines {
			if let Some(range) = routine.loops.iter().find(|range| range.min > range.max) {
				return Err(ConfigError::Invalid(format!(
					"idle routine '{}' has an empty repeat range {}..={}",
					routine.animation, range.min, range.max
				)));
			}
		}

		Ok(())
	}

	/// Full path of the catalog file
	pub fn catalog_path(&self) -> PathBuf {
		match &self.asset_root {
			Some(root) => root.join(&self.catalog_file),
			None => self.catalog_file.clone(),
		}
	}

	/// Catalog builder using these settings
	pub fn catalog_builder(&self) -> CatalogBuilder {
		let builder = CatalogBuilder::new(self.sheet)
			.default_duration(self.default_frame_duration_ms)
			.idle_animation(self.idle_animation.clone());

		match &self.asset_root {
			Some(root) => builder.sound_root(root.clone()),
			None => builder,
		}
	}

	/// Lower bound for the delay between ticks
	pub fn min_frame_delay(&self) -> Duration {
		Duration::from_millis(u64::from(self.min_frame_delay_ms))
	}

	/// Idle scheduler using these settings
	pub fn idle_scheduler(&self) -> IdleScheduler {
		IdleScheduler::new(self.idle_delay_min_secs, self.idle_delay_max_secs)
	}
}
