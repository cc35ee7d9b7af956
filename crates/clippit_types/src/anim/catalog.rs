//! Animation catalog construction and lookup.
//!
//! The catalog is built once from a list of [`AnimationDescriptor`]s and is
//! read-only afterwards. Animations are stored behind [`Arc`] so a player can
//! hold on to the current one without borrowing the catalog.

use std::{
	collections::HashMap,
	io::Read,
	path::{Path, PathBuf},
	sync::Arc,
	time::Duration,
};

use log::{debug, warn};

use super::{
	constants,
	error::{CatalogError, CatalogWarning},
	frame::{Frame, SoundId},
	loop_def::LoopDefinition,
	sheet::SheetLayout,
	source::AnimationDescriptor,
};

/// A named, non-empty sequence of frames with its loop definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
	name: String,
	frames: Vec<Frame>,
	loops: Vec<LoopDefinition>,
}

impl Animation {
	/// Creates an animation.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::InvalidCatalog`] if `name` is blank or `frames` is
	/// empty. The reported descriptor index is always 0.
	pub fn new(
		name: impl Into<String>,
		frames: Vec<Frame>,
		loops: Vec<LoopDefinition>,
	) -> Result<Self, CatalogError> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(CatalogError::invalid(0, "missing animation name"));
		}
		if frames.is_empty() {
			return Err(CatalogError::invalid(0, format!("animation '{name}' has no frames")));
		}

		Ok(Self {
			name,
			frames,
			loops,
		})
	}

	/// Animation name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Frames in playback order (never empty)
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Frame at `index`
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Loop definitions, addressed by position
	pub fn loops(&self) -> &[LoopDefinition] {
		&self.loops
	}

	/// Number of frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Always `false`, animations hold at least one frame
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Sum of all frame durations, ignoring loops
	pub fn total_duration(&self) -> Duration {
		self.frames.iter().map(Frame::duration).sum()
	}
}

impl std::fmt::Display for Animation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Animation({}, {} frames, {} loops)", self.name, self.frames.len(), self.loops.len())
	}
}

/// Immutable table of every animation, keyed by name.
///
/// The catalog always contains its idle animation: when the source does not
/// define one, the builder inserts a single-frame placeholder.
///
/// # Examples
///
/// ```
/// use clippit_types::anim::{AnimationDescriptor, Catalog, FrameDescriptor, SheetLayout};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::build(
/// 	vec![AnimationDescriptor::new(
/// 		"Wave",
/// 		vec![FrameDescriptor::at(1, 3, 100), FrameDescriptor::without_offsets(100)],
/// 	)],
/// 	SheetLayout::default(),
/// )?;
///
/// let wave = catalog.lookup("Wave").unwrap();
/// assert_eq!(wave.frames()[0].sprite_index(), 30);
/// assert_eq!(wave.frames()[1].sprite_index(), 30);
/// assert!(catalog.contains("Idle"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
	animations: Vec<Arc<Animation>>,
	by_name: HashMap<String, usize>,
	idle_index: usize,
	layout: SheetLayout,
	warnings: Vec<CatalogWarning>,
}

impl Catalog {
	/// Builds a catalog with default builder settings.
	///
	/// # Errors
	///
	/// See [`CatalogBuilder::build`].
	pub fn build(
		descriptors: Vec<AnimationDescriptor>,
		layout: SheetLayout,
	) -> Result<Self, CatalogError> {
		CatalogBuilder::new(layout).build(descriptors)
	}

	/// Parses and builds a catalog from a JSON document with default settings.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or a descriptor is invalid.
	pub fn from_json_str(json: &str, layout: SheetLayout) -> Result<Self, CatalogError> {
		CatalogBuilder::new(layout).build_from_json_str(json)
	}

	/// Opens and builds a catalog file with default settings.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not a valid catalog.
	pub fn open(path: impl AsRef<Path>, layout: SheetLayout) -> Result<Self, CatalogError> {
		CatalogBuilder::new(layout).open(path)
	}

	/// Looks an animation up by name
	pub fn lookup(&self, name: &str) -> Option<&Animation> {
		self.by_name.get(name).map(|&index| self.animations[index].as_ref())
	}

	/// Looks an animation up by name, returning a shared handle
	pub fn get_shared(&self, name: &str) -> Option<Arc<Animation>> {
		self.by_name.get(name).map(|&index| Arc::clone(&self.animations[index]))
	}

	/// Returns `true` if an animation called `name` exists
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// The idle animation playback falls back to
	pub fn idle(&self) -> Arc<Animation> {
		Arc::clone(&self.animations[self.idle_index])
	}

	/// Name of the idle animation
	pub fn idle_name(&self) -> &str {
		self.animations[self.idle_index].name()
	}

	/// Animation names in source order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.animations.iter().map(|animation| animation.name())
	}

	/// Animations in source order
	pub fn animations(&self) -> impl Iterator<Item = &Animation> {
		self.animations.iter().map(AsRef::as_ref)
	}

	/// Number of animations
	pub fn len(&self) -> usize {
		self.animations.len()
	}

	/// Always `false`, the idle animation is always present
	pub fn is_empty(&self) -> bool {
		self.animations.is_empty()
	}

	/// Sheet layout used to resolve sprite indices
	pub fn layout(&self) -> &SheetLayout {
		&self.layout
	}

	/// Advisory conditions encountered during the build
	pub fn warnings(&self) -> &[CatalogWarning] {
		&self.warnings
	}
}

/// Builder turning source descriptors into a [`Catalog`].
///
/// # Examples
///
/// ```
/// use clippit_types::anim::{AnimationDescriptor, CatalogBuilder, FrameDescriptor, SheetLayout};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = CatalogBuilder::new(SheetLayout::default())
/// 	.sound_root("assets")
/// 	.default_duration(80)
/// 	.build(vec![AnimationDescriptor::new(
/// 		"Alert",
/// 		vec![FrameDescriptor::at(0, 1, 50).with_sound("4.mp3")],
/// 	)])?;
///
/// let frame = &catalog.lookup("Alert").unwrap().frames()[0];
/// assert_eq!(frame.sound().unwrap().as_str(), std::path::Path::new("assets").join("4.mp3").to_str().unwrap());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
	layout: SheetLayout,
	default_duration_ms: u32,
	sound_root: Option<PathBuf>,
	idle_animation: String,
}

impl CatalogBuilder {
	/// Creates a builder for the given sheet layout
	pub fn new(layout: SheetLayout) -> Self {
		Self {
			layout,
			default_duration_ms: constants::DEFAULT_FRAME_DURATION_MS,
			sound_root: None,
			idle_animation: constants::IDLE_ANIMATION.to_string(),
		}
	}

	/// Directory relative sound references are resolved against
	pub fn sound_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.sound_root = Some(root.into());
		self
	}

	/// Duration for frames that do not declare one
	pub fn default_duration(mut self, duration_ms: u32) -> Self {
		self.default_duration_ms = duration_ms;
		self
	}

	/// Name of the idle animation
	pub fn idle_animation(mut self, name: impl Into<String>) -> Self {
		self.idle_animation = name.into();
		self
	}

	/// Builds the catalog.
	///
	/// Frames without offsets reuse the previous frame's offset within the same
	/// animation (`(0, 0)` for the first frame). Loops are copied verbatim; loops
	/// that point outside the frame list are kept but reported.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::InvalidCatalog`] if a descriptor has no name or no frames.
	pub fn build(&self, descriptors: Vec<AnimationDescriptor>) -> Result<Catalog, CatalogError> {
		let mut animations: Vec<Arc<Animation>> = Vec::with_capacity(descriptors.len() + 1);
		let mut by_name = HashMap::with_capacity(descriptors.len() + 1);
		let mut warnings = Vec::new();

		for (index, descriptor) in descriptors.into_iter().enumerate() {
			let animation = self.build_animation(index, descriptor, &mut warnings)?;

			if let Some(&existing) = by_name.get(animation.name()) {
				let warning = CatalogWarning::DuplicateName {
					animation: animation.name.clone(),
				};
				warn!("{warning}");
				warnings.push(warning);
				animations[existing] = Arc::new(animation);
			} else {
				by_name.insert(animation.name.clone(), animations.len());
				animations.push(Arc::new(animation));
			}
		}

		let idle_index = if let Some(&index) = by_name.get(&self.idle_animation) {
			index
		} else {
			let placeholder = Animation {
				name: self.idle_animation.clone(),
				frames: vec![Frame::new(0, constants::DEFAULT_IDLE_DURATION_MS, None)],
				loops: Vec::new(),
			};
			let warning = CatalogWarning::IdleInserted {
				animation: self.idle_animation.clone(),
			};
			warn!("{warning}");
			warnings.push(warning);

			by_name.insert(placeholder.name.clone(), animations.len());
			animations.push(Arc::new(placeholder));
			animations.len() - 1
		};

		debug!("Built animation catalog: {} animations, {} warnings", animations.len(), warnings.len());

		Ok(Catalog {
			animations,
			by_name,
			idle_index,
			layout: self.layout,
			warnings,
		})
	}

	/// Parses a JSON document and builds the catalog.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or a descriptor is invalid.
	pub fn build_from_json_str(&self, json: &str) -> Result<Catalog, CatalogError> {
		let descriptors: Vec<AnimationDescriptor> = serde_json::from_str(json)?;
		self.build(descriptors)
	}

	/// Reads a JSON document from `reader` and builds the catalog.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the document is not a valid catalog.
	pub fn build_from_reader<R: Read>(&self, reader: R) -> Result<Catalog, CatalogError> {
		let descriptors: Vec<AnimationDescriptor> = serde_json::from_reader(reader)?;
		self.build(descriptors)
	}

	/// Opens a JSON catalog file and builds the catalog.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not a valid catalog.
	pub fn open(&self, path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
		let data = std::fs::read_to_string(path)?;
		self.build_from_json_str(&data)
	}

	fn build_animation(
		&self,
		index: usize,
		descriptor: AnimationDescriptor,
		warnings: &mut Vec<CatalogWarning>,
	) -> Result<Animation, CatalogError> {
		let name = match descriptor.name {
			Some(name) if !name.trim().is_empty() => name,
			_ => return Err(CatalogError::invalid(index, "missing animation name")),
		};

		if descriptor.frames.is_empty() {
			return Err(CatalogError::invalid(index, format!("animation '{name}' has no frames")));
		}

		let mut frames = Vec::with_capacity(descriptor.frames.len());
		let mut last_index = 0;
		for (position, frame) in descriptor.frames.iter().enumerate() {
			let resolved = frame.offset().map(|(row, column)| (row, column, self.layout.index(row, column)));
			let warning = match resolved {
				Some((_, _, Some(sprite_index))) => {
					last_index = sprite_index;
					None
				}
				Some((row, column, None)) => Some(CatalogWarning::OffsetOffSheet {
					animation: name.clone(),
					frame: position,
					row,
					column,
				}),
				None => Some(CatalogWarning::MissingOffsets {
					animation: name.clone(),
					frame: position,
				}),
			};
			if let Some(warning) = warning {
				warn!("{warning}");
				warnings.push(warning);
			}

			let sound = frame.sound_ref().map(|sound| self.resolve_sound(sound));
			frames.push(Frame::new(
				last_index,
				frame.duration.unwrap_or(self.default_duration_ms),
				sound,
			));
		}

		let loops: Vec<LoopDefinition> = descriptor
			.loops
			.into_iter()
			.map(|source| LoopDefinition::new(source.loop_entry, source.loop_frames, source.loop_exit))
			.collect();

		for (loop_index, definition) in loops.iter().enumerate() {
			if !definition.is_within(frames.len()) {
				let warning = CatalogWarning::MalformedLoop {
					animation: name.clone(),
					loop_index,
				};
				warn!("{warning}");
				warnings.push(warning);
			}
		}

		Ok(Animation {
			name,
			frames,
			loops,
		})
	}

	fn resolve_sound(&self, sound: &str) -> SoundId {
		match &self.sound_root {
			Some(root) => SoundId::from(root.join(sound).to_string_lossy().into_owned()),
			None => SoundId::from(sound),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::anim::{FrameDescriptor, SpriteOffset};

	fn layout() -> SheetLayout {
		SheetLayout::new(10, 10, 8, 8)
	}

	#[test]
	fn test_resolves_row_major_sprite_index() {
		let catalog = Catalog::build(
			vec![AnimationDescriptor::new("Wave", vec![FrameDescriptor::at(2, 3, 100)])],
			layout(),
		)
		.unwrap();

		assert_eq!(catalog.lookup("Wave").unwrap().frames()[0].sprite_index(), 23);
	}

	#[test]
	fn test_missing_offset_reuses_previous_index() {
		let catalog = Catalog::build(
			vec![
				AnimationDescriptor::new("Idle", vec![FrameDescriptor::at(0, 0, 1000)]),
				AnimationDescriptor::new(
					"Wave",
					vec![FrameDescriptor::at(1, 4, 100), FrameDescriptor::without_offsets(150)],
				),
			],
			layout(),
		)
		.unwrap();

		let frames = catalog.lookup("Wave").unwrap().frames();
		assert_eq!(frames[0].sprite_index(), frames[1].sprite_index());
		assert_eq!(frames[1].duration_ms(), 150);
		assert_eq!(
			catalog.warnings(),
			&[CatalogWarning::MissingOffsets {
				animation: "Wave".to_string(),
				frame: 1,
			}]
		);
	}

	#[test]
	fn test_missing_offset_on_first_frame_defaults_to_origin() {
		let catalog = Catalog::build(
			vec![AnimationDescriptor::new("Wave", vec![FrameDescriptor::without_offsets(100)])],
			layout(),
		)
		.unwrap();

		assert_eq!(catalog.lookup("Wave").unwrap().frames()[0].sprite_index(), 0);
	}

	#[test]
	fn test_offset_off_sheet_reuses_previous_index() {
		let catalog = Catalog::from_json_str(
			r#"[{ "Name": "Big", "Frames": [
				{ "ImagesOffsets": { "Column": 3, "Row": 1 } },
				{ "ImagesOffsets": { "Column": 0, "Row": 200000000 } }
			] }]"#,
			SheetLayout::default(),
		)
		.unwrap();

		let frames = catalog.lookup("Big").unwrap().frames();
		assert_eq!(frames[0].sprite_index(), 30);
		assert_eq!(frames[1].sprite_index(), 30);
		assert!(catalog.warnings().contains(&CatalogWarning::OffsetOffSheet {
			animation: "Big".to_string(),
			frame: 1,
			row: 200_000_000,
			column: 0,
		}));
	}

	#[test]
	fn test_carry_forward_does_not_cross_animations() {
		let catalog = Catalog::build(
			vec![
				AnimationDescriptor::new("A", vec![FrameDescriptor::at(5, 5, 100)]),
				AnimationDescriptor::new("B", vec![FrameDescriptor::without_offsets(100)]),
			],
			layout(),
		)
		.unwrap();

		assert_eq!(catalog.lookup("B").unwrap().frames()[0].sprite_index(), 0);
	}

	#[test]
	fn test_partial_offsets_default_missing_axis() {
		let frame = FrameDescriptor {
			duration: None,
			images_offsets: Some(SpriteOffset {
				column: Some(7),
				row: None,
			}),
			sound: None,
		};
		let catalog =
			Catalog::build(vec![AnimationDescriptor::new("A", vec![frame])], layout()).unwrap();

		let frame = &catalog.lookup("A").unwrap().frames()[0];
		assert_eq!(frame.sprite_index(), 7);
		assert_eq!(frame.duration_ms(), constants::DEFAULT_FRAME_DURATION_MS);
	}

	#[test]
	fn test_missing_name_is_rejected() {
		let descriptor = AnimationDescriptor {
			name: None,
			frames: vec![FrameDescriptor::at(0, 0, 100)],
			loops: Vec::new(),
		};

		let err = Catalog::build(vec![descriptor], layout()).expect_err("name is required");
		match err {
			CatalogError::InvalidCatalog {
				index,
				message,
			} => {
				assert_eq!(index, 0);
				assert!(message.contains("missing animation name"));
			}
			_ => panic!("Unexpected error: {err:?}"),
		}
	}

	#[test]
	fn test_animation_new_validates_like_builder() {
		let frame = Frame::new(0, 100, None);

		assert!(Animation::new("Wave", vec![frame.clone()], Vec::new()).is_ok());
		assert!(matches!(
			Animation::new("  ", vec![frame], Vec::new()),
			Err(CatalogError::InvalidCatalog { .. })
		));
		assert!(matches!(
			Animation::new("Wave", Vec::new(), Vec::new()),
			Err(CatalogError::InvalidCatalog { .. })
		));
	}

	#[test]
	fn test_zero_frames_is_rejected() {
		let err = Catalog::build(
			vec![
				AnimationDescriptor::new("Ok", vec![FrameDescriptor::at(0, 0, 100)]),
				AnimationDescriptor::new("Empty", Vec::new()),
			],
			layout(),
		)
		.expect_err("frames are required");

		match err {
			CatalogError::InvalidCatalog {
				index,
				message,
			} => {
				assert_eq!(index, 1);
				assert!(message.contains("Empty"));
			}
			_ => panic!("Unexpected error: {err:?}"),
		}
	}

	#[test]
	fn test_idle_placeholder_is_inserted() {
		let catalog = Catalog::build(
			vec![AnimationDescriptor::new("Wave", vec![FrameDescriptor::at(0, 1, 100)])],
			layout(),
		)
		.unwrap();

		let idle = catalog.idle();
		assert_eq!(idle.name(), constants::IDLE_ANIMATION);
		assert_eq!(idle.len(), 1);
		assert_eq!(idle.frames()[0].duration_ms(), constants::DEFAULT_IDLE_DURATION_MS);
		assert!(catalog.warnings().iter().any(|w| matches!(w, CatalogWarning::IdleInserted { .. })));
		assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Wave", "Idle"]);
	}

	#[test]
	fn test_existing_idle_is_kept() {
		let catalog = Catalog::build(
			vec![AnimationDescriptor::new(
				"Idle",
				vec![FrameDescriptor::at(0, 2, 300), FrameDescriptor::at(0, 3, 300)],
			)],
			layout(),
		)
		.unwrap();

		assert_eq!(catalog.idle().len(), 2);
		assert_eq!(catalog.len(), 1);
		assert!(catalog.warnings().is_empty());
	}

	#[test]
	fn test_duplicate_name_keeps_last() {
		let catalog = Catalog::build(
			vec![
				AnimationDescriptor::new("Wave", vec![FrameDescriptor::at(0, 1, 100)]),
				AnimationDescriptor::new("Wave", vec![FrameDescriptor::at(0, 2, 100)]),
			],
			layout(),
		)
		.unwrap();

		assert_eq!(catalog.lookup("Wave").unwrap().frames()[0].sprite_index(), 2);
		assert_eq!(catalog.len(), 2);
	}

	#[test]
	fn test_loops_copied_verbatim_and_malformed_reported() {
		let descriptor = AnimationDescriptor::new(
			"Snooze",
			vec![FrameDescriptor::at(0, 0, 100); 4],
		)
		.with_loop(1, vec![2, 1], 3)
		.with_loop(1, vec![9], 3);

		let catalog = Catalog::build(vec![descriptor], layout()).unwrap();
		let loops = catalog.lookup("Snooze").unwrap().loops();

		assert_eq!(loops[0], LoopDefinition::new(1, vec![2, 1], 3));
		assert_eq!(loops[1].members(), &[9]);
		assert!(catalog.warnings().contains(&CatalogWarning::MalformedLoop {
			animation: "Snooze".to_string(),
			loop_index: 1,
		}));
	}

	#[test]
	fn test_sound_root_is_joined() {
		let catalog = CatalogBuilder::new(layout())
			.sound_root("sounds")
			.build(vec![AnimationDescriptor::new(
				"Alert",
				vec![FrameDescriptor::at(0, 0, 100).with_sound("1.mp3"), FrameDescriptor::at(0, 1, 100)],
			)])
			.unwrap();

		let frames = catalog.lookup("Alert").unwrap().frames();
		let expected = Path::new("sounds").join("1.mp3");
		assert_eq!(frames[0].sound().map(SoundId::as_str), expected.to_str());
		assert!(frames[1].sound().is_none());
	}

	#[test]
	fn test_build_from_json_str() {
		let json = r#"[
			{ "Name": "Idle", "Frames": [ { "Duration": 500, "ImagesOffsets": { "Column": 0, "Row": 0 } } ] },
			{ "Name": "Wave", "Frames": [ { "ImagesOffsets": { "Column": 1, "Row": 1 } }, {} ] }
		]"#;

		let catalog = CatalogBuilder::new(layout()).build_from_json_str(json).unwrap();
		let wave = catalog.lookup("Wave").unwrap();
		assert_eq!(wave.frames()[1].sprite_index(), 11);
		assert_eq!(wave.total_duration(), Duration::from_millis(200));
	}

	#[test]
	fn test_malformed_json_is_an_error() {
		let err = Catalog::from_json_str("{ not json", layout()).expect_err("json must parse");
		assert!(matches!(err, CatalogError::Json(_)));
	}
}
