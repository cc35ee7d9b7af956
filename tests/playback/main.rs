//! End-to-end playback tests against a small `animations.json` fixture

use std::{collections::HashMap, path::PathBuf, sync::Arc, time::Duration};

use clippit_rs::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn fixture_path() -> PathBuf {
	let cargo_root = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	PathBuf::from(cargo_root).join("tests").join("fixtures").join("animations.json")
}

fn load_catalog() -> Arc<Catalog> {
	let config = EngineConfig::default();
	Arc::new(config.catalog_builder().open(fixture_path()).unwrap())
}

/// Ticks until the player terminates or `limit` ticks have passed, collecting
/// `(animation, frame_index)` pairs.
fn run(player: &mut Player, limit: usize) -> Vec<(String, usize)> {
	let mut trace = Vec::new();
	for _ in 0..limit {
		match player.tick() {
			TickOutcome::Frame(event) => {
				trace.push((player.current_animation().to_string(), event.frame_index));
			}
			TickOutcome::Terminated => break,
		}
	}
	trace
}

#[test_log::test]
fn test_fixture_catalog_loads() {
	let catalog = load_catalog();

	assert_eq!(
		catalog.names().collect::<Vec<_>>(),
		vec!["Idle", "Show", "Wave", "LookRight", "IdleSnooze", "GoodBye_1"]
	);

	// Second Wave frame has no offsets and reuses the first one's cell
	let wave = catalog.lookup("Wave").unwrap();
	assert_eq!(wave.frames()[0].sprite_index(), 2 * 27 + 1);
	assert_eq!(wave.frames()[1].sprite_index(), wave.frames()[0].sprite_index());

	// An empty offsets object counts as missing too
	let goodbye = catalog.lookup("GoodBye_1").unwrap();
	assert_eq!(goodbye.frames()[1].sprite_index(), 33 * 27 + 20);
	assert_eq!(goodbye.frames()[1].duration_ms(), 100);

	assert_eq!(
		catalog.warnings(),
		&[
			CatalogWarning::MissingOffsets {
				animation: "Wave".to_string(),
				frame: 1,
			},
			CatalogWarning::MissingOffsets {
				animation: "GoodBye_1".to_string(),
				frame: 1,
			},
		]
	);
}

#[test_log::test]
fn test_greeting_then_idle() {
	let catalog = load_catalog();
	let mut player = Player::new(Arc::clone(&catalog));
	let roster = Roster {
		greetings: vec!["Show".to_string()],
		..Roster::default()
	};

	roster.greet(&mut player, &mut StdRng::seed_from_u64(1)).unwrap();
	let first = player.current_event();
	assert_eq!(first.sprite_index, 30 * 27 + 4);
	assert_eq!(first.sound.as_ref().map(SoundId::as_str), Some("13.mp3"));

	let trace = run(&mut player, 4);
	assert_eq!(
		trace,
		vec![
			("Show".to_string(), 1),
			("Show".to_string(), 2),
			("Idle".to_string(), 0),
			("Idle".to_string(), 0),
		]
	);
	assert_eq!(player.next_delay(), Duration::from_secs(1));
}

#[test_log::test]
fn test_look_right_loop_counts() {
	let mut player = Player::new(load_catalog());
	player.set_animation("LookRight", HashMap::from([(0, 3)])).unwrap();

	let frames: Vec<usize> = run(&mut player, 11).into_iter().map(|(_, frame)| frame).collect();
	assert_eq!(frames, vec![1, 2, 3, 2, 3, 2, 3, 2, 4, 5, 0]);
	assert!(player.is_idle());
}

#[test_log::test]
fn test_snooze_with_two_loops() {
	let mut player = Player::new(load_catalog());
	player.set_animation("IdleSnooze", HashMap::from([(0, 2), (1, 1)])).unwrap();

	let mut sounds = 0;
	let mut frames = Vec::new();
	for _ in 0..12 {
		let TickOutcome::Frame(event) = player.tick() else {
			panic!("playback must not terminate without an exit request");
		};
		if event.sound.is_some() {
			sounds += 1;
		}
		frames.push(event.frame_index);
	}

	assert_eq!(frames, vec![1, 2, 3, 2, 3, 4, 5, 6, 7, 0, 0, 0]);
	assert_eq!(sounds, 1);
}

#[test_log::test]
fn test_goodbye_terminates() {
	let mut player = Player::new(load_catalog());
	let roster = Roster {
		farewells: vec!["GoodBye_1".to_string()],
		..Roster::default()
	};

	roster.goodbye(&mut player, &mut StdRng::seed_from_u64(2)).unwrap();
	let trace = run(&mut player, 10);

	assert_eq!(trace, vec![("GoodBye_1".to_string(), 1)]);
	assert!(player.is_terminated());
}

#[test_log::test]
fn test_idle_routine_returns_to_idle() {
	let mut player = Player::new(load_catalog());
	let roster = Roster {
		idle_routines: vec![IdleRoutine::repeating("LookRight", 1, RepeatRange::new(1, 2))],
		..Roster::default()
	};
	let scheduler = IdleScheduler::default();
	let mut rng = StdRng::seed_from_u64(4);

	assert_eq!(scheduler.fire(&mut player, &roster, &mut rng).unwrap().as_deref(), Some("LookRight"));
	let trace = run(&mut player, 20);
	assert_eq!(trace.last().map(|(name, _)| name.as_str()), Some("Idle"));
	assert!(player.is_idle());
}

#[test_log::test]
fn test_unknown_names_and_loops_are_recoverable() {
	let mut player = Player::new(load_catalog());
	player.play("Wave").unwrap();

	assert!(matches!(
		player.play("Moonwalk"),
		Err(PlaybackError::AnimationNotFound { .. })
	));
	assert_eq!(player.current_animation(), "Wave");

	let warnings = player.set_animation("Wave", HashMap::from([(5, 1)])).unwrap();
	assert_eq!(warnings.len(), 1);
	let frames: Vec<usize> = run(&mut player, 4).into_iter().map(|(_, frame)| frame).collect();
	assert_eq!(frames, vec![1, 2, 3, 0]);
}

#[test_log::test]
fn test_catalog_is_shared_across_threads() {
	let catalog = load_catalog();

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let catalog = Arc::clone(&catalog);
			std::thread::spawn(move || {
				let mut player = Player::new(catalog);
				player.set_animation("LookRight", HashMap::from([(0, 1)])).unwrap();
				run(&mut player, 8).len()
			})
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), 8);
	}
}
