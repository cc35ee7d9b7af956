//! Assistant Session Simulation
//!
//! Drives a full assistant session against a virtual clock:
//! 1. Loads the engine configuration and the animation catalog
//! 2. Plays a random greeting
//! 3. Rests on the idle animation, letting the idle scheduler start routines
//! 4. Triggers a random user action halfway through
//! 5. Plays a farewell and runs until playback terminates
//!
//! Usage: `playback_example [animations.json] [session seconds] [seed]`

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result, bail};
use clippit_rs::prelude::*;
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

/// Upper bound on ticks spent playing the farewell
const MAX_FAREWELL_TICKS: usize = 10_000;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let mut args = std::env::args().skip(1);
	let config = EngineConfig::load(None).context("Failed to load configuration")?;
	let catalog_path = args.next().map_or_else(|| config.catalog_path(), PathBuf::from);
	let session = Duration::from_secs(args.next().map(|s| s.parse()).transpose()?.unwrap_or(120));
	let mut rng = match args.next() {
		Some(seed) => StdRng::seed_from_u64(seed.parse()?),
		None => StdRng::from_os_rng(),
	};

	println!("=== Assistant Session Simulation ===\n");

	println!("Step 1: Loading catalog");
	println!("  Path: {}", catalog_path.display());
	let catalog = config
		.catalog_builder()
		.open(&catalog_path)
		.with_context(|| format!("Failed to build catalog from {}", catalog_path.display()))?;
	println!("  ✓ {} animations, {} warnings\n", catalog.len(), catalog.warnings().len());

	let roster = &config.roster;
	let scheduler = config.idle_scheduler();
	let mut player = Player::new(Arc::new(catalog)).with_min_frame_delay(config.min_frame_delay());

	println!("Step 2: Greeting");
	report_warnings(roster.greet(&mut player, &mut rng)?);
	println!("  ✓ Playing {}\n", player.current_animation());

	println!("Step 3: Resting for {}s of simulated time", session.as_secs());
	let mut clock = Duration::ZERO;
	let mut idle_deadline = scheduler.next_delay(&mut rng);
	let mut action_played = false;
	let mut frames = 0usize;

	while clock < session {
		clock += player.next_delay();
		if player.tick().is_terminated() {
			bail!("Playback terminated before the farewell");
		}
		frames += 1;

		if !action_played && clock >= session / 2 {
			report_warnings(roster.play_random_action(&mut player, &mut rng)?);
			println!("  [{:>7.2}s] action  -> {}", clock.as_secs_f32(), player.current_animation());
			action_played = true;
		}

		if clock >= idle_deadline {
			if let Some(started) = scheduler.fire(&mut player, roster, &mut rng)? {
				println!("  [{:>7.2}s] idle    -> {started}", clock.as_secs_f32());
			}
			idle_deadline = clock + scheduler.next_delay(&mut rng);
		}
	}
	println!("  ✓ {frames} frames played\n");

	println!("Step 4: Farewell");
	report_warnings(roster.goodbye(&mut player, &mut rng)?);
	println!("  Playing {}", player.current_animation());

	let mut farewell_ticks = 0;
	while !player.tick().is_terminated() {
		farewell_ticks += 1;
		if farewell_ticks >= MAX_FAREWELL_TICKS {
			bail!("Farewell did not terminate after {MAX_FAREWELL_TICKS} ticks");
		}
	}
	println!("  ✓ Terminated after {farewell_ticks} more frames\n");

	info!("Session finished at {:.2}s", clock.as_secs_f32());
	Ok(())
}

fn report_warnings(warnings: Vec<PlaybackWarning>) {
	for warning in warnings {
		warn!("{warning}");
	}
}
