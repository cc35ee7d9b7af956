//! Animation catalog utility.
//!
//! Provides two subcommands:
//! - `validate`: build an `animations.json` catalog, list every animation with
//!   its frame and loop counts, and report build warnings.
//! - `play`: drive one animation headlessly and print every frame event, the
//!   way a renderer/audio/timer front-end would receive them.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use clippit_rs::prelude::*;
use log::info;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = EngineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
	match cli.command {
		Command::Validate(opts) => run_validate(&config, opts),
		Command::Play(opts) => run_play(&config, opts),
	}
}

#[derive(Parser)]
#[command(name = "catalog_utils")]
#[command(author = "clippit-rs project")]
#[command(version)]
#[command(about = "Validate animation catalogs and simulate playback", long_about = None)]
struct Cli {
	/// Optional TOML configuration file
	#[arg(short, long, global = true, value_name = "FILE", env = "CLIPPIT_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Build a catalog and report its contents
	Validate(ValidateArgs),
	/// Play one animation without a window and print each frame
	Play(PlayArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Path to animations.json (defaults to the configured catalog path)
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,

	/// Print loop definitions for every animation
	#[arg(short, long, default_value_t = false)]
	verbose: bool,

	/// Exit with an error when warnings are encountered
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

#[derive(Args)]
struct PlayArgs {
	/// Path to animations.json
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Animation to play
	#[arg(value_name = "NAME")]
	animation: String,

	/// Loop repeat budget as LOOP=COUNT, may be repeated
	#[arg(short, long = "loop", value_name = "LOOP=COUNT", value_parser = parse_loop_control)]
	loops: Vec<(usize, u32)>,

	/// Maximum number of ticks to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 200)]
	ticks: usize,

	/// Request an exit so playback terminates instead of returning to idle
	#[arg(short, long, default_value_t = false)]
	exit: bool,

	/// Sleep for each frame's duration between ticks
	#[arg(long, default_value_t = false)]
	realtime: bool,
}

fn parse_loop_control(value: &str) -> Result<(usize, u32), String> {
	let (index, count) =
		value.split_once('=').ok_or_else(|| format!("expected LOOP=COUNT, got '{value}'"))?;
	let index = index.trim().parse().map_err(|err| format!("invalid loop index '{index}': {err}"))?;
	let count = count.trim().parse().map_err(|err| format!("invalid repeat count '{count}': {err}"))?;
	Ok((index, count))
}

fn load_catalog(config: &EngineConfig, file: Option<PathBuf>) -> Result<Catalog> {
	let path = file.unwrap_or_else(|| config.catalog_path());
	if !path.exists() {
		bail!("Catalog {} does not exist", path.display());
	}

	config
		.catalog_builder()
		.open(&path)
		.with_context(|| format!("Failed to build catalog from {}", path.display()))
}

fn run_validate(config: &EngineConfig, args: ValidateArgs) -> Result<()> {
	let catalog = load_catalog(config, args.file)?;

	println!("{:<24} {:>7} {:>6} {:>10}", "Animation", "frames", "loops", "length ms");
	for animation in catalog.animations() {
		println!(
			"{:<24} {:>7} {:>6} {:>10}",
			animation.name(),
			animation.len(),
			animation.loops().len(),
			animation.total_duration().as_millis()
		);

		if args.verbose {
			for (index, definition) in animation.loops().iter().enumerate() {
				println!("    loop {index}: {definition}");
			}
		}
	}

	let roster = &config.roster;
	let missing: Vec<&str> = roster
		.greetings
		.iter()
		.chain(&roster.farewells)
		.chain(&roster.actions)
		.map(String::as_str)
		.chain(roster.idle_routines.iter().map(|routine| routine.animation.as_str()))
		.filter(|name| !catalog.contains(name))
		.collect();

	println!();
	for warning in catalog.warnings() {
		println!("[WARN] {warning}");
	}
	for name in &missing {
		println!("[WARN] Roster animation '{name}' is not in the catalog");
	}

	let warning_count = catalog.warnings().len() + missing.len();
	println!("\nSummary: animations={} warnings={}", catalog.len(), warning_count);

	if args.fail_on_warning && warning_count > 0 {
		bail!("Validation finished with warnings (see summary)");
	}

	Ok(())
}

fn run_play(config: &EngineConfig, args: PlayArgs) -> Result<()> {
	let catalog = Arc::new(load_catalog(config, Some(args.file))?);
	let mut player = Player::new(catalog).with_min_frame_delay(config.min_frame_delay());

	let controls: LoopControls = args.loops.into_iter().collect::<HashMap<_, _>>();
	for warning in player.set_animation(&args.animation, controls)? {
		println!("[WARN] {warning}");
	}
	if args.exit {
		player.request_exit();
	}

	print_event(0, player.current_animation(), &player.current_event());
	for tick in 1..=args.ticks {
		if args.realtime {
			std::thread::sleep(player.next_delay());
		}

		match player.tick() {
			TickOutcome::Frame(event) => print_event(tick, player.current_animation(), &event),
			TickOutcome::Terminated => {
				info!("Playback terminated after {tick} ticks");
				return Ok(());
			}
		}
	}

	info!("Stopped after {} ticks in {:?}", args.ticks, player.current_animation());
	Ok(())
}

fn print_event(tick: usize, animation: &str, event: &FrameEvent) {
	let sound = event.sound.as_ref().map_or("-", SoundId::as_str);
	println!(
		"{tick:5} {animation:<20} frame {:3} sprite {:4} {:5}ms sound {sound}",
		event.frame_index,
		event.sprite_index,
		event.duration.as_millis()
	);
}
