//! Random animation selection: greetings, farewells, user actions and idle routines.
//!
//! The assistant greets the user when it starts, fidgets with a random idle
//! routine every 20-45 seconds while resting, and waves goodbye before exiting.
//! Which animations are used, and how many times their loops repeat, is data
//! held by a [`Roster`].

use std::time::Duration;

use log::debug;
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::anim::{PlaybackError, PlaybackWarning};

use super::{player::Player, state::LoopControls};

/// Inclusive range of repeat counts for one loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRange {
	/// Smallest repeat count
	pub min: u32,
	/// Largest repeat count
	pub max: u32,
}

impl RepeatRange {
	/// Creates a range covering `min..=max`
	pub const fn new(min: u32, max: u32) -> Self {
		Self {
			min,
			max,
		}
	}

	/// Draws a repeat count
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
		if self.min >= self.max {
			self.min
		} else {
			rng.random_range(self.min..=self.max)
		}
	}
}

/// An idle animation together with the repeat ranges of its loops.
///
/// The position of a range in `loops` is the loop index it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleRoutine {
	/// Animation to play
	pub animation: String,
	/// Repeat range per loop index
	#[serde(default)]
	pub loops: Vec<RepeatRange>,
}

impl IdleRoutine {
	/// Creates a routine with the same repeat range for the first `count` loops
	pub fn repeating(animation: &str, count: usize, range: RepeatRange) -> Self {
		Self {
			animation: animation.to_string(),
			loops: vec![range; count],
		}
	}

	/// Creates a routine whose loops are not controlled
	pub fn plain(animation: &str) -> Self {
		Self {
			animation: animation.to_string(),
			loops: Vec::new(),
		}
	}

	/// Draws loop controls for one run of the routine
	pub fn loop_controls<R: Rng + ?Sized>(&self, rng: &mut R) -> LoopControls {
		self.loops.iter().enumerate().map(|(index, range)| (index, range.sample(rng))).collect()
	}
}

/// Animation names used for random selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
	/// Played once at start-up
	pub greetings: Vec<String>,
	/// Played before exiting
	pub farewells: Vec<String>,
	/// Played on user request
	pub actions: Vec<String>,
	/// Played while resting
	pub idle_routines: Vec<IdleRoutine>,
}

impl Default for Roster {
	fn default() -> Self {
		let look = RepeatRange::new(1, 5);
		let long = RepeatRange::new(1, 75);

		Self {
			greetings: names(&["Show", "Greeting_1", "Greeting_2"]),
			farewells: names(&["Hide", "GoodBye_1", "GoodBye_2"]),
			actions: names(&[
				"Congratulate",
				"SendMail",
				"Thinking",
				"Print",
				"GetAttention",
				"Save",
				"GestureUp",
				"Processing",
				"Alert",
				"CheckingSomething",
				"Hearing",
				"GestureLeft",
				"Wave",
				"GestureRight",
				"Writing",
				"GetArtsy",
				"Searching",
				"EmptyTrash",
				"GestureDown",
			]),
			idle_routines: vec![
				IdleRoutine::repeating("LookRight", 1, look),
				IdleRoutine::plain("Explain"),
				IdleRoutine::repeating("IdleRopePile", 4, long),
				IdleRoutine::repeating("IdleAtom", 1, RepeatRange::new(1, 8)),
				IdleRoutine::repeating("LookUpRight", 1, look),
				IdleRoutine::repeating("IdleSideToSide", 11, long),
				IdleRoutine::repeating("LookLeft", 1, look),
				IdleRoutine::repeating("IdleHeadScratch", 1, RepeatRange::new(1, 10)),
				IdleRoutine::repeating("LookUpLeft", 1, look),
				IdleRoutine::repeating("IdleFingerTap", 1, long),
				IdleRoutine {
					animation: "IdleSnooze".to_string(),
					loops: vec![long, RepeatRange::new(1, 4)],
				},
				IdleRoutine::repeating("LookDownRight", 1, look),
				IdleRoutine::repeating("LookDown", 1, look),
				IdleRoutine::repeating("LookUp", 1, look),
				IdleRoutine::repeating("LookDownLeft", 1, look),
			],
		}
	}
}

fn names(list: &[&str]) -> Vec<String> {
	list.iter().map(|name| (*name).to_string()).collect()
}

impl Roster {
	/// Plays a random greeting.
	///
	/// # Errors
	///
	/// Fails if the greeting roster is empty or names an unknown animation.
	pub fn greet<R: Rng + ?Sized>(
		&self,
		player: &mut Player,
		rng: &mut R,
	) -> Result<Vec<PlaybackWarning>, PlaybackError> {
		let name = pick(&self.greetings, "greeting", rng)?;
		player.set_animation(name, LoopControls::new())
	}

	/// Plays a random user-triggered action.
	///
	/// # Errors
	///
	/// Fails if the action roster is empty or names an unknown animation.
	pub fn play_random_action<R: Rng + ?Sized>(
		&self,
		player: &mut Player,
		rng: &mut R,
	) -> Result<Vec<PlaybackWarning>, PlaybackError> {
		let name = pick(&self.actions, "action", rng)?;
		player.set_animation(name, LoopControls::new())
	}

	/// Plays a random farewell and requests an exit once it has finished.
	///
	/// # Errors
	///
	/// Fails if the farewell roster is empty or names an unknown animation; no
	/// exit is requested in that case.
	pub fn goodbye<R: Rng + ?Sized>(
		&self,
		player: &mut Player,
		rng: &mut R,
	) -> Result<Vec<PlaybackWarning>, PlaybackError> {
		let name = pick(&self.farewells, "farewell", rng)?;
		let warnings = player.set_animation(name, LoopControls::new())?;
		player.request_exit();
		Ok(warnings)
	}

	/// Plays a random idle routine with freshly drawn loop controls.
	///
	/// Returns the name of the started animation.
	///
	/// # Errors
	///
	/// Fails if there are no idle routines or the chosen one names an unknown animation.
	pub fn play_idle_routine<R: Rng + ?Sized>(
		&self,
		player: &mut Player,
		rng: &mut R,
	) -> Result<String, PlaybackError> {
		let routine = self.idle_routines.choose(rng).ok_or(PlaybackError::EmptyRoster {
			kind: "idle",
		})?;
		let controls = routine.loop_controls(rng);
		player.set_animation(&routine.animation, controls)?;
		Ok(routine.animation.clone())
	}
}

fn pick<'a, R: Rng + ?Sized>(
	list: &'a [String],
	kind: &'static str,
	rng: &mut R,
) -> Result<&'a str, PlaybackError> {
	list.choose(rng).map(String::as_str).ok_or(PlaybackError::EmptyRoster {
		kind,
	})
}

/// Decides when the resting character fidgets.
///
/// The driver arms a one-shot timer with [`next_delay`](Self::next_delay) and
/// calls [`fire`](Self::fire) when it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleScheduler {
	min_delay_secs: u64,
	max_delay_secs: u64,
}

impl Default for IdleScheduler {
	fn default() -> Self {
		Self::new(20, 45)
	}
}

impl IdleScheduler {
	/// Creates a scheduler waiting between `min_delay_secs` and `max_delay_secs` whole seconds
	pub fn new(min_delay_secs: u64, max_delay_secs: u64) -> Self {
		Self {
			min_delay_secs,
			max_delay_secs: max_delay_secs.max(min_delay_secs),
		}
	}

	/// Draws the delay until the next idle check
	pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
		Duration::from_secs(rng.random_range(self.min_delay_secs..=self.max_delay_secs))
	}

	/// Starts a random idle routine if the player is resting.
	///
	/// Returns the started animation, or `None` when the player was busy with
	/// another animation.
	///
	/// # Errors
	///
	/// Propagates errors from [`Roster::play_idle_routine`].
	pub fn fire<R: Rng + ?Sized>(
		&self,
		player: &mut Player,
		roster: &Roster,
		rng: &mut R,
	) -> Result<Option<String>, PlaybackError> {
		if !player.is_idle() || player.exit_requested() {
			return Ok(None);
		}

		let started = roster.play_idle_routine(player, rng)?;
		debug!("Idle timer started {started:?}");
		Ok(Some(started))
	}
}
