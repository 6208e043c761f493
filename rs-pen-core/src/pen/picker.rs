use std::cell::RefCell;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability that selects one index uniformly among `bound` candidates.
///
/// # Contract
/// - Given an exclusive upper bound `bound >= 0`, return an integer in
///   `[0, max(bound, 1))`.
/// - `0` is guaranteed when `bound == 0`.
///
/// A picker that breaks this contract is a programming error: the
/// engine surfaces the violation immediately (it panics) rather than
/// clamping, since clamping would corrupt the sampling distribution.
pub trait Picker {
	/// Picks one index in `[0, max(bound, 1))`.
	fn pick(&mut self, bound: usize) -> usize;
}

/// Process-wide seed counter shared by every thread's generator.
///
/// Initialized once from the wall clock, then advanced under the lock
/// for each new thread so concurrently-started generators never share
/// a seed. Process-lifetime state; no teardown.
static SEED_COUNTER: OnceLock<Mutex<u64>> = OnceLock::new();

fn next_seed() -> u64 {
	let counter = SEED_COUNTER.get_or_init(|| {
		let ticks = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|elapsed| elapsed.as_nanos() as u64)
			.unwrap_or(0);
		Mutex::new(ticks)
	});
	let mut seed = counter.lock().expect("Seed counter lock poisoned");
	*seed = seed.wrapping_add(1);
	*seed
}

thread_local! {
	// One generator per thread, seeded lazily and kept for the thread's lifetime
	static THREAD_GENERATOR: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(next_seed()));
}

/// Default picker backed by the per-thread generator.
///
/// After seeding, a thread's generator is used without further
/// synchronization.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPicker;

impl DefaultPicker {
	pub fn new() -> Self {
		Self
	}
}

impl Picker for DefaultPicker {
	fn pick(&mut self, bound: usize) -> usize {
		if bound <= 1 {
			return 0;
		}
		THREAD_GENERATOR.with(|generator| generator.borrow_mut().random_range(0..bound))
	}
}

/// Deterministic picker for reproducible renders.
///
/// Two pickers created from the same seed produce the same draws.
#[derive(Clone, Debug)]
pub struct SeededPicker {
	generator: StdRng,
}

impl SeededPicker {
	pub fn new(seed: u64) -> Self {
		Self { generator: StdRng::seed_from_u64(seed) }
	}
}

impl Picker for SeededPicker {
	fn pick(&mut self, bound: usize) -> usize {
		if bound <= 1 {
			return 0;
		}
		self.generator.random_range(0..bound)
	}
}
