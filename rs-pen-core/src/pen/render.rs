use serde::{Deserialize, Serialize};

use super::corpus::{Corpus, Token};
use super::locator;
use super::picker::Picker;
use super::suffix_index::SuffixOrderIndex;
use super::window::Window;

/// Parameters for one render invocation.
///
/// # Fields
/// - `order`: Number of most-recent tokens used as conditioning context
///   for each sample. `0` selects unconditioned whole-corpus sampling.
/// - `start`: Optional deterministic starting offset into the corpus.
///   When present, the seed phase copies tokens from that offset instead
///   of drawing from the picker.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderInput {
	pub order: usize,
	pub start: Option<usize>,
}

impl RenderInput {
	/// Stochastic seeding with the given order.
	pub fn new(order: usize) -> Self {
		Self { order, start: None }
	}

	/// Deterministic seeding from a corpus offset.
	pub fn with_start(order: usize, start: usize) -> Self {
		Self { order, start: Some(start) }
	}
}

/// Render phases, coarsest first.
enum Phase {
	Seed,
	Steady,
	Finished,
}

/// One in-progress render: a lazy sequence of non-sentinel tokens.
///
/// # Responsibilities
/// - Seed the window, deterministically from a start offset or
///   stochastically via one picker draw
/// - Repeat the sample-locate-pick-emit loop until termination
/// - Keep the window holding exactly the most recent tokens
///
/// # Behavior
/// - No token is computed ahead of being requested; the consumer
///   controls pacing by pulling, and cancels by stopping.
/// - Termination (sentinel chosen, offset past the corpus end, empty or
///   all-sentinel corpus) ends the sequence without an error.
///
/// # Notes
/// - State is private to one render; the corpus and suffix order are
///   shared read-only, so renders may run concurrently.
/// - A picker draw outside `[0, max(bound, 1))` panics immediately.
pub struct Render<'a> {
	corpus: &'a Corpus,
	index: &'a SuffixOrderIndex,
	picker: Box<dyn Picker + 'a>,
	window: Window,
	order: usize,
	start: Option<usize>,
	seeded: usize,
	phase: Phase,
}

impl<'a> Render<'a> {
	pub(super) fn new(
		corpus: &'a Corpus,
		index: &'a SuffixOrderIndex,
		picker: Box<dyn Picker + 'a>,
		input: &RenderInput,
	) -> Self {
		let phase = if corpus.is_empty() || index.all_sentinels() {
			Phase::Finished
		} else {
			Phase::Seed
		};
		Self {
			corpus,
			index,
			picker,
			window: Window::new(input.order.max(1)),
			order: input.order,
			start: input.start,
			seeded: 0,
			phase,
		}
	}

	/// Draws from the picker and enforces its contract.
	fn draw(&mut self, bound: usize) -> usize {
		let choice = self.picker.pick(bound);
		if choice >= bound.max(1) {
			panic!("Picker contract violated: got {} for bound {}", choice, bound);
		}
		choice
	}

	/// Ends the sequence without emitting.
	fn finish(&mut self) -> Option<Token> {
		self.phase = Phase::Finished;
		None
	}

	/// Emits a token, recording it in the window.
	fn emit(&mut self, token: Token) -> Option<Token> {
		self.window.push(token.clone());
		Some(token)
	}

	/// Produces one seed token, one window slot per call.
	fn seed_step(&mut self) -> Option<Token> {
		match self.start {
			Some(offset) => {
				let position = offset + self.seeded;
				if position >= self.corpus.len() {
					return self.finish();
				}
				let token = self.corpus.token(position).clone();
				if self.corpus.is_sentinel(&token) {
					return self.finish();
				}
				self.seeded += 1;
				if self.seeded == self.window.capacity() {
					self.phase = Phase::Steady;
				}
				self.emit(token)
			}
			None => {
				// One extra slot represents "immediately terminate"
				let length = self.corpus.len();
				let choice = self.draw(length + 1);
				if choice == length {
					return self.finish();
				}
				let first = self.index.first_non_sentinel_rank();
				let rank = first + choice % (length - first);
				let token = self.corpus.token(self.index.position_at(rank)).clone();
				if self.corpus.is_sentinel(&token) {
					return self.finish();
				}
				self.phase = Phase::Steady;
				self.emit(token)
			}
		}
	}

	/// Samples one successor of the current window.
	fn steady_step(&mut self) -> Option<Token> {
		let length = self.corpus.len();

		let (rank, successor_delta) = if self.order == 0 {
			// Unconditioned: the candidate pool is the whole corpus, plus
			// the termination slot
			let choice = self.draw(length + 1);
			if choice >= length {
				return self.finish();
			}
			(choice, 0)
		} else {
			let found = locator::find_occurrences(self.corpus, self.index, &self.window);
			let choice = self.draw(found.count);
			let rank = found.start_rank + choice;
			if rank >= length {
				return self.finish();
			}
			// The matched occurrence's continuation lies exactly one window
			// length past its start
			(rank, self.window.len())
		};

		let offset = self.index.position_at(rank) + successor_delta;
		if offset >= length {
			return self.finish();
		}
		let token = self.corpus.token(offset).clone();
		if self.corpus.is_sentinel(&token) {
			return self.finish();
		}
		self.emit(token)
	}
}

impl<'a> Iterator for Render<'a> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		match self.phase {
			Phase::Finished => None,
			Phase::Seed => self.seed_step(),
			Phase::Steady => self.steady_step(),
		}
	}
}
