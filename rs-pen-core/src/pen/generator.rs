use super::corpus::Corpus;
use super::picker::{DefaultPicker, Picker, SeededPicker};
use super::render::{Render, RenderInput};
use super::suffix_index::SuffixOrderIndex;

/// The generation engine: a corpus plus its suffix order.
///
/// # Responsibilities
/// - Build the suffix order once, immediately after taking the corpus
/// - Hand out independent render sequences over the shared, read-only
///   corpus and order
///
/// # Notes
/// - A `Pen` is immutable after construction; arbitrarily many renders
///   may read it concurrently without synchronization.
pub struct Pen {
	corpus: Corpus,
	index: SuffixOrderIndex,
}

impl Pen {
	/// Takes ownership of a corpus and sorts its suffix order.
	///
	/// The sort compares token suffixes through the corpus comparer, so
	/// equal corpora always produce identical orders.
	pub fn new(corpus: Corpus) -> Self {
		let index = SuffixOrderIndex::build(&corpus);
		Self { corpus, index }
	}

	/// The corpus driving this engine.
	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	/// True iff every corpus token equals the sentinel.
	///
	/// Such an engine renders only empty sequences.
	pub fn all_sentinels(&self) -> bool {
		self.index.all_sentinels()
	}
}

/// Capability interface over a single required render operation.
///
/// The convenience wrappers are implemented purely in terms of
/// `render_with`; implementors override one entry point and get the
/// rest for free.
pub trait Author {
	/// Required operation: render with an explicit picker.
	///
	/// # Parameters
	/// - `input`: Markov order and optional deterministic start offset.
	/// - `picker`: Chooses uniformly among candidate continuations.
	///
	/// # Returns
	/// A lazy sequence of non-sentinel tokens. Consumers typically bound
	/// it with a maximum-count limit before concatenating it into text.
	///
	/// # Errors
	/// Returns an error if the start offset lies beyond the corpus end.
	fn render_with<'a>(
		&'a self,
		input: &RenderInput,
		picker: Box<dyn Picker + 'a>,
	) -> Result<Render<'a>, String>;

	/// Renders with the default per-thread picker.
	fn render(&self, input: &RenderInput) -> Result<Render<'_>, String> {
		self.render_with(input, Box::new(DefaultPicker::new()))
	}

	/// Renders with a deterministic seeded picker.
	///
	/// Equal seeds over an equal engine replay the same sequence.
	fn render_seeded(&self, input: &RenderInput, seed: u64) -> Result<Render<'_>, String> {
		self.render_with(input, Box::new(SeededPicker::new(seed)))
	}
}

impl Author for Pen {
	fn render_with<'a>(
		&'a self,
		input: &RenderInput,
		picker: Box<dyn Picker + 'a>,
	) -> Result<Render<'a>, String> {
		if let Some(offset) = input.start {
			if offset > self.corpus.len() {
				return Err(format!(
					"Start offset {} is beyond the corpus length {}",
					offset,
					self.corpus.len()
				));
			}
		}
		Ok(Render::new(&self.corpus, &self.index, picker, input))
	}
}
