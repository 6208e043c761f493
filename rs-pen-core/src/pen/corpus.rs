use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use super::comparer::{Ordinal, TokenOrder};

/// A single corpus token.
///
/// Tokens are nullable: `None` is a legal token value, compared through
/// the corpus comparer like any string. Token text is reference-counted
/// so that an interned corpus shares storage between equal tokens.
pub type Token = Option<Arc<str>>;

/// The immutable ordered token sequence driving generation.
///
/// A `Corpus` bundles the token sequence, the designated sentinel token
/// and the comparer used for every token comparison. All three are fixed
/// at construction.
///
/// # Responsibilities
/// - Own the token sequence (optionally canonicalised via interning)
/// - Designate the sentinel value that terminates generation
/// - Answer token comparisons through the one supplied comparer
///
/// # Invariants
/// - `tokens` and `sentinel` are never mutated after construction
/// - The comparer is referentially stable for the corpus's lifetime
///
/// # Notes
/// - An empty token sequence is legal and yields an all-sentinel corpus.
/// - The sentinel is "just a comparison value": a token equal to the
///   sentinel may legitimately appear mid-sequence, in which case any
///   generation reaching that position terminates there silently.
pub struct Corpus {
	/// The observed token sequence, in corpus order.
	tokens: Vec<Token>,
	/// Token value denoting "no more text". Never emitted.
	sentinel: Token,
	/// Total order + equality over tokens.
	comparer: Box<dyn TokenOrder + Send + Sync>,
}

impl Corpus {
	/// Creates a corpus from a token sequence, sentinel, comparer and
	/// interning flag.
	///
	/// # Parameters
	/// - `tokens`: The observed token sequence; the corpus takes ownership.
	/// - `sentinel`: Token value that terminates generation wherever matched.
	///   May be `None` or any string, including one absent from `tokens`.
	/// - `comparer`: Total order used for every token comparison.
	/// - `intern`: When true, canonicalises each non-null token so that
	///   repeated equal tokens share storage.
	///
	/// # Notes
	/// - Interning deduplicates by exact text, not by `comparer` equality.
	pub fn new(
		tokens: Vec<Token>,
		sentinel: Token,
		comparer: Box<dyn TokenOrder + Send + Sync>,
		intern: bool,
	) -> Self {
		let tokens = if intern { Self::intern_all(tokens) } else { tokens };
		Self { tokens, sentinel, comparer }
	}

	/// Creates a corpus with the default configuration: `None` sentinel,
	/// ordinal comparer, no interning.
	pub fn from_tokens(tokens: Vec<Token>) -> Self {
		Self::new(tokens, None, Box::new(Ordinal), false)
	}

	/// Number of tokens in the corpus.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns true when the corpus holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// The token stored at a corpus position.
	pub(crate) fn token(&self, position: usize) -> &Token {
		&self.tokens[position]
	}

	/// Compares two token values through the corpus comparer.
	pub(crate) fn compare_tokens(&self, left: &Token, right: &Token) -> Ordering {
		self.comparer.compare(left.as_deref(), right.as_deref())
	}

	/// Returns true when a token compares equal to the sentinel.
	pub(crate) fn is_sentinel(&self, token: &Token) -> bool {
		self.comparer.equals(token.as_deref(), self.sentinel.as_deref())
	}

	/// Canonicalises equal tokens to shared storage.
	fn intern_all(tokens: Vec<Token>) -> Vec<Token> {
		let mut pool: HashSet<Arc<str>> = HashSet::new();
		tokens
			.into_iter()
			.map(|token| {
				token.map(|text| match pool.get(&*text) {
					Some(shared) => shared.clone(),
					None => {
						pool.insert(text.clone());
						text
					}
				})
			})
			.collect()
	}
}
