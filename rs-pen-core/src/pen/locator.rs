use std::cmp::Ordering;

use super::corpus::Corpus;
use super::suffix_index::SuffixOrderIndex;
use super::window::Window;

/// Contiguous run of index ranks whose suffixes begin with a sample.
///
/// When the sample does not occur, `start_rank` is the insertion point
/// that preserves sort order and `count` is 0.
pub struct Occurrences {
	pub start_rank: usize,
	pub count: usize,
}

/// Compares the corpus suffix at `position` against a cyclic sample.
///
/// Token-by-token through the corpus comparer; a suffix shorter than
/// the sample is strictly less.
pub fn compare_suffix_with_sample(corpus: &Corpus, position: usize, sample: &Window) -> Ordering {
	for step in 0..sample.len() {
		if position + step >= corpus.len() {
			return Ordering::Less;
		}
		let outcome = corpus.compare_tokens(corpus.token(position + step), sample.token(step));
		if outcome != Ordering::Equal {
			return outcome;
		}
	}
	Ordering::Equal
}

/// Locates the run of ranks whose suffixes begin with the sample.
///
/// # Behavior
/// - Binary-searches the suffix order for one matching rank.
/// - Expands linearly left and right while the comparison stays equal.
///   The matching run is bounded, in steady operation, by the natural
///   skew of n-gram frequency, so expansion cost stays low.
///
/// # Notes
/// - Assumes without re-validation that the index correctly sorts the
///   corpus. For a sample that does not genuinely occur, only the
///   `count = 0` insertion-point result is guaranteed.
pub fn find_occurrences(corpus: &Corpus, index: &SuffixOrderIndex, sample: &Window) -> Occurrences {
	let mut low = 0;
	let mut high = index.len();

	while low < high {
		let middle = low + (high - low) / 2;
		match compare_suffix_with_sample(corpus, index.position_at(middle), sample) {
			Ordering::Less => low = middle + 1,
			Ordering::Greater => high = middle,
			Ordering::Equal => {
				let mut start_rank = middle;
				while start_rank > 0
					&& compare_suffix_with_sample(corpus, index.position_at(start_rank - 1), sample)
						== Ordering::Equal
				{
					start_rank -= 1;
				}
				let mut end_rank = middle + 1;
				while end_rank < index.len()
					&& compare_suffix_with_sample(corpus, index.position_at(end_rank), sample)
						== Ordering::Equal
				{
					end_rank += 1;
				}
				return Occurrences { start_rank, count: end_rank - start_rank };
			}
		}
	}

	Occurrences { start_rank: low, count: 0 }
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::pen::corpus::Token;

	fn char_corpus(text: &str) -> Corpus {
		let tokens: Vec<Token> = text.chars().map(|c| Some(Arc::from(c.to_string().as_str()))).collect();
		Corpus::from_tokens(tokens)
	}

	fn sample_of(text: &str) -> Window {
		let mut window = Window::new(text.chars().count().max(1));
		for character in text.chars() {
			window.push(Some(Arc::from(character.to_string().as_str())));
		}
		window
	}

	#[test]
	fn counts_every_occurrence() {
		// 'a' occurs three times in "aaab"
		let corpus = char_corpus("aaab");
		let index = SuffixOrderIndex::build(&corpus);
		let found = find_occurrences(&corpus, &index, &sample_of("a"));
		assert_eq!(found.count, 3);
		for rank in found.start_rank..found.start_rank + found.count {
			let position = index.position_at(rank);
			assert_eq!(corpus.token(position).as_deref(), Some("a"));
		}
	}

	#[test]
	fn multi_token_samples_match_their_run() {
		let corpus = char_corpus("aaaabaaac");
		let index = SuffixOrderIndex::build(&corpus);
		let found = find_occurrences(&corpus, &index, &sample_of("aaa"));
		// "aaa" begins the suffixes at positions 0, 1 and 5
		assert_eq!(found.count, 3);
		let mut positions: Vec<usize> = (found.start_rank..found.start_rank + found.count)
			.map(|rank| index.position_at(rank))
			.collect();
		positions.sort();
		assert_eq!(positions, vec![0, 1, 5]);
	}

	#[test]
	fn absent_samples_report_the_insertion_point() {
		let corpus = char_corpus("abcab");
		let index = SuffixOrderIndex::build(&corpus);
		let found = find_occurrences(&corpus, &index, &sample_of("bb"));
		assert_eq!(found.count, 0);
		// Sorted order: ab, abcab, b, bcab, cab -- "bb" slots after "b"
		assert_eq!(found.start_rank, 3);
	}

	#[test]
	fn suffix_shorter_than_the_sample_is_less() {
		let corpus = char_corpus("ab");
		let index = SuffixOrderIndex::build(&corpus);
		// Sample "bc" is longer than the suffix "b" at position 1
		let found = find_occurrences(&corpus, &index, &sample_of("bc"));
		assert_eq!(found.count, 0);
	}

	#[test]
	fn cyclic_samples_read_from_the_cursor() {
		let corpus = char_corpus("abcabd");
		let index = SuffixOrderIndex::build(&corpus);
		// Window saw a, b, c, a, b: logically holds "cab" after wrapping
		let mut window = Window::new(3);
		for character in "abcab".chars() {
			window.push(Some(Arc::from(character.to_string().as_str())));
		}
		let found = find_occurrences(&corpus, &index, &window);
		assert_eq!(found.count, 1);
		assert_eq!(index.position_at(found.start_rank), 2);
	}
}
