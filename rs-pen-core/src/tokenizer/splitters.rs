use rand::Rng;
use regex::Regex;

use super::Tokenizer;

/// One token per character (UTF-8 aware).
#[derive(Clone, Copy, Debug, Default)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
	fn split_line(&self, line: &str) -> Vec<String> {
		line.chars().map(|character| character.to_string()).collect()
	}
}

/// Splits on a literal separator string.
#[derive(Clone, Debug)]
pub struct SeparatorTokenizer {
	separator: String,
}

impl SeparatorTokenizer {
	/// # Errors
	/// Returns an error if the separator is empty.
	pub fn new(separator: &str) -> Result<Self, String> {
		if separator.is_empty() {
			return Err("Separator must not be empty".to_owned());
		}
		Ok(Self { separator: separator.to_owned() })
	}
}

impl Tokenizer for SeparatorTokenizer {
	fn split_line(&self, line: &str) -> Vec<String> {
		line.split(&self.separator).map(str::to_owned).collect()
	}
}

/// Splits on the matches of a regular expression.
///
/// The matches themselves are discarded; the text between them becomes
/// the tokens.
#[derive(Clone, Debug)]
pub struct RegexSplitTokenizer {
	pattern: Regex,
}

impl RegexSplitTokenizer {
	/// # Errors
	/// Returns an error if the pattern does not compile.
	pub fn new(pattern: &str) -> Result<Self, String> {
		let pattern = Regex::new(pattern)
			.map_err(|error| format!("Invalid pattern '{}': {}", pattern, error))?;
		Ok(Self { pattern })
	}
}

impl Tokenizer for RegexSplitTokenizer {
	fn split_line(&self, line: &str) -> Vec<String> {
		self.pattern.split(line).map(str::to_owned).collect()
	}
}

/// The matches of a regular expression are the tokens.
///
/// Text between matches is discarded.
#[derive(Clone, Debug)]
pub struct RegexMatchTokenizer {
	pattern: Regex,
}

impl RegexMatchTokenizer {
	/// # Errors
	/// Returns an error if the pattern does not compile.
	pub fn new(pattern: &str) -> Result<Self, String> {
		let pattern = Regex::new(pattern)
			.map_err(|error| format!("Invalid pattern '{}': {}", pattern, error))?;
		Ok(Self { pattern })
	}
}

impl Tokenizer for RegexMatchTokenizer {
	fn split_line(&self, line: &str) -> Vec<String> {
		self.pattern.find_iter(line).map(|found| found.as_str().to_owned()).collect()
	}
}

/// Splits at random boundaries with a bounded chunk length.
///
/// # Notes
/// - Chunk lengths are drawn uniformly in `[min_len, max_len]`,
///   truncated at the end of the line.
/// - Not deterministic: two passes over the same line may split
///   differently.
#[derive(Clone, Copy, Debug)]
pub struct RandomTokenizer {
	min_len: usize,
	max_len: usize,
}

impl RandomTokenizer {
	/// # Errors
	/// Returns an error unless `1 <= min_len <= max_len`.
	pub fn new(min_len: usize, max_len: usize) -> Result<Self, String> {
		if min_len < 1 || min_len > max_len {
			return Err(format!(
				"Chunk bounds must satisfy 1 <= min <= max, got {}..={}",
				min_len, max_len
			));
		}
		Ok(Self { min_len, max_len })
	}
}

impl Tokenizer for RandomTokenizer {
	fn split_line(&self, line: &str) -> Vec<String> {
		let characters: Vec<char> = line.chars().collect();
		let mut tokens = Vec::new();
		let mut index = 0;
		while index < characters.len() {
			let take = rand::rng()
				.random_range(self.min_len..=self.max_len)
				.min(characters.len() - index);
			tokens.push(characters[index..index + take].iter().collect());
			index += take;
		}
		tokens
	}
}
