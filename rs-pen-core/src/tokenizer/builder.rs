use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::io::read_file;
use crate::pen::corpus::Token;
use super::Tokenizer;
use super::options::TokenizerOptions;

/// Turns lines into a token sequence, applying the line and
/// empty-token policy.
///
/// # Behavior
/// - Empty lines are skipped entirely when `skip_empty_lines` is set.
/// - Zero-length tokens are dropped unless `keep_empty_tokens` is set.
/// - When a `line_token` is configured, it is appended after each kept
///   line, marking the line break.
pub fn tokenize_lines<T>(tokenizer: &T, lines: &[String], options: &TokenizerOptions) -> Vec<Token>
where
	T: Tokenizer + ?Sized,
{
	let mut tokens = Vec::new();
	for line in lines {
		if options.skip_empty_lines && line.is_empty() {
			continue;
		}
		for token in tokenizer.split_line(line) {
			if token.is_empty() && !options.keep_empty_tokens {
				continue;
			}
			tokens.push(Some(Arc::from(token.as_str())));
		}
		if let Some(line_token) = &options.line_token {
			tokens.push(Some(Arc::from(line_token.as_str())));
		}
	}
	tokens
}

/// `tokenize_lines`, computed across worker threads.
///
/// # Behavior
/// - Splits the lines into chunks (based on CPU cores * factor).
/// - Spawns scoped threads tokenizing each chunk.
/// - Collects the chunk results over a channel and reassembles them in
///   their original order, so the outcome matches the sequential one
///   for any deterministic tokenizer.
pub fn tokenize_lines_parallel<T>(
	tokenizer: &T,
	lines: &[String],
	options: &TokenizerOptions,
) -> Vec<Token>
where
	T: Tokenizer + Sync + ?Sized,
{
	if lines.is_empty() {
		return Vec::new();
	}

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = ((lines.len() + chunks - 1) / chunks).max(1);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (chunk_index, chunk) in lines.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				let tokens = tokenize_lines(tokenizer, chunk, options);
				tx.send((chunk_index, tokens)).expect("Failed to send from thread");
			});
		}
	});
	drop(tx);

	let mut parts: Vec<(usize, Vec<Token>)> = rx.iter().collect();
	parts.sort_by_key(|(chunk_index, _)| *chunk_index);
	parts.into_iter().flat_map(|(_, tokens)| tokens).collect()
}

/// Reads a text file and tokenizes its lines into a token sequence.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn corpus_tokens_from_file<P, T>(
	filepath: P,
	tokenizer: &T,
	options: &TokenizerOptions,
) -> Result<Vec<Token>, Box<dyn std::error::Error>>
where
	P: AsRef<Path>,
	T: Tokenizer + Sync + ?Sized,
{
	let lines = read_file(filepath)?;
	Ok(tokenize_lines_parallel(tokenizer, &lines, options))
}
