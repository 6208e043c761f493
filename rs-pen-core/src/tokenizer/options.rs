use serde::{Deserialize, Serialize};

/// Line and empty-token policy applied when turning lines into a token
/// sequence.
///
/// # Fields
/// - `skip_empty_lines`: Lines with no characters contribute nothing,
///   not even a line token.
/// - `keep_empty_tokens`: Keep zero-length tokens produced by splitting
///   (for example between two adjacent separators).
/// - `line_token`: Token appended after each kept line, marking the
///   line break. `None` joins lines directly.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenizerOptions {
	pub skip_empty_lines: bool,
	pub keep_empty_tokens: bool,
	pub line_token: Option<String>,
}

impl Default for TokenizerOptions {
	fn default() -> Self {
		Self {
			skip_empty_lines: true,
			keep_empty_tokens: false,
			line_token: None,
		}
	}
}
