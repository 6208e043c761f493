use super::corpus::Token;

/// Bounded cyclic window over the most recently emitted tokens.
///
/// A fixed-capacity buffer plus a logical start cursor. Insertion
/// appends while below capacity, then overwrites the oldest slot and
/// advances the cursor. Readers address the window logically as
/// `window[(cursor + k) mod len]`, oldest first.
pub struct Window {
	slots: Vec<Token>,
	capacity: usize,
	cursor: usize,
}

impl Window {
	/// Creates an empty window.
	///
	/// `capacity` must be at least 1 (callers pass `max(order, 1)`).
	pub fn new(capacity: usize) -> Self {
		Self { slots: Vec::with_capacity(capacity), capacity, cursor: 0 }
	}

	/// Number of tokens currently held.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// The fixed capacity.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Records a newly emitted token.
	pub fn push(&mut self, token: Token) {
		if self.slots.len() < self.capacity {
			self.slots.push(token);
		} else {
			self.slots[self.cursor] = token;
			self.cursor = (self.cursor + 1) % self.capacity;
		}
	}

	/// The token at a logical index, oldest first.
	pub fn token(&self, index: usize) -> &Token {
		&self.slots[(self.cursor + index) % self.slots.len()]
	}
}
