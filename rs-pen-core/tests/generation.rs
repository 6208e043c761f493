use std::sync::Arc;

use rs_pen_core::pen::comparer::Ordinal;
use rs_pen_core::pen::corpus::{Corpus, Token};
use rs_pen_core::pen::generator::{Author, Pen};
use rs_pen_core::pen::picker::Picker;
use rs_pen_core::pen::render::RenderInput;

fn token(text: &str) -> Token {
	Some(Arc::from(text))
}

fn char_tokens(text: &str) -> Vec<Token> {
	text.chars().map(|c| token(&c.to_string())).collect()
}

fn char_pen(text: &str) -> Pen {
	Pen::new(Corpus::from_tokens(char_tokens(text)))
}

fn rendered_text(tokens: Vec<Token>) -> String {
	tokens.into_iter().map(|t| t.as_deref().unwrap_or_default().to_owned()).collect()
}

/// Always returns the same index; the test keeps it legal for every draw.
struct ConstPicker(usize);

impl Picker for ConstPicker {
	fn pick(&mut self, _bound: usize) -> usize {
		self.0
	}
}

/// Always returns the last legal index.
struct LastPicker;

impl Picker for LastPicker {
	fn pick(&mut self, bound: usize) -> usize {
		bound.max(1) - 1
	}
}

/// Replays a fixed list of draws.
struct ScriptPicker(Vec<usize>);

impl Picker for ScriptPicker {
	fn pick(&mut self, _bound: usize) -> usize {
		self.0.remove(0)
	}
}

/// Fails the test if the engine consults the picker at all.
struct PanicPicker;

impl Picker for PanicPicker {
	fn pick(&mut self, _bound: usize) -> usize {
		panic!("The picker must not be consulted");
	}
}

/// Breaks the picker contract on purpose.
struct BadPicker;

impl Picker for BadPicker {
	fn pick(&mut self, bound: usize) -> usize {
		bound + 7
	}
}

#[test]
fn order_zero_with_a_zero_picker_repeats_the_smallest_rank() {
	// Sorted suffixes of "bca": a < bca < ca, so the smallest rank holds 'a'
	let pen = char_pen("bca");
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::new(0), Box::new(ConstPicker(0)))
		.unwrap()
		.take(5)
		.collect();
	assert_eq!(rendered_text(rendered), "aaaaa");
}

#[test]
fn all_sentinel_corpora_render_empty() {
	for order in [0, 1, 3] {
		let corpus = Corpus::new(
			vec![token("x"), token("x")],
			token("x"),
			Box::new(Ordinal),
			false,
		);
		let pen = Pen::new(corpus);
		assert!(pen.all_sentinels());
		let rendered: Vec<Token> = pen
			.render_with(&RenderInput::new(order), Box::new(ConstPicker(0)))
			.unwrap()
			.collect();
		assert!(rendered.is_empty());
		let seeded: Vec<Token> = pen.render_seeded(&RenderInput::new(order), 3).unwrap().collect();
		assert!(seeded.is_empty());
	}
}

#[test]
fn successors_follow_corpus_statistics() {
	// After context 'a' in "aaab", the corpus continues with a, a, b
	let pen = char_pen("aaab");
	let input = RenderInput::new(1);
	let mut successors = Vec::new();
	for choice in 0..3 {
		let rendered: Vec<Token> = pen
			.render_with(&input, Box::new(ScriptPicker(vec![0, choice])))
			.unwrap()
			.take(2)
			.collect();
		successors.push(rendered[1].as_deref().unwrap().to_owned());
	}
	assert_eq!(successors, vec!["a", "a", "b"]);
}

#[test]
fn seeded_successor_distribution_is_skewed_two_to_one() {
	let pen = char_pen("aaab");
	let input = RenderInput::new(1);
	let mut after_a = 0;
	let mut after_b = 0;
	for seed in 0..300 {
		let rendered: Vec<Token> = pen.render_seeded(&input, seed).unwrap().take(2).collect();
		if rendered.len() == 2 && rendered[0].as_deref() == Some("a") {
			match rendered[1].as_deref() {
				Some("a") => after_a += 1,
				Some("b") => after_b += 1,
				other => panic!("Unexpected successor {:?}", other),
			}
		}
	}
	// The empirical split tends to 2/3 vs 1/3
	assert!(after_a > 0 && after_b > 0);
	let ratio = after_b as f64 / (after_a + after_b) as f64;
	assert!(ratio > 0.15 && ratio < 0.55, "Successor ratio out of range: {}", ratio);
}

#[test]
fn deterministic_seeding_reproduces_the_corpus() {
	let pen = char_pen("abcdef");
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(3, 1), Box::new(PanicPicker))
		.unwrap()
		.take(3)
		.collect();
	assert_eq!(rendered_text(rendered), "bcd");
}

#[test]
fn deterministic_seeding_truncates_at_a_sentinel() {
	let corpus = Corpus::new(
		vec![token("a"), token("b"), token("stop"), token("c"), token("d")],
		token("stop"),
		Box::new(Ordinal),
		false,
	);
	let pen = Pen::new(corpus);
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(3, 1), Box::new(PanicPicker))
		.unwrap()
		.take(3)
		.collect();
	assert_eq!(rendered_text(rendered), "b");
}

#[test]
fn empty_corpora_render_empty() {
	let pen = Pen::new(Corpus::from_tokens(Vec::new()));
	assert!(pen.all_sentinels());
	for order in [0, 1, 4] {
		let rendered: Vec<Token> = pen.render(&RenderInput::new(order)).unwrap().collect();
		assert!(rendered.is_empty());
	}
}

#[test]
fn seeded_scenario_renders_a_corpus_prefix() {
	// Corpus "aaaabaaac", sentinel "", order 3, start 0. With every
	// candidate set answered by index 0, the engine keeps re-matching
	// "aaa" at the corpus head and extends with 'a' forever.
	let corpus = Corpus::new(char_tokens("aaaabaaac"), token(""), Box::new(Ordinal), false);
	let pen = Pen::new(corpus);
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(3, 0), Box::new(ConstPicker(0)))
		.unwrap()
		.take(7)
		.collect();
	assert_eq!(rendered_text(rendered), "aaaaaaa");
}

#[test]
fn seeded_scenario_terminates_at_the_corpus_end() {
	// Same corpus, picking the last candidate: the seed "aaa" matches the
	// occurrence at position 5, whose continuation is the final 'c'; the
	// next step then runs off the corpus end.
	let corpus = Corpus::new(char_tokens("aaaabaaac"), token(""), Box::new(Ordinal), false);
	let pen = Pen::new(corpus);
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(3, 0), Box::new(LastPicker))
		.unwrap()
		.collect();
	assert_eq!(rendered_text(rendered), "aaac");
}

#[test]
fn a_sentinel_value_inside_the_corpus_terminates_generation() {
	// The sentinel is just a comparison value: reaching the mid-corpus
	// "stop" position ends the render silently.
	let corpus = Corpus::new(
		vec![token("a"), token("b"), token("stop"), token("c")],
		token("stop"),
		Box::new(Ordinal),
		false,
	);
	let pen = Pen::new(corpus);
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(1, 0), Box::new(ConstPicker(0)))
		.unwrap()
		.collect();
	assert_eq!(rendered_text(rendered), "ab");
}

#[test]
fn null_tokens_are_ordinary_corpus_content() {
	let corpus = Corpus::new(
		vec![token("a"), None, token("b")],
		token("zz"),
		Box::new(Ordinal),
		false,
	);
	let pen = Pen::new(corpus);
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::with_start(1, 0), Box::new(ConstPicker(0)))
		.unwrap()
		.collect();
	assert_eq!(rendered, vec![token("a"), None, token("b")]);
}

#[test]
fn a_stochastic_seed_grows_the_window_to_the_full_order() {
	// order 2 over "abcab": seed yields one token, the window then grows
	// through steady-state until it holds two tokens
	let pen = char_pen("abcab");
	let rendered: Vec<Token> = pen
		.render_with(&RenderInput::new(2), Box::new(ScriptPicker(vec![0, 1, 0])))
		.unwrap()
		.collect();
	assert_eq!(rendered_text(rendered), "ab");
}

#[test]
#[should_panic(expected = "Picker contract violated")]
fn a_picker_outside_its_bound_panics() {
	let pen = char_pen("ab");
	let _ = pen
		.render_with(&RenderInput::new(0), Box::new(BadPicker))
		.unwrap()
		.next();
}

#[test]
fn the_default_picker_emits_corpus_tokens_only() {
	let pen = char_pen("the quick brown fox");
	let corpus_texts: Vec<String> = "the quick brown fox".chars().map(|c| c.to_string()).collect();
	let rendered: Vec<Token> = pen.render(&RenderInput::new(2)).unwrap().take(50).collect();
	for emitted in rendered {
		assert!(corpus_texts.contains(&emitted.as_deref().unwrap().to_owned()));
	}
}
