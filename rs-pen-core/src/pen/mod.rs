//! Top-level module for the corpus-order generation system.
//!
//! This module provides a suffix-order Markov text engine, including:
//! - An immutable token corpus (`Corpus`)
//! - Token ordering relations (`TokenOrder`, `Ordinal`, `OrdinalIgnoreCase`)
//! - Uniform candidate selection (`Picker` and its implementations)
//! - Render configuration and the lazy token sequence (`RenderInput`, `Render`)
//! - The high-level engine interface (`Pen`, `Author`)

/// High-level engine interface for rendering token sequences.
///
/// Exposes corpus/index ownership, the required render operation and
/// default-provided convenience wrappers.
pub mod generator;

/// Immutable ordered token sequence plus sentinel and comparer.
///
/// Supports optional string interning so that repeated equal tokens
/// share storage.
pub mod corpus;

/// Total order + equality relations over nullable tokens.
///
/// Ships a case-sensitive default and an ASCII case-insensitive
/// variant; any comparison function can be supplied instead.
pub mod comparer;

/// Uniform selection among a bounded candidate set.
///
/// Includes the default per-thread generator-backed picker and a
/// seeded picker for reproducible renders.
pub mod picker;

/// Render parameters and the lazy render sequence itself.
///
/// A render is an `Iterator` over tokens with fresh private state;
/// the shared corpus and suffix order are read-only.
pub mod render;

/// Internal sorted order over all corpus suffixes.
///
/// This module is not exposed publicly.
mod suffix_index;

/// Internal binary search locating the index ranks whose suffixes
/// begin with a recent-token window.
///
/// This module is not exposed publicly.
mod locator;

/// Internal bounded cyclic window of recently emitted tokens.
///
/// This module is not exposed publicly.
mod window;
