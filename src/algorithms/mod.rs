//! Core edit distance and similarity algorithms
//!
//! Each operation is available as a method on [`EditEngine`], which reuses
//! its DP buffers across calls, and as a free function that builds a fresh
//! engine per call.

pub mod banded;
pub mod cost;
pub mod distance;
pub mod engine;
pub mod phonetic;
pub mod similarity;

pub use banded::*;
pub use cost::{CostFn, CostFunction, Levenshtein, Symbol, WeightedCost, GAP, LEVENSHTEIN};
pub use distance::*;
pub use engine::EditEngine;
pub use phonetic::*;
pub use similarity::*;

/// Trait for string similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Whether `similarity(a, b) >= min_similarity`.
    ///
    /// Implementations with a verification path override this to avoid
    /// computing the exact score.
    fn meets(&self, a: &str, b: &str, min_similarity: f64) -> bool {
        self.similarity(a, b) >= min_similarity
    }

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}
