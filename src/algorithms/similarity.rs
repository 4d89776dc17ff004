//! Normalized edit similarity
//!
//! `edsim = 1 - eddist / (max(|L|, |R|) * max_cost)`, in [0, 1] whenever
//! `max_cost` bounds every pairwise cost. Two empty sequences have
//! similarity 1.
//!
//! `vedsim` turns a similarity threshold into a distance threshold, lets
//! the banded verifier find the distance, and judges it with the `edsim`
//! expression.

use smallvec::SmallVec;

use super::cost::CostFunction;
use super::engine::EditEngine;
use super::Similarity;

#[inline]
fn longest<T>(left: &[T], right: &[T]) -> f64 {
    left.len().max(right.len()) as f64
}

/// Similarity of a distance against `longest * max_cost`.
#[inline]
fn normalize(distance: f64, scale: f64) -> f64 {
    1.0 - distance / scale
}

impl EditEngine {
    /// Weighted edit similarity in [0, 1].
    pub fn edsim<T, C>(&mut self, left: &[T], right: &[T], cost_fn: &C) -> f64
    where
        T: PartialEq,
        C: CostFunction<T> + ?Sized,
    {
        if left.is_empty() && right.is_empty() {
            return 1.0;
        }
        let scale = longest(left, right) * cost_fn.max_cost();
        normalize(self.eddist(left, right, cost_fn), scale)
    }

    /// Whether `edsim(left, right, cost_fn) >= min_sim`.
    ///
    /// The banded search runs a few ulps past the converted distance
    /// threshold; the distance it finds is then judged by the same
    /// expression [`edsim`](Self::edsim) uses.
    pub fn vedsim<T, C>(&mut self, left: &[T], right: &[T], cost_fn: &C, min_sim: f64) -> bool
    where
        T: PartialEq,
        C: CostFunction<T> + ?Sized,
    {
        if left.is_empty() && right.is_empty() {
            return 1.0 >= min_sim;
        }
        let scale = longest(left, right) * cost_fn.max_cost();
        let max_dist = (1.0 - min_sim) * scale + 4.0 * f64::EPSILON * scale;
        self.bounded_eddist(left, right, cost_fn, max_dist)
            .is_some_and(|distance| normalize(distance, scale) >= min_sim)
    }
}

/// Weighted edit similarity with a one-off engine.
///
/// # Example
/// ```
/// use symlar::{edsim, LEVENSHTEIN};
///
/// let a: Vec<char> = "hello".chars().collect();
/// let b: Vec<char> = "hallo".chars().collect();
/// assert!((edsim(&a, &b, &LEVENSHTEIN) - 0.8).abs() < 1e-12);
/// ```
#[must_use]
pub fn edsim<T, C>(left: &[T], right: &[T], cost_fn: &C) -> f64
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    EditEngine::new().edsim(left, right, cost_fn)
}

/// Threshold verification of weighted edit similarity with a one-off engine.
#[must_use]
pub fn vedsim<T, C>(left: &[T], right: &[T], cost_fn: &C, min_sim: f64) -> bool
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    EditEngine::new().vedsim(left, right, cost_fn, min_sim)
}

/// String-level weighted edit similarity over `char`s.
///
/// Wraps any `CostFunction<char>` so it can be used through the
/// [`Similarity`] trait.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedSimilarity<C> {
    pub cost_fn: C,
}

impl<C> WeightedSimilarity<C> {
    #[must_use]
    pub fn new(cost_fn: C) -> Self {
        Self { cost_fn }
    }
}

impl<C: CostFunction<char> + Send + Sync> Similarity for WeightedSimilarity<C> {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        edsim(&a_chars, &b_chars, &self.cost_fn)
    }

    fn meets(&self, a: &str, b: &str, min_similarity: f64) -> bool {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        vedsim(&a_chars, &b_chars, &self.cost_fn, min_similarity)
    }

    fn name(&self) -> &'static str {
        "weighted_edit"
    }
}
