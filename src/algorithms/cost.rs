//! Edit operation cost functions
//!
//! A cost function prices a single edit step between a symbol of the left
//! sequence and a symbol of the right sequence. Either side may be [`GAP`]:
//! `cost(Token(l), GAP)` prices deleting `l`, `cost(GAP, Token(r))` prices
//! inserting `r`. Costs must be non-negative. The engines never ask for the
//! cost of substituting a symbol with an equal one; that step is free.
//!
//! Besides the per-pair cost, every cost function declares two bounds:
//! - `min_cost`: a lower bound over every non-identical pair, gap pairs
//!   included. The banded verifier prunes with it, so it must be a true bound.
//! - `max_cost`: an upper bound over every pair, used to normalize distances
//!   into similarities.
//!
//! Keep the range of costs small. Very small costs (below ~1e-20) lose
//! precision once accumulated.

use serde::{Deserialize, Serialize};

/// One side of an edit step: a content symbol or the gap marker
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Symbol<'a, T: ?Sized> {
    /// No symbol on this side (insertion or deletion)
    Gap,
    /// A symbol taken from the sequence
    Token(&'a T),
}

impl<T: ?Sized> Clone for Symbol<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Symbol<'_, T> {}

impl<'a, T: ?Sized> Symbol<'a, T> {
    #[inline]
    #[must_use]
    pub fn is_gap(&self) -> bool {
        matches!(self, Symbol::Gap)
    }

    /// The content symbol, or `None` for the gap
    #[inline]
    #[must_use]
    pub fn token(self) -> Option<&'a T> {
        match self {
            Symbol::Gap => None,
            Symbol::Token(t) => Some(t),
        }
    }
}

/// The gap marker, usable for any symbol type
pub use Symbol::Gap as GAP;

/// Prices edit steps between two symbols.
pub trait CostFunction<T: ?Sized> {
    /// Cost of turning `left` into `right`. Never called with two equal tokens.
    fn cost(&self, left: Symbol<'_, T>, right: Symbol<'_, T>) -> f64;

    /// Lower bound over all non-identical pairs
    fn min_cost(&self) -> f64 {
        0.0
    }

    /// Upper bound over all pairs
    fn max_cost(&self) -> f64 {
        1.0
    }
}

impl<T: ?Sized, C: CostFunction<T> + ?Sized> CostFunction<T> for &C {
    #[inline]
    fn cost(&self, left: Symbol<'_, T>, right: Symbol<'_, T>) -> f64 {
        (**self).cost(left, right)
    }

    fn min_cost(&self) -> f64 {
        (**self).min_cost()
    }

    fn max_cost(&self) -> f64 {
        (**self).max_cost()
    }
}

/// Unit costs: every insertion, deletion and substitution costs 1.
///
/// Stateless - all instances are equivalent. See [`LEVENSHTEIN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

/// Unit cost function with `min_cost == max_cost == 1`
pub const LEVENSHTEIN: Levenshtein = Levenshtein;

impl<T: ?Sized> CostFunction<T> for Levenshtein {
    #[inline]
    fn cost(&self, _left: Symbol<'_, T>, _right: Symbol<'_, T>) -> f64 {
        1.0
    }

    fn min_cost(&self) -> f64 {
        1.0
    }

    fn max_cost(&self) -> f64 {
        1.0
    }
}

/// Per-operation weights, independent of the symbols involved.
///
/// Deserializable so weights can come from configuration; missing fields
/// default to 1.
///
/// # Example
/// ```
/// use symlar::algorithms::cost::{CostFunction, WeightedCost};
///
/// let weights: WeightedCost = serde_json::from_str(r#"{"deletion": 2.0}"#).unwrap();
/// assert_eq!(weights, WeightedCost::new(1.0, 2.0, 1.0));
/// assert_eq!(CostFunction::<char>::max_cost(&weights), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedCost {
    /// Cost of `cost(GAP, Token(_))`
    pub insertion: f64,
    /// Cost of `cost(Token(_), GAP)`
    pub deletion: f64,
    /// Cost of substituting two different symbols
    pub substitution: f64,
}

impl Default for WeightedCost {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
        }
    }
}

impl WeightedCost {
    #[must_use]
    pub fn new(insertion: f64, deletion: f64, substitution: f64) -> Self {
        Self {
            insertion,
            deletion,
            substitution,
        }
    }
}

impl<T: ?Sized> CostFunction<T> for WeightedCost {
    #[inline]
    fn cost(&self, left: Symbol<'_, T>, right: Symbol<'_, T>) -> f64 {
        match (left, right) {
            (Symbol::Gap, _) => self.insertion,
            (_, Symbol::Gap) => self.deletion,
            _ => self.substitution,
        }
    }

    fn min_cost(&self) -> f64 {
        self.insertion.min(self.deletion).min(self.substitution)
    }

    fn max_cost(&self) -> f64 {
        self.insertion.max(self.deletion).max(self.substitution)
    }
}

/// A closure bundled with its declared cost bounds.
///
/// Bounds default to `(0, 1)`. A `min_cost` of 0 is always safe but turns
/// off banding in the verifiers.
///
/// # Example
/// ```
/// use symlar::algorithms::cost::{CostFn, Symbol};
/// use symlar::eddist;
///
/// let vowels = CostFn::new(|l: Symbol<'_, char>, r: Symbol<'_, char>| {
///     match (l.token(), r.token()) {
///         (Some(a), Some(b)) if "aeiou".contains(*a) && "aeiou".contains(*b) => 0.5,
///         _ => 1.0,
///     }
/// })
/// .with_min_cost(0.5);
///
/// let cat: Vec<char> = "cat".chars().collect();
/// let cut: Vec<char> = "cut".chars().collect();
/// assert_eq!(eddist(&cat, &cut, &vowels), 0.5);
/// ```
#[derive(Clone, Copy)]
pub struct CostFn<F> {
    f: F,
    min_cost: f64,
    max_cost: f64,
}

impl<F> CostFn<F> {
    #[must_use]
    pub fn new<T: ?Sized>(f: F) -> Self
    where
        F: Fn(Symbol<'_, T>, Symbol<'_, T>) -> f64,
    {
        Self {
            f,
            min_cost: 0.0,
            max_cost: 1.0,
        }
    }

    #[must_use]
    pub fn with_min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = min_cost;
        self
    }

    #[must_use]
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = max_cost;
        self
    }
}

impl<F> std::fmt::Debug for CostFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostFn")
            .field("min_cost", &self.min_cost)
            .field("max_cost", &self.max_cost)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> CostFunction<T> for CostFn<F>
where
    F: Fn(Symbol<'_, T>, Symbol<'_, T>) -> f64,
{
    #[inline]
    fn cost(&self, left: Symbol<'_, T>, right: Symbol<'_, T>) -> f64 {
        (self.f)(left, right)
    }

    fn min_cost(&self) -> f64 {
        self.min_cost
    }

    fn max_cost(&self) -> f64 {
        self.max_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_distinct_from_tokens() {
        let a = 'a';
        assert!(Symbol::<char>::Gap.is_gap());
        assert_ne!(Symbol::Token(&a), GAP);
        assert_eq!(Symbol::Token(&a).token(), Some(&'a'));
        assert_eq!(Symbol::<char>::Gap.token(), None);
    }

    #[test]
    fn test_levenshtein_bounds() {
        let (a, b) = ('a', 'b');
        assert_eq!(LEVENSHTEIN.cost(Symbol::Token(&a), Symbol::Token(&b)), 1.0);
        assert_eq!(LEVENSHTEIN.cost(Symbol::Token(&a), GAP), 1.0);
        assert_eq!(CostFunction::<char>::min_cost(&LEVENSHTEIN), 1.0);
        assert_eq!(CostFunction::<char>::max_cost(&LEVENSHTEIN), 1.0);
    }

    #[test]
    fn test_weighted_cost_directions() {
        let weights = WeightedCost::new(3.0, 2.0, 1.0);
        let (a, b) = ('a', 'b');
        assert_eq!(weights.cost(GAP, Symbol::Token(&b)), 3.0);
        assert_eq!(weights.cost(Symbol::Token(&a), GAP), 2.0);
        assert_eq!(weights.cost(Symbol::Token(&a), Symbol::Token(&b)), 1.0);
        assert_eq!(CostFunction::<char>::min_cost(&weights), 1.0);
        assert_eq!(CostFunction::<char>::max_cost(&weights), 3.0);
    }

    #[test]
    fn test_weighted_cost_from_config() {
        let weights: WeightedCost =
            serde_json::from_str(r#"{"insertion": 0.5, "substitution": 2.0}"#).unwrap();
        assert_eq!(weights, WeightedCost::new(0.5, 1.0, 2.0));

        let json = serde_json::to_string(&WeightedCost::default()).unwrap();
        let back: WeightedCost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WeightedCost::default());
    }

    #[test]
    fn test_cost_fn_defaults_and_builders() {
        let f = CostFn::new(|_: Symbol<'_, char>, _: Symbol<'_, char>| 0.7);
        assert_eq!(CostFunction::<char>::min_cost(&f), 0.0);
        assert_eq!(CostFunction::<char>::max_cost(&f), 1.0);

        let f = f.with_min_cost(0.7).with_max_cost(0.7);
        let a = 'a';
        assert_eq!(f.cost(Symbol::Token(&a), GAP), 0.7);
        assert_eq!(CostFunction::<char>::min_cost(&f), 0.7);
        assert_eq!(CostFunction::<char>::max_cost(&f), 0.7);
    }

    #[test]
    fn test_reference_forwards_bounds() {
        let weights = WeightedCost::new(2.0, 2.0, 4.0);
        let by_ref = &weights;
        assert_eq!(CostFunction::<char>::min_cost(&by_ref), 2.0);
        assert_eq!(CostFunction::<char>::max_cost(&by_ref), 4.0);
    }
}
