//! Exact edit distance
//!
//! Single-row dynamic programming over the (|L|+1) x (|R|+1) table:
//! - `eddist` for an arbitrary [`CostFunction`]
//! - `lev` for unit costs, without any cost-function calls
//!
//! When moving to the next row, the previous row's value at the current
//! column is carried in a scalar and becomes the diagonal predecessor of the
//! next column, so one row of |L|+1 cells is enough.
//!
//! # Complexity
//! - Time: O(|L|·|R|)
//! - Space: O(|L|)
//!
//! Inputs are not checked for validity.

use super::cost::{CostFunction, Symbol, GAP};
use super::engine::{cells, EditEngine};

impl EditEngine {
    /// Weighted edit distance between `left` and `right` under `cost_fn`.
    ///
    /// Equal sequences return 0 without touching the cost function.
    pub fn eddist<T, C>(&mut self, left: &[T], right: &[T], cost_fn: &C) -> f64
    where
        T: PartialEq,
        C: CostFunction<T> + ?Sized,
    {
        if left == right {
            return 0.0;
        }

        let row = cells(&mut self.row, left.len() + 1);

        // First row: delete every symbol of `left`
        row[0] = 0.0;
        for (c, l) in left.iter().enumerate() {
            row[c + 1] = row[c] + cost_fn.cost(Symbol::Token(l), GAP);
        }

        for r in right {
            let insertion = cost_fn.cost(GAP, Symbol::Token(r));
            let mut diagonal = row[0];
            let mut beside = diagonal + insertion;
            row[0] = beside;

            for (c, l) in left.iter().enumerate() {
                let mut best = diagonal
                    + if l == r {
                        0.0
                    } else {
                        cost_fn.cost(Symbol::Token(l), Symbol::Token(r))
                    };

                let above = row[c + 1] + insertion;
                if best > above {
                    best = above;
                }

                let left_step = beside + cost_fn.cost(Symbol::Token(l), GAP);
                if best > left_step {
                    best = left_step;
                }

                diagonal = row[c + 1];
                beside = best;
                row[c + 1] = best;
            }
        }

        row[left.len()]
    }

    /// Levenshtein distance: [`eddist`](Self::eddist) with unit costs.
    pub fn lev<T: PartialEq>(&mut self, left: &[T], right: &[T]) -> usize {
        if left == right {
            return 0;
        }

        let row = cells(&mut self.unit_row, left.len() + 1);
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = c;
        }

        for (i, r) in right.iter().enumerate() {
            let mut diagonal = i;
            let mut beside = i + 1;
            row[0] = beside;

            for (c, l) in left.iter().enumerate() {
                let mut best = diagonal + usize::from(l != r);

                let above = row[c + 1] + 1;
                if best > above {
                    best = above;
                }

                let left_step = beside + 1;
                if best > left_step {
                    best = left_step;
                }

                diagonal = row[c + 1];
                beside = best;
                row[c + 1] = best;
            }
        }

        row[left.len()]
    }
}

/// Weighted edit distance with a one-off engine.
///
/// # Example
/// ```
/// use symlar::{eddist, WeightedCost};
///
/// let ab: Vec<char> = "ab".chars().collect();
/// let a: Vec<char> = "a".chars().collect();
/// let costs = WeightedCost::new(3.0, 2.0, 1.0);
///
/// assert_eq!(eddist(&ab, &a, &costs), 2.0); // one deletion
/// assert_eq!(eddist(&a, &ab, &costs), 3.0); // one insertion
/// ```
#[must_use]
pub fn eddist<T, C>(left: &[T], right: &[T], cost_fn: &C) -> f64
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    EditEngine::new().eddist(left, right, cost_fn)
}

/// Levenshtein distance with a one-off engine.
///
/// # Example
/// ```
/// use symlar::lev;
///
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert_eq!(lev(&kitten, &sitting), 3);
/// ```
#[must_use]
pub fn lev<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    EditEngine::new().lev(left, right)
}
