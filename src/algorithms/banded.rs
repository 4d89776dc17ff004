//! Threshold verification of edit distance
//!
//! `veddist(L, R, f, k)` answers `eddist(L, R, f) <= k` without computing the
//! distance, and `vlev` does the same for unit costs. Both are much faster
//! than the exact computation when `k` is small relative to the inputs.
//!
//! Every step of an alignment costs at least `min_cost`, so a cell further
//! from the diagonal than the number of `min_cost` steps that fit in `k` can
//! only be reached by paths that already cost more than `k`. Only the diagonal band is filled,
//! one column (symbol of L) at a time; predecessors that fall outside their
//! own column's band count as unreachable. Costs never decrease along a
//! path, so once every cell of a column exceeds `k` the answer is `false`.
//!
//! A `min_cost` of 0 gives an unbounded band, i.e. the full table.
//!
//! Implemented after Hadjieleftheriou and Srivastava (2011), "Approximate
//! String Processing", Foundations and Trends in Databases 2(4).
//!
//! # Complexity
//! - Time: O(|L| · min(|R|, k / min_cost))
//! - Space: O(|R|)
//!
//! Inputs are not checked for validity.

use super::cost::{CostFunction, Symbol, GAP};
use super::engine::{cells, EditEngine};

/// Half-width of the diagonal band for threshold `max_dist`: the most gap
/// steps whose cheapest cost stays within it, capped at `limit`.
///
/// The cheapest cost is summed one step at a time, as the DP sums a path.
#[inline]
fn band_offset(max_dist: f64, min_cost: f64, limit: usize) -> usize {
    if min_cost.is_nan() || min_cost <= 0.0 {
        return limit;
    }
    let mut reach = 0.0;
    let mut offset = 0;
    while offset < limit {
        let next = reach + min_cost;
        if next > max_dist {
            break;
        }
        reach = next;
        offset += 1;
    }
    offset
}

impl EditEngine {
    /// Whether `eddist(left, right, cost_fn) <= max_dist`.
    ///
    /// Relies on `cost_fn.min_cost()` being a true lower bound.
    pub fn veddist<T, C>(&mut self, left: &[T], right: &[T], cost_fn: &C, max_dist: f64) -> bool
    where
        T: PartialEq,
        C: CostFunction<T> + ?Sized,
    {
        self.bounded_eddist(left, right, cost_fn, max_dist).is_some()
    }

    /// The weighted edit distance if it is at most `max_dist`, `None`
    /// otherwise.
    ///
    /// A returned distance is the exact value [`eddist`](Self::eddist)
    /// gives. Identical sequences always give `Some(0.0)`.
    pub fn bounded_eddist<T, C>(
        &mut self,
        left: &[T],
        right: &[T],
        cost_fn: &C,
        max_dist: f64,
    ) -> Option<f64>
    where
        T: PartialEq,
        C: CostFunction<T> + ?Sized,
    {
        if left == right {
            return Some(0.0);
        }
        if max_dist.is_nan() || max_dist < 0.0 {
            return None;
        }

        let len_gap = left.len().abs_diff(right.len());
        let offset = band_offset(
            max_dist,
            cost_fn.min_cost(),
            left.len().max(right.len()),
        );

        // Closing the length gap alone already costs too much
        if offset < len_gap {
            return None;
        }

        let height = right.len() + 1;

        let EditEngine {
            prev_col, curr_col, ..
        } = self;
        let mut prev = cells(prev_col, height);
        let mut curr = cells(curr_col, height);

        // Column 0: insert every symbol of `right`, as far as the band reaches
        prev[0] = 0.0;
        for r in 1..height.min(offset.saturating_add(1)) {
            prev[r] = prev[r - 1] + cost_fn.cost(GAP, Symbol::Token(&right[r - 1]));
        }

        for (i, l) in left.iter().enumerate() {
            let c = i + 1;
            let deletion = cost_fn.cost(Symbol::Token(l), GAP);

            curr[0] = prev[0] + deletion;
            let mut column_min = curr[0];

            let start = c.saturating_sub(offset).max(1);
            let end = height.min(c.saturating_add(offset).saturating_add(1));

            for r in start..end {
                let rs = &right[r - 1];

                // (r - 1, c) is in band
                let mut best = if r.saturating_add(offset) > c {
                    curr[r - 1] + cost_fn.cost(GAP, Symbol::Token(rs))
                } else {
                    f64::INFINITY
                };

                // (r, c - 1) is in band
                let left_step = if r < c.saturating_add(offset) {
                    prev[r] + deletion
                } else {
                    f64::INFINITY
                };
                if best > left_step {
                    best = left_step;
                }

                let diagonal = prev[r - 1]
                    + if l == rs {
                        0.0
                    } else {
                        cost_fn.cost(Symbol::Token(l), Symbol::Token(rs))
                    };
                if best > diagonal {
                    best = diagonal;
                }

                curr[r] = best;
                if column_min > best {
                    column_min = best;
                }
            }

            if column_min > max_dist {
                return None;
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        let distance = prev[height - 1];
        (distance <= max_dist).then_some(distance)
    }

    /// Whether `lev(left, right) <= max_dist`.
    ///
    /// Same banding as [`veddist`](Self::veddist) with unit costs; a
    /// fractional `max_dist` floors the band width and is compared against
    /// the integer distance.
    pub fn vlev<T: PartialEq>(&mut self, left: &[T], right: &[T], max_dist: f64) -> bool {
        if left == right {
            return true;
        }
        if max_dist < 0.0 {
            return false;
        }

        let len_gap = left.len().abs_diff(right.len());
        if len_gap as f64 > max_dist {
            return false;
        }

        let offset = (max_dist.floor() as usize).max(len_gap);
        let height = right.len() + 1;

        let EditEngine {
            unit_prev_col,
            unit_curr_col,
            ..
        } = self;
        let mut prev = cells(unit_prev_col, height);
        let mut curr = cells(unit_curr_col, height);

        for (r, cell) in prev
            .iter_mut()
            .enumerate()
            .take(offset.saturating_add(1))
        {
            *cell = r;
        }

        for (i, l) in left.iter().enumerate() {
            let c = i + 1;

            curr[0] = c;
            let mut column_min = c;

            let start = c.saturating_sub(offset).max(1);
            let end = height.min(c.saturating_add(offset).saturating_add(1));

            for r in start..end {
                let mut best = if r.saturating_add(offset) > c {
                    curr[r - 1] + 1
                } else {
                    usize::MAX
                };

                let left_step = if r < c.saturating_add(offset) {
                    prev[r] + 1
                } else {
                    usize::MAX
                };
                if best > left_step {
                    best = left_step;
                }

                let diagonal = prev[r - 1] + usize::from(*l != right[r - 1]);
                if best > diagonal {
                    best = diagonal;
                }

                curr[r] = best;
                if column_min > best {
                    column_min = best;
                }
            }

            if column_min as f64 > max_dist {
                return false;
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        prev[height - 1] as f64 <= max_dist
    }
}

/// Threshold verification of weighted edit distance with a one-off engine.
///
/// # Example
/// ```
/// use symlar::{veddist, WeightedCost};
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// let costs = WeightedCost::new(1.0, 1.0, 0.5);
///
/// // two substitutions and one insertion
/// assert!(veddist(&a, &b, &costs, 2.0));
/// assert!(!veddist(&a, &b, &costs, 1.5));
/// ```
#[must_use]
pub fn veddist<T, C>(left: &[T], right: &[T], cost_fn: &C, max_dist: f64) -> bool
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    EditEngine::new().veddist(left, right, cost_fn, max_dist)
}

/// Weighted edit distance capped at `max_dist`, with a one-off engine.
///
/// # Example
/// ```
/// use symlar::{bounded_eddist, LEVENSHTEIN};
///
/// let a: Vec<char> = "saturday".chars().collect();
/// let b: Vec<char> = "sunday".chars().collect();
/// assert_eq!(bounded_eddist(&a, &b, &LEVENSHTEIN, 3.0), Some(3.0));
/// assert_eq!(bounded_eddist(&a, &b, &LEVENSHTEIN, 2.0), None);
/// ```
#[must_use]
pub fn bounded_eddist<T, C>(left: &[T], right: &[T], cost_fn: &C, max_dist: f64) -> Option<f64>
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    EditEngine::new().bounded_eddist(left, right, cost_fn, max_dist)
}

/// Threshold verification of Levenshtein distance with a one-off engine.
///
/// # Example
/// ```
/// use symlar::vlev;
///
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert!(vlev(&kitten, &sitting, 3.0));
/// assert!(!vlev(&kitten, &sitting, 2.0));
/// ```
#[must_use]
pub fn vlev<T: PartialEq>(left: &[T], right: &[T], max_dist: f64) -> bool {
    EditEngine::new().vlev(left, right, max_dist)
}
