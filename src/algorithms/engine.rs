//! Reusable scratch state for the dynamic-programming engines
//!
//! Every distance and verification routine needs a row (or two columns) of
//! accumulated costs. [`EditEngine`] owns those buffers so repeated calls
//! stop allocating once the buffers have grown to the longest input seen.
//!
//! All operations take `&mut self`: an engine cannot be shared between
//! threads or re-entered from inside a cost function. Keep one engine per
//! worker, or use the free functions, which build a fresh engine per call.

/// Owner of the DP buffers used by the distance, verification, similarity
/// and phonetic operations.
///
/// Buffers only grow. Their contents are overwritten on every call and carry
/// nothing from one call to the next.
///
/// # Example
/// ```
/// use symlar::{EditEngine, LEVENSHTEIN};
///
/// let mut engine = EditEngine::new();
/// let words: Vec<Vec<char>> = ["kitten", "sitting", "mitten"]
///     .iter()
///     .map(|w| w.chars().collect())
///     .collect();
///
/// assert_eq!(engine.lev(&words[0], &words[1]), 3);
/// assert!(engine.veddist(&words[0], &words[2], &LEVENSHTEIN, 1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditEngine {
    pub(super) row: Vec<f64>,
    pub(super) unit_row: Vec<usize>,
    pub(super) prev_col: Vec<f64>,
    pub(super) curr_col: Vec<f64>,
    pub(super) unit_prev_col: Vec<usize>,
    pub(super) unit_curr_col: Vec<usize>,
}

impl EditEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose buffers already fit sequences of up to `len` symbols.
    #[must_use]
    pub fn with_capacity(len: usize) -> Self {
        let cells = len + 1;
        Self {
            row: vec![0.0; cells],
            unit_row: vec![0; cells],
            prev_col: vec![0.0; cells],
            curr_col: vec![0.0; cells],
            unit_prev_col: vec![0; cells],
            unit_curr_col: vec![0; cells],
        }
    }

    /// Longest sequence the buffers currently fit without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        [
            self.row.len(),
            self.unit_row.len(),
            self.prev_col.len(),
            self.curr_col.len(),
            self.unit_prev_col.len(),
            self.unit_curr_col.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
        .saturating_sub(1)
    }
}

/// Borrow the first `len` cells of `buf`, growing it if needed.
#[inline]
pub(super) fn cells<T: Copy + Default>(buf: &mut Vec<T>, len: usize) -> &mut [T] {
    if buf.len() < len {
        buf.resize(len, T::default());
    }
    &mut buf[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_empty() {
        assert_eq!(EditEngine::new().capacity(), 0);
    }

    #[test]
    fn test_with_capacity() {
        assert_eq!(EditEngine::with_capacity(32).capacity(), 32);
    }

    #[test]
    fn test_cells_grow_but_never_shrink() {
        let mut buf: Vec<usize> = Vec::new();
        assert_eq!(cells(&mut buf, 4).len(), 4);
        assert_eq!(cells(&mut buf, 2).len(), 2);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_buffers_grow_on_use() {
        let mut engine = EditEngine::new();
        let a: Vec<char> = "abcdef".chars().collect();
        let b: Vec<char> = "abc".chars().collect();
        let _ = engine.lev(&a, &b);
        let _ = engine.eddist(&a, &b, &crate::LEVENSHTEIN);
        let _ = engine.vlev(&a, &b, 3.0);
        let _ = engine.veddist(&a, &b, &crate::LEVENSHTEIN, 3.0);
        assert_eq!(engine.capacity(), 3);
        assert!(engine.row.len() >= a.len() + 1);
        assert!(engine.prev_col.len() >= b.len() + 1);
    }
}
