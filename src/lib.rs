//! Symlar - weighted edit distance and similarity with fast threshold checks
//!
//! Compares two sequences of symbols (characters, tokens, phonemes) under a
//! user-supplied per-pair cost function.
//!
//! # Features
//! - Exact distance and similarity: [`lev`], [`eddist`], [`edsim`]
//! - Threshold verification without computing the exact value, orders of
//!   magnitude faster for small thresholds: [`vlev`], [`veddist`], [`vedsim`]
//! - Phonetic word similarity over a pronunciation dictionary:
//!   [`phonesim`], [`vphonesim`]
//! - Reusable DP buffers through [`EditEngine`]
//! - Optional validating wrappers in [`checked`]
//! - Python bindings (enabled with the `python` feature)
//!
//! The free functions trust their inputs. Sequences must not contain
//! anything a cost function would mistake for a gap, costs must be
//! non-negative, and a cost function's `min_cost` must be a true lower bound.
//!
//! # Example
//! ```
//! use symlar::{lev, vlev, edsim, WeightedCost};
//!
//! let kitten: Vec<char> = "kitten".chars().collect();
//! let sitting: Vec<char> = "sitting".chars().collect();
//!
//! assert_eq!(lev(&kitten, &sitting), 3);
//! assert!(vlev(&kitten, &sitting, 3.0));
//! assert!(!vlev(&kitten, &sitting, 2.0));
//!
//! let cheap_substitutions = WeightedCost::new(1.0, 1.0, 0.5);
//! assert!(edsim(&kitten, &sitting, &cheap_substitutions) > 0.7);
//! ```

pub mod algorithms;
pub mod checked;
pub mod dictionary;
pub mod error;

// Python bindings (enabled with python feature)
#[cfg(feature = "python")]
mod python;

pub use algorithms::{
    bounded_eddist, edsim, eddist, lev, phonesim, vedsim, veddist, vlev, vphonesim, CostFn,
    CostFunction, EditEngine, EnGbPhone, Levenshtein, PhoneticMatcher, Similarity, Symbol,
    WeightedCost, WeightedSimilarity, EN_GB_PHONE, GAP, LEVENSHTEIN,
};
pub use dictionary::{Pronunciation, PronunciationDictionary};
pub use error::{Result, SymlarError};
