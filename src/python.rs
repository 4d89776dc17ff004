//! Python bindings
//!
//! Exposes the distance, verification and phonetic functions as the
//! `symlar._core` extension module. Strings are compared per character.

use pyo3::create_exception;
use pyo3::prelude::*;
use smallvec::SmallVec;

use crate::algorithms::{self, WeightedCost};
use crate::checked;
use crate::dictionary::PronunciationDictionary;
use crate::error::SymlarError as CoreError;

// SymlarError (base)
//   └── ValidationError - Invalid thresholds or cost weights

create_exception!(symlar, SymlarError, pyo3::exceptions::PyException);
create_exception!(symlar, ValidationError, SymlarError);

fn to_py_err(err: CoreError) -> PyErr {
    match err {
        CoreError::Validation(msg) => ValidationError::new_err(msg),
        other => SymlarError::new_err(other.to_string()),
    }
}

type Chars = SmallVec<[char; 64]>;

fn chars(s: &str) -> Chars {
    s.chars().collect()
}

/// Unit-cost edit distance between two strings.
#[pyfunction]
fn lev(a: &str, b: &str) -> usize {
    algorithms::lev(&chars(a), &chars(b))
}

/// Whether the unit-cost edit distance is at most `max_dist`.
#[pyfunction]
fn vlev(a: &str, b: &str, max_dist: f64) -> PyResult<bool> {
    checked::vlev(&chars(a), &chars(b), max_dist).map_err(to_py_err)
}

/// Weighted edit distance.
///
/// # Arguments
/// * `insertion` - Cost of inserting a character of `b`
/// * `deletion` - Cost of deleting a character of `a`
/// * `substitution` - Cost of replacing a character with a different one
#[pyfunction]
#[pyo3(signature = (a, b, insertion=1.0, deletion=1.0, substitution=1.0))]
fn eddist(a: &str, b: &str, insertion: f64, deletion: f64, substitution: f64) -> PyResult<f64> {
    let cost = WeightedCost::new(insertion, deletion, substitution);
    checked::eddist(&chars(a), &chars(b), &cost).map_err(to_py_err)
}

/// Whether the weighted edit distance is at most `max_dist`.
#[pyfunction]
#[pyo3(signature = (a, b, max_dist, insertion=1.0, deletion=1.0, substitution=1.0))]
fn veddist(
    a: &str,
    b: &str,
    max_dist: f64,
    insertion: f64,
    deletion: f64,
    substitution: f64,
) -> PyResult<bool> {
    let cost = WeightedCost::new(insertion, deletion, substitution);
    checked::veddist(&chars(a), &chars(b), &cost, max_dist).map_err(to_py_err)
}

/// Weighted edit similarity (0.0 to 1.0).
#[pyfunction]
#[pyo3(signature = (a, b, insertion=1.0, deletion=1.0, substitution=1.0))]
fn edsim(a: &str, b: &str, insertion: f64, deletion: f64, substitution: f64) -> PyResult<f64> {
    let cost = WeightedCost::new(insertion, deletion, substitution);
    checked::edsim(&chars(a), &chars(b), &cost).map_err(to_py_err)
}

/// Whether the weighted edit similarity is at least `min_sim`.
#[pyfunction]
#[pyo3(signature = (a, b, min_sim, insertion=1.0, deletion=1.0, substitution=1.0))]
fn vedsim(
    a: &str,
    b: &str,
    min_sim: f64,
    insertion: f64,
    deletion: f64,
    substitution: f64,
) -> PyResult<bool> {
    let cost = WeightedCost::new(insertion, deletion, substitution);
    checked::vedsim(&chars(a), &chars(b), &cost, min_sim).map_err(to_py_err)
}

/// Phonetic word similarity backed by a pronunciation dictionary.
#[pyclass(name = "PhoneticMatcher")]
struct PyPhoneticMatcher {
    inner: algorithms::PhoneticMatcher,
}

#[pymethods]
impl PyPhoneticMatcher {
    /// Load the dictionary from a JSON file, or start empty.
    #[new]
    #[pyo3(signature = (path=None))]
    fn new(path: Option<&str>) -> PyResult<Self> {
        let dictionary = match path {
            Some(path) => PronunciationDictionary::from_path(path).map_err(to_py_err)?,
            None => PronunciationDictionary::new(),
        };
        Ok(Self {
            inner: algorithms::PhoneticMatcher::new(dictionary),
        })
    }

    /// Build a matcher from a JSON document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let dictionary = PronunciationDictionary::from_json_str(json).map_err(to_py_err)?;
        Ok(Self {
            inner: algorithms::PhoneticMatcher::new(dictionary),
        })
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        algorithms::phonesim(self.inner.dictionary(), a, b)
    }

    fn verify(&self, a: &str, b: &str, min_sim: f64) -> PyResult<bool> {
        checked::vphonesim(self.inner.dictionary(), a, b, min_sim).map_err(to_py_err)
    }

    /// Pronunciations used for `word`.
    fn pronunciations(&self, word: &str) -> Vec<Vec<String>> {
        self.inner.pronunciations(word).into_owned()
    }

    fn __len__(&self) -> usize {
        self.inner.dictionary().len()
    }

    fn __repr__(&self) -> String {
        format!("PhoneticMatcher(words={})", self.inner.dictionary().len())
    }
}

/// Phonetic similarity of two words using `matcher`'s dictionary.
#[pyfunction]
fn phonesim(matcher: PyRef<'_, PyPhoneticMatcher>, a: &str, b: &str) -> f64 {
    algorithms::phonesim(matcher.inner.dictionary(), a, b)
}

/// Whether the phonetic similarity of two words is at least `min_sim`.
#[pyfunction]
fn vphonesim(
    matcher: PyRef<'_, PyPhoneticMatcher>,
    a: &str,
    b: &str,
    min_sim: f64,
) -> PyResult<bool> {
    checked::vphonesim(matcher.inner.dictionary(), a, b, min_sim).map_err(to_py_err)
}

#[pymodule]
fn _core(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("SymlarError", py.get_type::<SymlarError>())?;
    m.add("ValidationError", py.get_type::<ValidationError>())?;

    m.add_class::<PyPhoneticMatcher>()?;

    m.add_function(wrap_pyfunction!(lev, m)?)?;
    m.add_function(wrap_pyfunction!(vlev, m)?)?;
    m.add_function(wrap_pyfunction!(eddist, m)?)?;
    m.add_function(wrap_pyfunction!(veddist, m)?)?;
    m.add_function(wrap_pyfunction!(edsim, m)?)?;
    m.add_function(wrap_pyfunction!(vedsim, m)?)?;
    m.add_function(wrap_pyfunction!(phonesim, m)?)?;
    m.add_function(wrap_pyfunction!(vphonesim, m)?)?;

    Ok(())
}
