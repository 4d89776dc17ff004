//! Phonetic similarity
//!
//! Words are compared by how they sound: each word is mapped to its
//! pronunciations through a [`PronunciationDictionary`], and the similarity
//! of two words is the best weighted edit similarity over every pair of
//! pronunciations, priced by the British English phoneme cost function
//! [`EN_GB_PHONE`].
//!
//! Words missing from the dictionary are compared by their spelling, one
//! symbol per character.
//!
//! # Complexity
//! - Time: O(|L|·|R|·p²) where p is the number of pronunciations per word (≈5)
//! - Space: O(|R|)

use std::borrow::Cow;

use log::trace;

use super::cost::{CostFunction, Symbol};
use super::engine::EditEngine;
use super::Similarity;
use crate::dictionary::{Pronunciation, PronunciationDictionary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Postalveolar,
    Palatal,
    Velar,
    Glottal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Manner {
    Stop,
    Affricate,
    Fricative,
    Nasal,
    Approximant,
    Lateral,
}

/// Articulatory features of a British English phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phone {
    /// `height`: 0 close .. 3 open; `backness`: 0 front .. 2 back
    Vowel {
        height: u8,
        backness: u8,
        diphthong: bool,
    },
    Consonant {
        place: Place,
        manner: Manner,
        voiced: bool,
    },
}

const fn vowel(height: u8, backness: u8) -> Phone {
    Phone::Vowel {
        height,
        backness,
        diphthong: false,
    }
}

const fn diphthong(height: u8, backness: u8) -> Phone {
    Phone::Vowel {
        height,
        backness,
        diphthong: true,
    }
}

const fn consonant(place: Place, manner: Manner, voiced: bool) -> Phone {
    Phone::Consonant {
        place,
        manner,
        voiced,
    }
}

/// Features of a phonetic symbol, `None` for anything outside the inventory
fn classify(symbol: &str) -> Option<Phone> {
    use Manner::*;
    use Place::*;

    let phone = match symbol {
        "iː" | "i" => vowel(0, 0),
        "ɪ" => vowel(1, 0),
        "ɛ" | "e" => vowel(2, 0),
        "æ" => vowel(3, 0),
        "ɜː" | "ə" => vowel(2, 1),
        "ʌ" => vowel(3, 1),
        "ɑː" | "ɒ" => vowel(3, 2),
        "ɔː" => vowel(2, 2),
        "ʊ" => vowel(1, 2),
        "uː" | "u" => vowel(0, 2),
        "eɪ" | "ɛə" => diphthong(2, 0),
        "aɪ" => diphthong(3, 0),
        "ɪə" => diphthong(1, 0),
        "əʊ" => diphthong(2, 1),
        "ɔɪ" => diphthong(2, 2),
        "aʊ" => diphthong(3, 2),
        "ʊə" => diphthong(1, 2),
        "p" => consonant(Bilabial, Stop, false),
        "b" => consonant(Bilabial, Stop, true),
        "t" => consonant(Alveolar, Stop, false),
        "d" => consonant(Alveolar, Stop, true),
        "k" => consonant(Velar, Stop, false),
        "ɡ" | "g" => consonant(Velar, Stop, true),
        "tʃ" => consonant(Postalveolar, Affricate, false),
        "dʒ" => consonant(Postalveolar, Affricate, true),
        "f" => consonant(Labiodental, Fricative, false),
        "v" => consonant(Labiodental, Fricative, true),
        "θ" => consonant(Dental, Fricative, false),
        "ð" => consonant(Dental, Fricative, true),
        "s" => consonant(Alveolar, Fricative, false),
        "z" => consonant(Alveolar, Fricative, true),
        "ʃ" => consonant(Postalveolar, Fricative, false),
        "ʒ" => consonant(Postalveolar, Fricative, true),
        "h" => consonant(Glottal, Fricative, false),
        "m" => consonant(Bilabial, Nasal, true),
        "n" => consonant(Alveolar, Nasal, true),
        "ŋ" => consonant(Velar, Nasal, true),
        "l" => consonant(Alveolar, Lateral, true),
        "ɹ" | "r" => consonant(Alveolar, Approximant, true),
        "w" => consonant(Velar, Approximant, true),
        "j" => consonant(Palatal, Approximant, true),
        _ => return None,
    };
    Some(phone)
}

fn substitution_cost(left: Phone, right: Phone) -> f64 {
    match (left, right) {
        (
            Phone::Vowel {
                height: h1,
                backness: b1,
                diphthong: d1,
            },
            Phone::Vowel {
                height: h2,
                backness: b2,
                diphthong: d2,
            },
        ) => {
            let apart = h1.abs_diff(h2) + b1.abs_diff(b2) + u8::from(d1 != d2);
            (0.25 * f64::from(apart)).clamp(0.25, 0.75)
        }
        (
            Phone::Consonant {
                place: p1,
                manner: m1,
                voiced: v1,
            },
            Phone::Consonant {
                place: p2,
                manner: m2,
                voiced: v2,
            },
        ) => {
            let apart = u8::from(p1 != p2) + u8::from(m1 != m2) + u8::from(v1 != v2);
            0.25 + 0.25 * f64::from(apart)
        }
        // Glides sit next to the close vowels
        (
            Phone::Consonant {
                manner: Manner::Approximant,
                place: Place::Palatal | Place::Velar,
                ..
            },
            Phone::Vowel { .. },
        )
        | (
            Phone::Vowel { .. },
            Phone::Consonant {
                manner: Manner::Approximant,
                place: Place::Palatal | Place::Velar,
                ..
            },
        ) => 0.75,
        _ => 1.0,
    }
}

fn gap_cost(symbol: &str) -> f64 {
    match symbol {
        "ə" | "h" => 0.5,
        _ => match classify(symbol) {
            Some(Phone::Vowel { .. }) => 0.75,
            _ => 1.0,
        },
    }
}

/// Feature-based edit costs over British English phonemes.
///
/// - Vowels differ by 0.25 per step of height or backness, plus 0.25 for a
///   monophthong/diphthong mismatch, between 0.25 and 0.75.
/// - Consonants cost 0.25 plus 0.25 per differing feature (place, manner,
///   voicing), up to 1.
/// - Glides against vowels cost 0.75, other vowel/consonant pairs 1.
/// - Inserting or deleting a vowel costs 0.75, schwa and `h` 0.5,
///   consonants 1.
/// - Symbols outside the inventory (including spelled-out fallbacks) cost 1
///   against anything.
///
/// Bounds: `min_cost = 0.25`, `max_cost = 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnGbPhone;

/// The British English phoneme cost function
pub const EN_GB_PHONE: EnGbPhone = EnGbPhone;

impl<T: AsRef<str> + ?Sized> CostFunction<T> for EnGbPhone {
    fn cost(&self, left: Symbol<'_, T>, right: Symbol<'_, T>) -> f64 {
        match (left, right) {
            (Symbol::Token(l), Symbol::Token(r)) => {
                match (classify(l.as_ref()), classify(r.as_ref())) {
                    (Some(l), Some(r)) => substitution_cost(l, r),
                    _ => 1.0,
                }
            }
            (Symbol::Token(s), Symbol::Gap) | (Symbol::Gap, Symbol::Token(s)) => {
                gap_cost(s.as_ref())
            }
            (Symbol::Gap, Symbol::Gap) => 0.0,
        }
    }

    fn min_cost(&self) -> f64 {
        0.25
    }

    fn max_cost(&self) -> f64 {
        1.0
    }
}

/// Pronunciations of `word`, or its spelling when the dictionary has none.
fn to_sounds<'d>(dictionary: &'d PronunciationDictionary, word: &str) -> Cow<'d, [Pronunciation]> {
    match dictionary.lookup(word) {
        Some(sounds) => Cow::Borrowed(sounds),
        None => {
            trace!("no pronunciation for {:?}, comparing its spelling", word);
            Cow::Owned(vec![word.chars().map(String::from).collect()])
        }
    }
}

impl EditEngine {
    /// Best phonetic similarity over all pronunciation pairs.
    pub fn phonesim(
        &mut self,
        dictionary: &PronunciationDictionary,
        left: &str,
        right: &str,
    ) -> f64 {
        let left_sounds = to_sounds(dictionary, left);
        let right_sounds = to_sounds(dictionary, right);

        let mut best_sim = 0.0;
        for l in left_sounds.iter() {
            for r in right_sounds.iter() {
                let sim = self.edsim(l.as_slice(), r.as_slice(), &EN_GB_PHONE);
                if sim > best_sim {
                    best_sim = sim;
                }
            }
        }
        best_sim
    }

    /// Whether some pronunciation pair reaches `min_sim`.
    ///
    /// Stops at the first passing pair.
    pub fn vphonesim(
        &mut self,
        dictionary: &PronunciationDictionary,
        left: &str,
        right: &str,
        min_sim: f64,
    ) -> bool {
        let left_sounds = to_sounds(dictionary, left);
        let right_sounds = to_sounds(dictionary, right);

        left_sounds.iter().any(|l| {
            right_sounds
                .iter()
                .any(|r| self.vedsim(l.as_slice(), r.as_slice(), &EN_GB_PHONE, min_sim))
        })
    }
}

/// Phonetic similarity of two words with a one-off engine.
///
/// # Example
/// ```
/// use symlar::{phonesim, PronunciationDictionary};
///
/// let dict = PronunciationDictionary::from_json_str(
///     r#"{"CAT": ["k æ t"], "CUT": ["k ʌ t"], "DOG": ["d ɒ ɡ"]}"#,
/// ).unwrap();
///
/// assert!(phonesim(&dict, "cat", "cut") > phonesim(&dict, "cat", "dog"));
/// ```
#[must_use]
pub fn phonesim(dictionary: &PronunciationDictionary, left: &str, right: &str) -> f64 {
    EditEngine::new().phonesim(dictionary, left, right)
}

/// Threshold verification of phonetic similarity with a one-off engine.
#[must_use]
pub fn vphonesim(
    dictionary: &PronunciationDictionary,
    left: &str,
    right: &str,
    min_sim: f64,
) -> bool {
    EditEngine::new().vphonesim(dictionary, left, right, min_sim)
}

/// Phonetic similarity bound to a pronunciation dictionary.
#[derive(Debug, Clone, Default)]
pub struct PhoneticMatcher {
    dictionary: PronunciationDictionary,
}

impl PhoneticMatcher {
    #[must_use]
    pub fn new(dictionary: PronunciationDictionary) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub fn dictionary(&self) -> &PronunciationDictionary {
        &self.dictionary
    }

    /// Pronunciations used for `word`, falling back to its spelling.
    #[must_use]
    pub fn pronunciations<'a>(&'a self, word: &str) -> Cow<'a, [Pronunciation]> {
        to_sounds(&self.dictionary, word)
    }
}

impl Similarity for PhoneticMatcher {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        phonesim(&self.dictionary, a, b)
    }

    fn meets(&self, a: &str, b: &str, min_similarity: f64) -> bool {
        vphonesim(&self.dictionary, a, b, min_similarity)
    }

    fn name(&self) -> &'static str {
        "phonetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::cost::GAP;

    const INVENTORY: &[&str] = &[
        "iː", "ɪ", "ɛ", "æ", "ɜː", "ə", "ʌ", "ɑː", "ɒ", "ɔː", "ʊ", "uː", "eɪ", "ɛə", "aɪ", "ɪə",
        "əʊ", "ɔɪ", "aʊ", "ʊə", "p", "b", "t", "d", "k", "ɡ", "tʃ", "dʒ", "f", "v", "θ", "ð", "s",
        "z", "ʃ", "ʒ", "h", "m", "n", "ŋ", "l", "ɹ", "w", "j", "x", "?",
    ];

    fn dictionary() -> PronunciationDictionary {
        PronunciationDictionary::from_json_str(
            r#"{
                "CAT": ["k æ t"],
                "CUT": ["k ʌ t"],
                "BAT": ["b æ t"],
                "DOG": ["d ɒ ɡ"],
                "TOMATO": ["t ə m ɑː t əʊ", "t ə m eɪ t əʊ"],
                "POTATO": ["p ə t eɪ t əʊ"],
                "KNIGHT": ["n aɪ t"],
                "NIGHT": ["n aɪ t"],
                "READ": ["ɹ iː d", "ɹ ɛ d"],
                "RED": ["ɹ ɛ d"]
            }"#,
        )
        .unwrap()
    }

    fn cost(l: &str, r: &str) -> f64 {
        EN_GB_PHONE.cost(Symbol::Token(l), Symbol::Token(r))
    }

    #[test]
    fn test_costs_respect_declared_bounds() {
        for l in INVENTORY {
            assert!(gap_cost(l) >= 0.25 && gap_cost(l) <= 1.0, "gap {}", l);
            assert_eq!(EN_GB_PHONE.cost(Symbol::Token(*l), GAP), gap_cost(l));
            assert_eq!(EN_GB_PHONE.cost(GAP, Symbol::Token(*l)), gap_cost(l));
            for r in INVENTORY {
                if l != r {
                    let c = cost(l, r);
                    assert!((0.25..=1.0).contains(&c), "{} -> {} = {}", l, r, c);
                    assert_eq!(c, cost(r, l), "asymmetric {} {}", l, r);
                }
            }
        }
    }

    #[test]
    fn test_feature_distances() {
        assert_eq!(cost("p", "b"), 0.5); // voicing
        assert_eq!(cost("t", "k"), 0.5); // place
        assert_eq!(cost("t", "s"), 0.5); // manner
        assert_eq!(cost("p", "z"), 1.0); // everything
        assert_eq!(cost("ɡ", "g"), 0.25); // same phone, two spellings
        assert_eq!(cost("æ", "ʌ"), 0.25);
        assert_eq!(cost("iː", "ɑː"), 0.75);
        assert_eq!(cost("j", "iː"), 0.75);
        assert_eq!(cost("k", "æ"), 1.0);
        assert_eq!(cost("x", "k"), 1.0);
    }

    #[test]
    fn test_spelling_fallback() {
        let dict = dictionary();
        let sounds = to_sounds(&dict, "zyx");
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0], vec!["z".to_string(), "y".into(), "x".into()]);
        assert!(matches!(to_sounds(&dict, "cat"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_homophones() {
        let dict = dictionary();
        assert_eq!(phonesim(&dict, "knight", "night"), 1.0);
        assert!(vphonesim(&dict, "knight", "NIGHT", 1.0));
    }

    #[test]
    fn test_best_pronunciation_wins() {
        let dict = dictionary();
        // READ has a pronunciation identical to RED
        assert_eq!(phonesim(&dict, "read", "red"), 1.0);
        assert!(vphonesim(&dict, "read", "red", 1.0));
    }

    #[test]
    fn test_similar_sounds_rank_higher() {
        let dict = dictionary();
        let cat_cut = phonesim(&dict, "cat", "cut");
        let cat_bat = phonesim(&dict, "cat", "bat");
        let cat_dog = phonesim(&dict, "cat", "dog");
        // one vowel step over three phonemes
        assert!((cat_cut - (1.0 - 0.25 / 3.0)).abs() < 1e-12);
        // k -> b differs in place and voicing
        assert!((cat_bat - (1.0 - 0.75 / 3.0)).abs() < 1e-12);
        assert!(cat_cut > cat_bat);
        assert!(cat_bat > cat_dog);
    }

    #[test]
    fn test_tomato_potato() {
        let dict = dictionary();
        let sim = phonesim(&dict, "tomato", "potato");
        // via the "eɪ" pronunciation: t -> p (place) and m -> t (all features)
        assert!((sim - 0.75).abs() < 1e-12);
        assert!(vphonesim(&dict, "tomato", "potato", 0.7));
        assert!(!vphonesim(&dict, "tomato", "potato", 0.8));
    }

    #[test]
    fn test_verification_matches_similarity() {
        let dict = dictionary();
        let matcher = PhoneticMatcher::new(dict.clone());
        let words = ["cat", "cut", "bat", "dog", "tomato", "potato", "read", "red", "zyx", ""];
        for a in words {
            for b in words {
                let sim = phonesim(&dict, a, b);
                for s in [0.0, 0.2, 0.5, 0.7, 0.85, 0.95, 1.0, sim] {
                    assert_eq!(vphonesim(&dict, a, b, s), sim >= s, "{} {} {}", a, b, s);
                }
                assert!(matcher.meets(a, b, sim), "{} {} at {}", a, b, sim);
            }
        }
    }

    #[test]
    fn test_matcher_trait() {
        let matcher = PhoneticMatcher::new(dictionary());
        assert_eq!(matcher.similarity("knight", "night"), 1.0);
        assert!(matcher.meets("cat", "cut", 0.9));
        assert!(!matcher.meets("cat", "dog", 0.9));
        assert_eq!(matcher.pronunciations("tomato").len(), 2);
        assert_eq!(matcher.dictionary().len(), 10);
        assert_eq!(matcher.name(), "phonetic");
    }
}
