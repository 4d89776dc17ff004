//! Property-based tests for the distance, verification and similarity
//! functions.
//!
//! The verifiers must agree exactly with the exact computations:
//!
//! 1. `veddist(L, R, f, k) == (eddist(L, R, f) <= k)`
//! 2. `vlev(L, R, k) == veddist(L, R, LEVENSHTEIN, k)`
//! 3. `vedsim(L, R, f, s) == (edsim(L, R, f) >= s)`
//! 4. `vphonesim(L, R, s) == (phonesim(L, R) >= s)`
//!
//! Weights are drawn from real intervals, and each relation is also checked
//! exactly at its boundary (threshold equal to the computed value).

use proptest::prelude::*;
use symlar::{
    bounded_eddist, edsim, eddist, lev, phonesim, vedsim, veddist, vlev, vphonesim, CostFunction,
    EditEngine, PronunciationDictionary, WeightedCost, LEVENSHTEIN,
};

fn arb_seq() -> impl Strategy<Value = Vec<char>> {
    prop::string::string_regex("[a-d]{0,12}")
        .unwrap()
        .prop_map(|s| s.chars().collect())
}

fn arb_weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..4.0]
}

/// Real-valued weights, possibly zero (full-width band)
fn arb_weights() -> impl Strategy<Value = WeightedCost> {
    (arb_weight(), arb_weight(), arb_weight()).prop_map(|(i, d, s)| WeightedCost::new(i, d, s))
}

/// Strictly positive real-valued weights (bounded band, non-zero `max_cost`)
fn arb_positive_weights() -> impl Strategy<Value = WeightedCost> {
    (0.01f64..4.0, 0.01f64..4.0, 0.01f64..4.0)
        .prop_map(|(i, d, s)| WeightedCost::new(i, d, s))
}

/// Small integer weights
fn arb_integer_weights() -> impl Strategy<Value = WeightedCost> {
    (0u8..=4, 0u8..=4, 0u8..=4)
        .prop_map(|(i, d, s)| WeightedCost::new(f64::from(i), f64::from(d), f64::from(s)))
}

const WORDS: &[&str] = &[
    "cat", "cut", "bat", "dog", "tomato", "potato", "knight", "night", "read", "red", "xyz", "",
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

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn veddist_accepts_exact_distance(a in arb_seq(), b in arb_seq(), w in arb_weights()) {
        let d = eddist(&a, &b, &w);
        prop_assert!(veddist(&a, &b, &w, d), "rejected its own distance {}", d);
    }

    #[test]
    fn veddist_rejects_below_distance(a in arb_seq(), b in arb_seq(), w in arb_weights()) {
        let d = eddist(&a, &b, &w);
        let below = d * (1.0 - 1e-12);
        prop_assume!(below < d);
        prop_assert!(!veddist(&a, &b, &w, below), "accepted {} below {}", below, d);
    }

    #[test]
    fn veddist_rejects_half_step_below_integer_distance(
        a in arb_seq(),
        b in arb_seq(),
        w in arb_integer_weights()
    ) {
        let d = eddist(&a, &b, &w);
        prop_assume!(d > 0.0);
        prop_assert!(!veddist(&a, &b, &w, d - 0.5), "accepted {} below {}", d - 0.5, d);
    }

    #[test]
    fn bounded_eddist_is_exact(
        a in arb_seq(),
        b in arb_seq(),
        w in arb_weights(),
        max_dist in 0.0f64..30.0
    ) {
        let d = eddist(&a, &b, &w);
        prop_assert_eq!(bounded_eddist(&a, &b, &w, max_dist), (d <= max_dist).then_some(d));
    }

    #[test]
    fn veddist_matches_eddist(
        a in arb_seq(),
        b in arb_seq(),
        w in arb_weights(),
        max_dist in 0.0f64..30.0
    ) {
        let d = eddist(&a, &b, &w);
        prop_assert_eq!(veddist(&a, &b, &w, max_dist), d <= max_dist);
    }

    #[test]
    fn vlev_matches_unit_cost_veddist(a in arb_seq(), b in arb_seq(), max_dist in 0.0f64..15.0) {
        prop_assert_eq!(vlev(&a, &b, max_dist), veddist(&a, &b, &LEVENSHTEIN, max_dist));
        prop_assert_eq!(vlev(&a, &b, max_dist), lev(&a, &b) as f64 <= max_dist);
    }

    #[test]
    fn unit_cost_eddist_is_lev(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(eddist(&a, &b, &LEVENSHTEIN), lev(&a, &b) as f64);
    }

    #[test]
    fn lev_symmetric(a in arb_seq(), b in arb_seq()) {
        prop_assert_eq!(lev(&a, &b), lev(&b, &a));
    }

    #[test]
    fn identity_costs_nothing(a in arb_seq(), w in arb_weights()) {
        prop_assert_eq!(eddist(&a, &a, &w), 0.0);
        prop_assert!(veddist(&a, &a, &w, 0.0));
        prop_assert!(vlev(&a, &a, 0.0));
    }

    #[test]
    fn distance_bounded_by_longest_times_max_cost(
        a in arb_seq(),
        b in arb_seq(),
        w in arb_positive_weights()
    ) {
        // The DP sums step by step, the bound is a product: allow rounding
        let bound = a.len().max(b.len()) as f64 * CostFunction::<char>::max_cost(&w);
        prop_assert!(eddist(&a, &b, &w) <= bound * (1.0 + 1e-12));
        let sim = edsim(&a, &b, &w);
        prop_assert!((-1e-12..=1.0).contains(&sim), "similarity {} out of range", sim);
    }

    #[test]
    fn vedsim_matches_edsim(
        a in arb_seq(),
        b in arb_seq(),
        w in arb_positive_weights(),
        s in 0.0f64..1.0
    ) {
        let sim = edsim(&a, &b, &w);
        prop_assert_eq!(vedsim(&a, &b, &w, s), sim >= s);
    }

    #[test]
    fn vedsim_accepts_exact_similarity(a in arb_seq(), b in arb_seq(), w in arb_positive_weights()) {
        let sim = edsim(&a, &b, &w);
        prop_assert!(vedsim(&a, &b, &w, sim), "rejected its own similarity {}", sim);
    }

    #[test]
    fn engine_reuse_matches_fresh_calls(
        pairs in prop::collection::vec((arb_seq(), arb_seq()), 1..8),
        w in arb_weights(),
        max_dist in 0.0f64..20.0
    ) {
        let mut engine = EditEngine::new();
        for (a, b) in &pairs {
            prop_assert_eq!(engine.eddist(a, b, &w), eddist(a, b, &w));
            prop_assert_eq!(engine.veddist(a, b, &w, max_dist), veddist(a, b, &w, max_dist));
            prop_assert_eq!(engine.lev(a, b), lev(a, b));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn vphonesim_matches_phonesim(
        l in prop::sample::select(WORDS),
        r in prop::sample::select(WORDS),
        s in 0.0f64..1.0
    ) {
        let dict = dictionary();
        let sim = phonesim(&dict, l, r);
        prop_assert_eq!(vphonesim(&dict, l, r, s), sim >= s);
        prop_assert!(vphonesim(&dict, l, r, sim), "rejected its own similarity {}", sim);
    }
}

#[test]
fn kitten_sitting() {
    let kitten: Vec<char> = "kitten".chars().collect();
    let sitting: Vec<char> = "sitting".chars().collect();

    assert_eq!(lev(&kitten, &sitting), 3);
    assert!(vlev(&kitten, &sitting, 3.0));
    assert!(!vlev(&kitten, &sitting, 2.0));

    let cheap = WeightedCost::new(1.0, 1.0, 0.5);
    assert_eq!(eddist(&kitten, &sitting, &cheap), 2.0);
    assert!(veddist(&kitten, &sitting, &cheap, 2.0));
    assert!(!veddist(&kitten, &sitting, &cheap, 1.5));
}

#[test]
fn empty_sequences() {
    let empty: Vec<char> = Vec::new();
    let abc: Vec<char> = "abc".chars().collect();

    assert_eq!(edsim(&empty, &empty, &LEVENSHTEIN), 1.0);
    assert!(vedsim(&empty, &empty, &LEVENSHTEIN, 1.0));
    assert_eq!(edsim(&empty, &abc, &LEVENSHTEIN), 0.0);
    assert_eq!(lev(&empty, &abc), 3);
    assert!(!vlev(&empty, &abc, 2.0));
}
