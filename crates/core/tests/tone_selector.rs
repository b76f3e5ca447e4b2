//! Tone selector behavior as seen from the site

use conteranto_core::tone::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use conteranto_core::{select, Level, SliderChange, ToneMatrix};
use proptest::prelude::*;

#[test]
fn test_low_low() {
    assert_eq!(select(0, 0).unwrap(), "Maybe you could send the report sometime?");
}

#[test]
fn test_medium_medium() {
    assert_eq!(select(50, 50).unwrap(), "Could you please send the report?");
}

#[test]
fn test_high_high() {
    assert_eq!(
        select(100, 100).unwrap(),
        "I would appreciate it if you could send the report."
    );
}

#[test]
fn test_lower_edges_of_medium() {
    assert_eq!(select(35, 69).unwrap(), "Could you please send the report?");
}

#[test]
fn test_politeness_boundaries_switch_rows() {
    let matrix = ToneMatrix::standard();
    for d in [0, 34, 35, 50, 69, 70, 100] {
        let dl = Level::from_value(d);
        assert_eq!(select(34, d).unwrap(), matrix.lookup(Level::Low, dl).unwrap());
        assert_eq!(select(35, d).unwrap(), matrix.lookup(Level::Medium, dl).unwrap());
        assert_ne!(select(34, d).unwrap(), select(35, d).unwrap());
        assert_eq!(select(69, d).unwrap(), matrix.lookup(Level::Medium, dl).unwrap());
        assert_eq!(select(70, d).unwrap(), matrix.lookup(Level::High, dl).unwrap());
    }
}

#[test]
fn test_directness_boundaries_switch_columns() {
    let matrix = ToneMatrix::standard();
    for p in [0, 34, 35, 50, 69, 70, 100] {
        let pl = Level::from_value(p);
        assert_eq!(select(p, 34).unwrap(), matrix.lookup(pl, Level::Low).unwrap());
        assert_eq!(select(p, 35).unwrap(), matrix.lookup(pl, Level::Medium).unwrap());
        assert_eq!(select(p, 69).unwrap(), matrix.lookup(pl, Level::Medium).unwrap());
        assert_eq!(select(p, 70).unwrap(), matrix.lookup(pl, Level::High).unwrap());
        assert_ne!(select(p, 69).unwrap(), select(p, 70).unwrap());
    }
}

#[test]
fn test_all_sentences_distinct() {
    let matrix = ToneMatrix::standard();
    let mut seen = Vec::new();
    for p in Level::ALL {
        for d in Level::ALL {
            let s = matrix.lookup(p, d).unwrap();
            assert!(!seen.contains(&s), "duplicate sentence {s}");
            seen.push(s);
        }
    }
    assert_eq!(seen.len(), 9);
}

fn expected_level(v: i64) -> Level {
    if v < MEDIUM_THRESHOLD {
        Level::Low
    } else if v < HIGH_THRESHOLD {
        Level::Medium
    } else {
        Level::High
    }
}

proptest! {
    #[test]
    fn prop_select_matches_bucket_pair(p in 0i64..=100, d in 0i64..=100) {
        let text = select(p, d).unwrap();
        prop_assert!(!text.is_empty());
        let expected = ToneMatrix::standard()
            .lookup(expected_level(p), expected_level(d))
            .unwrap();
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn prop_select_is_idempotent(p in any::<i64>(), d in any::<i64>()) {
        let change = SliderChange::new(p, d);
        let first = ToneMatrix::standard().select(change).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(ToneMatrix::standard().select(change).unwrap(), first);
        }
    }
}
