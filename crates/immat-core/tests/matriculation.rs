//! Public contract of `Matriculation`.

use immat_core::{Matriculation, PlateCategory, PlateScheme};

fn plate(raw: &str) -> Matriculation {
    Matriculation::from(raw)
}

#[test]
fn siv_normal_plates_are_siv_not_fni() {
    for raw in ["AB-123-CD", "ab123cd", "AB 123 CD"] {
        let plate = plate(raw);
        assert!(plate.is_siv(), "{raw}");
        assert!(!plate.is_fni(), "{raw}");
    }
}

#[test]
fn siv_exclusions() {
    assert!(!plate("SS123CD").is_siv_normal());
    assert!(!plate("WW000CD").is_siv_ww());
    assert!(!plate("AB123SS").is_siv_normal());
}

#[test]
fn fni_department_boundary() {
    assert!(!plate("123A20").is_fni_normal());
    assert!(plate("123A2A").is_fni_normal());
    assert!(plate("123A971").is_fni_normal());
}

#[test]
fn empty_construction() {
    for plate in [Matriculation::default(), Matriculation::from("")] {
        assert!(!plate.is_siv());
        assert!(!plate.is_siv_normal());
        assert!(!plate.is_siv_w_garage());
        assert!(!plate.is_siv_ww());
        assert!(!plate.is_siv_cyclo());
        assert!(!plate.is_fni());
        assert!(!plate.is_fni_normal());
        assert!(!plate.is_fni_w_garage());
        assert!(!plate.is_fni_ww());
        assert_eq!(plate.formatted(), "");
    }
}

#[test]
fn cyclo_round_trip() {
    let formatted = plate("AB99C").formatted();
    assert_eq!(formatted, "AB 99 C");
    assert!(plate(&formatted).is_siv_cyclo());
}

#[test]
fn formatting_valid_siv_normal_is_stable() {
    let once = plate("ab 123-cd").formatted();
    assert_eq!(once, "AB-123-CD");
    assert_eq!(plate(&once).formatted(), once);
}

#[test]
fn ww_sub_series_is_only_siv_ww() {
    let plate = plate("WW-123-AB");
    assert_eq!(plate.categories(), vec![PlateCategory::SivWw]);
    assert!(!plate.is_siv_normal());
    assert!(!plate.is_siv_w_garage());
}

#[test]
fn fni_w_garage_is_not_fni_normal() {
    let plate = plate("123 W 75");
    assert_eq!(plate.categories(), vec![PlateCategory::FniWGarage]);
    assert_eq!(plate.scheme(), Some(PlateScheme::Fni));
    assert_eq!(plate.to_string(), "123 W 75");
}

#[test]
fn corsica_and_overseas_departments() {
    for raw in [
        "1234 AB 2A",
        "1234 AB 2B",
        "12 ABC 974",
        "5 W 976",
        "5 WW 971",
    ] {
        assert!(plate(raw).is_fni(), "{raw}");
    }
    for raw in ["1234 AB 20", "12 ABC 970", "5 W 977"] {
        assert!(!plate(raw).is_fni(), "{raw}");
    }
}

#[test]
fn excluded_historical_series_are_never_valid() {
    // Temporary import (TTT) and transit (TT) series.
    for raw in ["123 TTT 75", "123 TT 75", "123 TAB 75"] {
        assert!(!plate(raw).is_fni(), "{raw}");
    }
}

#[test]
fn predicates_are_total_over_odd_input() {
    for raw in ["\u{0}", "é", "   ", "-", "12345678901234567890", "ÀB-123-CD"] {
        let plate = plate(raw);
        assert!(!plate.is_valid(), "{raw:?}");
        let _ = plate.formatted();
    }
}

/// `$` anchors at the very end, so a trailing newline is part of the input
/// rather than being skipped as some regex engines do.
#[test]
fn trailing_newline_is_not_stripped_before_matching() {
    let with_newline = plate("AB-123-CD\n");
    assert!(!with_newline.is_siv_normal());
    assert!(!with_newline.is_valid());
    assert_eq!(with_newline.formatted(), "AB-123-CD\n");
    assert!(plate("AB-123-CD").is_siv_normal());
}

#[test]
fn last_cyclo_plate_is_accepted() {
    assert!(plate("DH 123 K").is_siv_cyclo());
}

#[test]
fn multiple_threads_share_the_rule_table() {
    let handles: Vec<_> = ["AB-123-CD", "123 AB 75", "AB 12 C", "nope"]
        .into_iter()
        .map(|raw| std::thread::spawn(move || plate(raw).is_valid()))
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, true, false]);
}
