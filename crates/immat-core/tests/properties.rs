//! Property tests over generated plates.

use immat_core::{Matriculation, PlateCategory};
use proptest::prelude::*;

const RESTRICTED: &str = "ABCDEFGHJKLMNPQRSTVWXYZ";

fn restricted_letter() -> impl Strategy<Value = char> {
    proptest::sample::select(RESTRICTED.chars().collect::<Vec<_>>())
}

fn separator() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec!["", " ", "-"])
}

/// Raw SIV normal candidates that satisfy every exclusion.
fn siv_normal() -> impl Strategy<Value = String> {
    (
        restricted_letter(),
        restricted_letter(),
        1u32..=999,
        restricted_letter(),
        restricted_letter(),
        separator(),
        separator(),
    )
        .prop_filter("excluded series", |(a, b, _, c, d, _, _)| {
            let series = format!("{a}{b}");
            series != "SS" && series != "WW" && format!("{c}{d}") != "SS"
        })
        .prop_map(|(a, b, number, c, d, first, second)| {
            format!("{a}{b}{first}{number:03}{second}{c}{d}")
        })
}

fn mixed_case(raw: &str, mask: &[bool]) -> String {
    raw.chars()
        .zip(mask.iter().cycle())
        .map(|(ch, lower)| if *lower { ch.to_ascii_lowercase() } else { ch })
        .collect()
}

proptest! {
    #[test]
    fn generated_siv_normal_plates_validate(raw in siv_normal()) {
        let plate = Matriculation::from(raw.as_str());
        prop_assert!(plate.is_siv_normal());
        prop_assert!(plate.is_siv());
        prop_assert!(!plate.is_fni());
    }

    #[test]
    fn formatting_siv_normal_is_idempotent(raw in siv_normal()) {
        let once = Matriculation::from(raw.as_str()).formatted();
        let twice = Matriculation::from(once.as_str()).formatted();
        prop_assert_eq!(&once, &twice);
        prop_assert!(Matriculation::from(once.as_str()).is_siv_normal());
    }

    #[test]
    fn validation_ignores_case(raw in "[A-Za-z0-9 -]{0,10}", mask in proptest::collection::vec(any::<bool>(), 1..8)) {
        let upper = Matriculation::from(raw.to_ascii_uppercase());
        let lower = Matriculation::from(raw.to_ascii_lowercase());
        let mixed = Matriculation::from(mixed_case(&raw, &mask));
        for category in PlateCategory::all() {
            let expected = upper.matches(*category);
            prop_assert_eq!(lower.matches(*category), expected);
            prop_assert_eq!(mixed.matches(*category), expected);
        }
    }

    #[test]
    fn formatted_output_is_uppercase(raw in "[A-Za-z0-9 -]{0,10}") {
        let formatted = Matriculation::from(raw.as_str()).formatted();
        prop_assert!(!formatted.chars().any(|ch| ch.is_ascii_lowercase()));
    }

    #[test]
    fn cyclo_candidates_round_trip(
        first in restricted_letter(),
        second in proptest::option::of(restricted_letter()),
        number in 11u32..=999,
        suffix in restricted_letter(),
    ) {
        let series: String = std::iter::once(first).chain(second).collect();
        let raw = format!("{series}{number}{suffix}");
        let plate = Matriculation::from(raw.as_str());
        let formatted = plate.formatted();
        prop_assert_eq!(&formatted, &format!("{series} {number} {suffix}"));
        prop_assert_eq!(
            Matriculation::from(formatted.as_str()).is_siv_cyclo(),
            plate.is_siv_cyclo()
        );
    }

    #[test]
    fn any_input_is_handled(raw in any::<String>()) {
        let plate = Matriculation::from(raw.as_str());
        let _ = plate.categories();
        let _ = plate.formatted();
    }
}
