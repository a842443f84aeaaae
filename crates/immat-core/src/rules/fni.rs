//! FNI grammars (before 2009).
//!
//! Only the ordinary, W garage and WW series are recognised. Temporary
//! import/export, transit, diplomatic, administrative, military and
//! agricultural series are never accepted.

use super::table::{CategoryRule, Exclusion, RESTRICTED, SEP, Variant};
use crate::category::PlateCategory;

/// Latin letters without I and O.
const NO_I_O: &str = "[A-HJ-NP-Z]";

/// Department code: mainland, Corsica or overseas.
const DEPARTMENT: &str = "(?P<department>97[1-6]|0[1-9]|[1-8][0-9]|9[0-5]|2[AB])";

fn no_leading_zero() -> Exclusion {
    Exclusion::StartsWith {
        group: "number",
        values: &["0"],
    }
}

fn department_not_20() -> Exclusion {
    Exclusion::Equals {
        group: "department",
        values: &["20"],
    }
}

/// `123 AB 75`.
///
/// The letter block is 1 to 3 letters with its own exclusions per length;
/// three-letter series only ever had up to 3 digits.
pub fn normal() -> CategoryRule {
    let one_letter = format!("^(?P<number>[0-9]{{1,4}}){SEP}(?P<series>[A-Z]){SEP}{DEPARTMENT}$");
    let two_letters =
        format!("^(?P<number>[0-9]{{1,4}}){SEP}(?P<series>{NO_I_O}{{2}}){SEP}{DEPARTMENT}$");
    let three_letters =
        format!("^(?P<number>[0-9]{{1,3}}){SEP}(?P<series>{NO_I_O}{{3}}){SEP}{DEPARTMENT}$");

    CategoryRule::new(
        PlateCategory::FniNormal,
        vec![
            Variant::new(
                &one_letter,
                vec![
                    no_leading_zero(),
                    Exclusion::Equals {
                        group: "series",
                        values: &["D", "I", "O", "W"],
                    },
                    department_not_20(),
                ],
            ),
            Variant::new(
                &two_letters,
                vec![
                    no_leading_zero(),
                    Exclusion::Equals {
                        group: "series",
                        values: &["SS", "TT", "WW"],
                    },
                    department_not_20(),
                ],
            ),
            Variant::new(
                &three_letters,
                vec![
                    no_leading_zero(),
                    Exclusion::StartsWith {
                        group: "series",
                        values: &["T", "W", "KKK", "MMM", "MMW", "MWM", "MWW"],
                    },
                    department_not_20(),
                ],
            ),
        ],
    )
}

/// `123 W 75`.
pub fn w_garage() -> CategoryRule {
    let shape = format!("^(?P<number>[0-9]{{1,4}}){SEP}W{SEP}{DEPARTMENT}$");
    CategoryRule::new(
        PlateCategory::FniWGarage,
        vec![Variant::new(&shape, vec![no_leading_zero(), department_not_20()])],
    )
}

/// `123 WW 75`, optionally followed by one more letter (`123 WWA 75`).
pub fn ww() -> CategoryRule {
    let shape =
        format!("^(?P<number>[0-9]{{1,4}}){SEP}WW(?P<series>{RESTRICTED})?{SEP}{DEPARTMENT}$");
    CategoryRule::new(
        PlateCategory::FniWw,
        vec![Variant::new(&shape, vec![no_leading_zero(), department_not_20()])],
    )
}
