//! SIV grammars (2009 onwards).

use super::table::{CategoryRule, Exclusion, RESTRICTED, SEP, Variant};
use crate::category::PlateCategory;

fn number_not_000() -> Exclusion {
    Exclusion::Equals {
        group: "number",
        values: &["000"],
    }
}

fn suffix_not_ss() -> Exclusion {
    Exclusion::Equals {
        group: "suffix",
        values: &["SS"],
    }
}

/// `AB-123-CD`: no WW series, no SS block, no 000 number.
pub fn normal() -> CategoryRule {
    let shape = format!(
        "^(?P<series>{RESTRICTED}{{2}}){SEP}(?P<number>[0-9]{{3}}){SEP}(?P<suffix>{RESTRICTED}{{2}})$"
    );
    CategoryRule::new(
        PlateCategory::SivNormal,
        vec![Variant::new(
            &shape,
            vec![
                Exclusion::Equals {
                    group: "series",
                    values: &["SS", "WW"],
                },
                number_not_000(),
                suffix_not_ss(),
            ],
        )],
    )
}

/// `W-123-AB`.
pub fn w_garage() -> CategoryRule {
    let shape = format!("^W{SEP}(?P<number>[0-9]{{3}}){SEP}(?P<suffix>{RESTRICTED}{{2}})$");
    CategoryRule::new(
        PlateCategory::SivWGarage,
        vec![Variant::new(&shape, vec![number_not_000(), suffix_not_ss()])],
    )
}

/// `WW-123-AB`.
pub fn ww() -> CategoryRule {
    let shape = format!("^WW{SEP}(?P<number>[0-9]{{3}}){SEP}(?P<suffix>{RESTRICTED}{{2}})$");
    CategoryRule::new(
        PlateCategory::SivWw,
        vec![Variant::new(&shape, vec![number_not_000(), suffix_not_ss()])],
    )
}

/// `AB 12 C`, issued to mopeds between July 2004 and July 2015.
///
/// The number runs 11 to 999 with no leading zero, never 10 and never a
/// multiple of 100. The S/S, T/T, W/W and AA/A series are checked against
/// the whole input. The last plate of the series, DH 123 K, is not
/// special-cased.
pub fn cyclo() -> CategoryRule {
    let shape = format!(
        "^(?P<series>{RESTRICTED}{{1,2}}){SEP}(?P<number>[0-9]{{2,3}}){SEP}(?P<suffix>{RESTRICTED})$"
    );
    CategoryRule::new(
        PlateCategory::SivCyclo,
        vec![Variant::new(
            &shape,
            vec![
                Exclusion::StartsWith {
                    group: "number",
                    values: &["0"],
                },
                Exclusion::Equals {
                    group: "number",
                    values: &["10"],
                },
                Exclusion::EndsWith {
                    group: "number",
                    values: &["00"],
                },
                Exclusion::pattern(&format!("^S{SEP}[0-9]*{SEP}S$")),
                Exclusion::pattern(&format!("^T{SEP}[0-9]*{SEP}T$")),
                Exclusion::pattern(&format!("^W{SEP}[0-9]*{SEP}W$")),
                Exclusion::pattern(&format!("^AA{SEP}[0-9]*{SEP}A$")),
            ],
        )],
    )
}
