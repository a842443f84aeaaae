//! Canonical display form, applied without validating.

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::{SEP, compile};

/// A shape with three groups and the separator used to rejoin them.
struct FormatRule {
    shape: Regex,
    separator: char,
}

impl FormatRule {
    fn new(shape: &str, separator: char) -> Self {
        Self {
            shape: compile(shape),
            separator,
        }
    }

    fn apply(&self, input: &str) -> Option<String> {
        let captures = self.shape.captures(input)?;
        let sep = self.separator;
        Some(format!(
            "{}{sep}{}{sep}{}",
            &captures[1], &captures[2], &captures[3]
        ))
    }
}

/// Tried in order; the first shape that matches is used.
static FORMAT_RULES: LazyLock<Vec<FormatRule>> = LazyLock::new(|| {
    vec![
        // SIV normal, WW and W garage
        FormatRule::new(
            &format!("^([A-Z]{{2}}|W){SEP}([0-9]{{3}}){SEP}([A-Z]{{2}})$"),
            '-',
        ),
        // SIV cyclo
        FormatRule::new(
            &format!("^([A-Z]{{1,2}}){SEP}([0-9]{{2,3}}){SEP}([A-Z])$"),
            ' ',
        ),
        // FNI
        FormatRule::new(
            &format!("^([0-9]+){SEP}([A-Z]{{1,3}}){SEP}([0-9]{{2,3}}|2[AB])$"),
            ' ',
        ),
    ]
});

/// Regroup a raw plate string into its display form and uppercase it.
///
/// Strings matching no known shape are only uppercased. The input is not
/// validated: `ZZ000ZZ` formats as `ZZ-000-ZZ` although it is not a
/// valid plate.
pub fn format_matriculation(raw: &str) -> String {
    FORMAT_RULES
        .iter()
        .find_map(|rule| rule.apply(raw))
        .unwrap_or_else(|| raw.to_string())
        .to_ascii_uppercase()
}
