//! Declarative rule table: positive shapes paired with exclusion lists.

use std::fmt;

use regex::{Captures, Regex, RegexBuilder};
use tracing::trace;

use crate::category::PlateCategory;

/// Optional group separator: one ASCII whitespace character or a dash.
pub(crate) const SEP: &str = r"[\s-]?";

/// Latin letters without I, O and U.
pub(crate) const RESTRICTED: &str = "[A-HJ-NP-TV-Z]";

/// Compile a rule pattern: ASCII case-insensitive, no Unicode classes.
///
/// Patterns are static, so a failure here is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("Invalid plate rule regex")
}

/// A condition that disqualifies a candidate whose shape already matched.
#[derive(Debug, Clone)]
pub enum Exclusion {
    /// The named group equals one of the values.
    Equals {
        group: &'static str,
        values: &'static [&'static str],
    },
    /// The named group starts with one of the values.
    StartsWith {
        group: &'static str,
        values: &'static [&'static str],
    },
    /// The named group ends with one of the values.
    EndsWith {
        group: &'static str,
        values: &'static [&'static str],
    },
    /// The whole input matches the pattern.
    Pattern(Regex),
}

impl Exclusion {
    /// Whole-string exclusion pattern, compiled like shapes are.
    pub fn pattern(pattern: &str) -> Self {
        Self::Pattern(compile(pattern))
    }

    /// Returns true if this exclusion disqualifies the candidate.
    ///
    /// Group comparisons are made on the ASCII-uppercased group text; a
    /// group that did not participate in the match never fires.
    pub fn fires(&self, input: &str, captures: &Captures<'_>) -> bool {
        match self {
            Self::Equals { group, values } => group_text(captures, group)
                .is_some_and(|text| values.iter().any(|value| text == *value)),
            Self::StartsWith { group, values } => group_text(captures, group)
                .is_some_and(|text| values.iter().any(|value| text.starts_with(*value))),
            Self::EndsWith { group, values } => group_text(captures, group)
                .is_some_and(|text| values.iter().any(|value| text.ends_with(*value))),
            Self::Pattern(regex) => regex.is_match(input),
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals { group, values } => write!(f, "{group} in {values:?}"),
            Self::StartsWith { group, values } => write!(f, "{group} starts with {values:?}"),
            Self::EndsWith { group, values } => write!(f, "{group} ends with {values:?}"),
            Self::Pattern(regex) => write!(f, "matches /{}/", regex.as_str()),
        }
    }
}

fn group_text(captures: &Captures<'_>, group: &str) -> Option<String> {
    captures
        .name(group)
        .map(|found| found.as_str().to_ascii_uppercase())
}

/// One alternative grammar for a category.
#[derive(Debug, Clone)]
pub struct Variant {
    pub shape: Regex,
    pub exclusions: Vec<Exclusion>,
}

impl Variant {
    pub fn new(shape: &str, exclusions: Vec<Exclusion>) -> Self {
        Self {
            shape: compile(shape),
            exclusions,
        }
    }

    fn evaluate(&self, input: &str) -> Outcome<'_> {
        let Some(captures) = self.shape.captures(input) else {
            return Outcome::NoShape;
        };
        match self
            .exclusions
            .iter()
            .find(|exclusion| exclusion.fires(input, &captures))
        {
            Some(exclusion) => Outcome::Excluded(exclusion),
            None => Outcome::Accepted,
        }
    }
}

enum Outcome<'a> {
    NoShape,
    Excluded(&'a Exclusion),
    Accepted,
}

/// The grammar of one plate category: any variant may accept.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: PlateCategory,
    pub variants: Vec<Variant>,
}

impl CategoryRule {
    pub fn new(category: PlateCategory, variants: Vec<Variant>) -> Self {
        Self { category, variants }
    }

    /// Check the input against every variant.
    pub fn matches(&self, input: &str) -> bool {
        self.variants
            .iter()
            .any(|variant| match variant.evaluate(input) {
                Outcome::Accepted => true,
                Outcome::Excluded(exclusion) => {
                    trace!(
                        category = self.category.as_str(),
                        input,
                        %exclusion,
                        "shape matched but excluded"
                    );
                    false
                }
                Outcome::NoShape => false,
            })
    }
}
