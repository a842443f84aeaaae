//! The registration number value object.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{PlateCategory, PlateScheme};
use crate::classification::Classification;
use crate::format::format_matriculation;
use crate::rules::RuleSet;

/// A candidate registration number, kept exactly as supplied.
///
/// Construction never validates: any string, including the empty one, is
/// a legal value that simply fails every predicate. Displaying a value
/// yields its formatted form, never the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matriculation(String);

impl Matriculation {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Valid under any SIV sub-format.
    pub fn is_siv(&self) -> bool {
        RuleSet::global().matches_scheme(PlateScheme::Siv, &self.0)
    }

    pub fn is_siv_normal(&self) -> bool {
        self.matches(PlateCategory::SivNormal)
    }

    pub fn is_siv_w_garage(&self) -> bool {
        self.matches(PlateCategory::SivWGarage)
    }

    pub fn is_siv_ww(&self) -> bool {
        self.matches(PlateCategory::SivWw)
    }

    pub fn is_siv_cyclo(&self) -> bool {
        self.matches(PlateCategory::SivCyclo)
    }

    /// Valid under any supported FNI sub-format.
    pub fn is_fni(&self) -> bool {
        RuleSet::global().matches_scheme(PlateScheme::Fni, &self.0)
    }

    pub fn is_fni_normal(&self) -> bool {
        self.matches(PlateCategory::FniNormal)
    }

    pub fn is_fni_w_garage(&self) -> bool {
        self.matches(PlateCategory::FniWGarage)
    }

    pub fn is_fni_ww(&self) -> bool {
        self.matches(PlateCategory::FniWw)
    }

    /// Valid under either scheme.
    pub fn is_valid(&self) -> bool {
        self.is_siv() || self.is_fni()
    }

    pub fn matches(&self, category: PlateCategory) -> bool {
        RuleSet::global().matches(category, &self.0)
    }

    /// Every category this plate satisfies, SIV first.
    pub fn categories(&self) -> Vec<PlateCategory> {
        RuleSet::global().categories(&self.0)
    }

    /// The scheme this plate belongs to, SIV taking precedence.
    pub fn scheme(&self) -> Option<PlateScheme> {
        PlateScheme::all()
            .iter()
            .copied()
            .find(|scheme| RuleSet::global().matches_scheme(*scheme, &self.0))
    }

    /// Canonical display form; see [`format_matriculation`].
    pub fn formatted(&self) -> String {
        format_matriculation(&self.0)
    }

    pub fn classify(&self) -> Classification {
        Classification::of(self)
    }
}

impl fmt::Display for Matriculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl From<&str> for Matriculation {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Matriculation {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<Option<&str>> for Matriculation {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<String>> for Matriculation {
    fn from(raw: Option<String>) -> Self {
        raw.map(Self).unwrap_or_default()
    }
}

impl FromStr for Matriculation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Matriculation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
