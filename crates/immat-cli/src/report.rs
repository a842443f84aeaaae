//! Checked plates and acceptance policy.

use immat_core::{Classification, Matriculation, PlateCategory, PlateScheme};
use serde::Serialize;

/// Which categories count as acceptable for a run.
///
/// An empty policy accepts any valid plate.
#[derive(Debug, Clone, Default)]
pub struct AcceptPolicy {
    pub scheme: Option<PlateScheme>,
    pub categories: Vec<PlateCategory>,
}

impl AcceptPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: Option<PlateScheme>) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<PlateCategory>) -> Self {
        self.categories = categories;
        self
    }

    pub fn allows(&self, category: PlateCategory) -> bool {
        self.scheme.is_none_or(|scheme| category.scheme() == scheme)
            && (self.categories.is_empty() || self.categories.contains(&category))
    }

    pub fn accepts(&self, classification: &Classification) -> bool {
        classification
            .categories
            .iter()
            .any(|category| self.allows(*category))
    }
}

/// One classified plate plus the policy verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedPlate {
    /// Source line, for plates read from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(flatten)]
    pub classification: Classification,
    pub accepted: bool,
}

impl CheckedPlate {
    pub fn check(raw: &str, line: Option<u64>, policy: &AcceptPolicy) -> Self {
        let classification = Matriculation::from(raw).classify();
        let accepted = policy.accepts(&classification);
        Self {
            line,
            classification,
            accepted,
        }
    }
}

/// Results for a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub plates: Vec<CheckedPlate>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.plates.len()
    }

    pub fn accepted_count(&self) -> usize {
        self.plates.iter().filter(|plate| plate.accepted).count()
    }

    pub fn rejected(&self) -> impl Iterator<Item = &CheckedPlate> {
        self.plates.iter().filter(|plate| !plate.accepted)
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected().count()
    }

    pub fn all_accepted(&self) -> bool {
        self.plates.iter().all(|plate| plate.accepted)
    }

    /// Whether the run should exit with status 0.
    pub fn exit_ok(&self, allow_invalid: bool) -> bool {
        allow_invalid || self.all_accepted()
    }

    /// Number of plates matching the category, whether accepted or not.
    pub fn count_for(&self, category: PlateCategory) -> usize {
        self.plates
            .iter()
            .filter(|plate| plate.classification.categories.contains(&category))
            .count()
    }

    /// One-line summary for logs and terminal output.
    pub fn summary_line(&self) -> String {
        format!(
            "checked {} plate(s): {} accepted, {} rejected",
            self.total(),
            self.accepted_count(),
            self.rejected_count()
        )
    }
}

impl FromIterator<CheckedPlate> for CheckReport {
    fn from_iter<I: IntoIterator<Item = CheckedPlate>>(iter: I) -> Self {
        Self {
            plates: iter.into_iter().collect(),
        }
    }
}
