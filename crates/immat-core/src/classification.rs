//! Serializable summary of everything known about one candidate.

use serde::{Deserialize, Serialize};

use crate::category::{PlateCategory, PlateScheme};
use crate::matriculation::Matriculation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Raw input as supplied.
    pub input: String,
    /// Canonical display form (computed even for invalid input).
    pub formatted: String,
    pub scheme: Option<PlateScheme>,
    /// Matching categories, SIV first.
    pub categories: Vec<PlateCategory>,
    pub valid: bool,
}

impl Classification {
    pub fn of(plate: &Matriculation) -> Self {
        let categories = plate.categories();
        Self {
            input: plate.as_str().to_string(),
            formatted: plate.formatted(),
            scheme: categories.first().map(PlateCategory::scheme),
            valid: !categories.is_empty(),
            categories,
        }
    }

    /// Valid and belonging to the given scheme.
    pub fn is_scheme(&self, scheme: PlateScheme) -> bool {
        self.categories
            .iter()
            .any(|category| category.scheme() == scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_siv_plate() {
        let classification = Matriculation::from("ab-123-cd").classify();
        assert_eq!(classification.input, "ab-123-cd");
        assert_eq!(classification.formatted, "AB-123-CD");
        assert_eq!(classification.scheme, Some(PlateScheme::Siv));
        assert_eq!(classification.categories, vec![PlateCategory::SivNormal]);
        assert!(classification.valid);
        assert!(classification.is_scheme(PlateScheme::Siv));
        assert!(!classification.is_scheme(PlateScheme::Fni));
    }

    #[test]
    fn invalid_input_still_formats() {
        let classification = Matriculation::from("123a20").classify();
        assert_eq!(classification.formatted, "123 A 20");
        assert_eq!(classification.scheme, None);
        assert!(classification.categories.is_empty());
        assert!(!classification.valid);
    }

    #[test]
    fn serializes_with_codes() {
        let classification = Matriculation::from("123 W 75").classify();
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["scheme"], "fni");
        assert_eq!(json["categories"][0], "fni-w-garage");
        assert_eq!(json["formatted"], "123 W 75");
        assert_eq!(json["valid"], true);
    }
}
