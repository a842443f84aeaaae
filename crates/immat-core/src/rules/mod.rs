//! Plate grammars as an ordered table of category rules.
//!
//! Each category is a list of variants; a variant pairs a positive shape
//! (a regex with named groups) with exclusions checked only after the shape
//! matched. Separators between groups are optional: one ASCII whitespace
//! character or a dash. Matching ignores ASCII case.

mod fni;
mod siv;
mod table;

use std::sync::LazyLock;

pub use table::{CategoryRule, Exclusion, Variant};
pub(crate) use table::{SEP, compile};

use crate::category::{PlateCategory, PlateScheme};

static RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::build);

/// Every category rule, in [`PlateCategory::all`] order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    fn build() -> Self {
        Self {
            rules: vec![
                siv::normal(),
                siv::w_garage(),
                siv::ww(),
                siv::cyclo(),
                fni::normal(),
                fni::w_garage(),
                fni::ww(),
            ],
        }
    }

    /// The shared rule set, compiled on first use.
    pub fn global() -> &'static Self {
        &RULES
    }

    /// Get the rule for a category.
    pub fn get(&self, category: PlateCategory) -> &CategoryRule {
        self.rules
            .iter()
            .find(|rule| rule.category == category)
            .expect("every category has a rule")
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    /// Check a single category.
    pub fn matches(&self, category: PlateCategory, input: &str) -> bool {
        self.get(category).matches(input)
    }

    /// Check whether any category of the scheme accepts the input.
    pub fn matches_scheme(&self, scheme: PlateScheme, input: &str) -> bool {
        scheme
            .categories()
            .any(|category| self.matches(category, input))
    }

    /// All categories accepting the input, in table order.
    pub fn categories(&self, input: &str) -> Vec<PlateCategory> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(input))
            .map(|rule| rule.category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_category_order() {
        let order: Vec<_> = RuleSet::global().iter().map(|rule| rule.category).collect();
        assert_eq!(order, PlateCategory::all());
    }

    #[test]
    fn categories_lists_every_match() {
        let rules = RuleSet::global();
        assert_eq!(rules.categories("AB-123-CD"), vec![PlateCategory::SivNormal]);
        assert_eq!(rules.categories("123 WW 75"), vec![PlateCategory::FniWw]);
        assert!(rules.categories("hello").is_empty());
    }

    #[test]
    fn schemes_do_not_overlap_on_samples() {
        let rules = RuleSet::global();
        for plate in ["AB-123-CD", "W-123-AB", "WW-123-AB", "AB 12 C"] {
            assert!(rules.matches_scheme(PlateScheme::Siv, plate), "{plate}");
            assert!(!rules.matches_scheme(PlateScheme::Fni, plate), "{plate}");
        }
        for plate in ["123 AB 75", "123 W 75", "123 WWA 2B"] {
            assert!(rules.matches_scheme(PlateScheme::Fni, plate), "{plate}");
            assert!(!rules.matches_scheme(PlateScheme::Siv, plate), "{plate}");
        }
    }
}
