//! Plate numbering schemes and their sub-formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// National numbering scheme a plate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateScheme {
    /// Système d'Immatriculation des Véhicules, in force since 2009.
    Siv,
    /// Fichier National des Immatriculations, the earlier scheme.
    Fni,
}

impl PlateScheme {
    /// Get all schemes.
    pub const fn all() -> &'static [Self] {
        &[Self::Siv, Self::Fni]
    }

    /// Lowercase code used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Siv => "siv",
            Self::Fni => "fni",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Siv => "SIV",
            Self::Fni => "FNI",
        }
    }

    /// Categories belonging to this scheme, in evaluation order.
    pub fn categories(&self) -> impl Iterator<Item = PlateCategory> + '_ {
        PlateCategory::all()
            .iter()
            .copied()
            .filter(move |category| category.scheme() == *self)
    }
}

impl fmt::Display for PlateScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlateScheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "siv" => Ok(Self::Siv),
            "fni" => Ok(Self::Fni),
            _ => Err(ParseError::UnknownScheme(s.to_string())),
        }
    }
}

/// A sub-format of one of the two schemes.
///
/// Categories are only names: each one is backed by a rule in
/// [`crate::rules`] evaluated against the raw plate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlateCategory {
    SivNormal,
    SivWGarage,
    SivWw,
    SivCyclo,
    FniNormal,
    FniWGarage,
    FniWw,
}

impl PlateCategory {
    /// Get all categories, SIV first.
    pub const fn all() -> &'static [Self] {
        &[
            Self::SivNormal,
            Self::SivWGarage,
            Self::SivWw,
            Self::SivCyclo,
            Self::FniNormal,
            Self::FniWGarage,
            Self::FniWw,
        ]
    }

    pub fn scheme(&self) -> PlateScheme {
        match self {
            Self::SivNormal | Self::SivWGarage | Self::SivWw | Self::SivCyclo => PlateScheme::Siv,
            Self::FniNormal | Self::FniWGarage | Self::FniWw => PlateScheme::Fni,
        }
    }

    /// Kebab-case code, e.g. `siv-normal`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SivNormal => "siv-normal",
            Self::SivWGarage => "siv-w-garage",
            Self::SivWw => "siv-ww",
            Self::SivCyclo => "siv-cyclo",
            Self::FniNormal => "fni-normal",
            Self::FniWGarage => "fni-w-garage",
            Self::FniWw => "fni-ww",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SivNormal => "SIV Normal",
            Self::SivWGarage => "SIV W garage",
            Self::SivWw => "SIV WW",
            Self::SivCyclo => "SIV Cyclo",
            Self::FniNormal => "FNI Normal",
            Self::FniWGarage => "FNI W garage",
            Self::FniWw => "FNI WW",
        }
    }

    /// Description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SivNormal => "Standard plate: AB-123-CD",
            Self::SivWGarage => "Dealer stock plate: W-123-AB",
            Self::SivWw => "Provisional plate: WW-123-AB",
            Self::SivCyclo => "Moped plate issued 2004-2015: AB 12 C",
            Self::FniNormal => "Standard plate: 123 AB 75",
            Self::FniWGarage => "Dealer stock plate: 123 W 75",
            Self::FniWw => "Provisional plate: 123 WWA 75",
        }
    }

    /// Parse a category from its code or label, ignoring case and
    /// treating spaces, underscores and dashes alike.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for PlateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlateCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
