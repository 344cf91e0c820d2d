//! Species and size classes for registered pets
//!
//! The platform registers dogs and cats. Size class only matters for dogs:
//! it selects the adult aging rate used by the age engine. Cats age at a
//! fixed rate regardless of size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Species of a registered pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    /// Spanish label used in owner-facing text
    pub fn label_es(&self) -> &'static str {
        match self {
            Species::Dog => "perro",
            Species::Cat => "gato",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" | "perro" => Ok(Species::Dog),
            "cat" | "gato" => Ok(Species::Cat),
            other => Err(ParseSpeciesError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown species '{0}' (expected dog or cat)")]
pub struct ParseSpeciesError(String);

/// Size class for dogs
///
/// Selects the linear pet-year slope applied after the first two years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogSize {
    Small,
    Medium,
    Large,
}

impl DogSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            DogSize::Small => "small",
            DogSize::Medium => "medium",
            DogSize::Large => "large",
        }
    }

    /// Pet-years added per calendar year once the dog is past 24 months.
    /// Larger breeds age faster.
    pub fn aging_rate(&self) -> f64 {
        match self {
            DogSize::Small => 4.0,
            DogSize::Medium => 5.0,
            DogSize::Large => 6.0,
        }
    }
}

impl fmt::Display for DogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "pequeno" | "pequeño" => Ok(DogSize::Small),
            "medium" | "mediano" => Ok(DogSize::Medium),
            "large" | "grande" => Ok(DogSize::Large),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown size '{0}' (expected small, medium or large)")]
pub struct ParseSizeError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_from_str() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("  Cat ".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("gato".parse::<Species>().unwrap(), Species::Cat);
        assert!("hamster".parse::<Species>().is_err());
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("small".parse::<DogSize>().unwrap(), DogSize::Small);
        assert_eq!("GRANDE".parse::<DogSize>().unwrap(), DogSize::Large);
        assert!("huge".parse::<DogSize>().is_err());
    }

    #[test]
    fn test_aging_rates_ordered_by_size() {
        assert!(DogSize::Small.aging_rate() < DogSize::Medium.aging_rate());
        assert!(DogSize::Medium.aging_rate() < DogSize::Large.aging_rate());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"dog\"");
        assert_eq!(serde_json::to_string(&DogSize::Medium).unwrap(), "\"medium\"");
    }
}
