//! Pet age engine
//!
//! Converts a birth date (or raw years/months) plus species and size into a
//! structured age result: elapsed human years/months, the species-adjusted
//! "pet years" equivalent, a life-stage category and an owner-facing
//! description. Pure arithmetic over calendar dates; the system clock is the
//! only hidden input and it is read exactly once per call.
//!
//! The pet-year model has three regimes:
//! - months 0..=12: linear ramp to 15 pet years at the first birthday
//! - months 12..=24: the second year adds 9 pet years (24 at age two)
//! - months > 24: linear at the species/size aging rate (4-6 per year)

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::species::{DogSize, Species};

/// Errors from the age engine
#[derive(Debug, Error)]
pub enum AgeError {
    /// The supplied birth date is after "today"
    #[error("birth date cannot be in the future")]
    BirthDateInFuture,

    /// The birth date string did not parse as a calendar date
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(#[from] chrono::ParseError),
}

/// Options controlling an age calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeOptions {
    pub species: Species,

    /// Size class; only meaningful for dogs, ignored for cats.
    /// Dogs default to medium when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DogSize>,

    /// Reserved by the platform API contract. Not read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_age: Option<bool>,
}

impl AgeOptions {
    pub fn dog(size: Option<DogSize>) -> Self {
        Self {
            species: Species::Dog,
            size,
            exact_age: None,
        }
    }

    pub fn cat() -> Self {
        Self {
            species: Species::Cat,
            size: None,
            exact_age: None,
        }
    }
}

/// Life-stage bucket derived from elapsed months and species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "cachorro")]
    Puppy,
    #[serde(rename = "joven")]
    Young,
    #[serde(rename = "adulto")]
    Adult,
    #[serde(rename = "senior")]
    Senior,
}

impl AgeCategory {
    /// Spanish label shown to owners (also the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Puppy => "cachorro",
            AgeCategory::Young => "joven",
            AgeCategory::Adult => "adulto",
            AgeCategory::Senior => "senior",
        }
    }

    /// Bucket for a given species and elapsed months.
    ///
    /// Upper bounds are strict: a dog at exactly 84 months (or a cat at
    /// exactly 96) is already senior.
    pub fn for_age(species: Species, total_months: u32) -> Self {
        let adult_until = match species {
            Species::Dog => 84,
            Species::Cat => 96,
        };
        if total_months < 6 {
            AgeCategory::Puppy
        } else if total_months < 24 {
            AgeCategory::Young
        } else if total_months < adult_until {
            AgeCategory::Adult
        } else {
            AgeCategory::Senior
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an age calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetAgeResult {
    pub species: Species,

    /// Whole human years elapsed
    pub years: u32,

    /// Remainder months, always in 0..=11
    pub months: u32,

    /// Decimal human age, one decimal
    pub human_years: f64,

    /// Species/size-adjusted age, one decimal
    pub pet_years: f64,

    pub age_category: AgeCategory,

    /// Owner-facing advisory line for this category and species
    pub description: String,
}

impl PetAgeResult {
    /// Humanized Spanish age span for profile cards ("1 año y 3 meses")
    pub fn span_label(&self) -> String {
        if self.years == 0 && self.months == 0 {
            return "recién nacido".to_string();
        }
        let years_part = match self.years {
            0 => None,
            1 => Some("1 año".to_string()),
            n => Some(format!("{} años", n)),
        };
        let months_part = match self.months {
            0 => None,
            1 => Some("1 mes".to_string()),
            n => Some(format!("{} meses", n)),
        };
        match (years_part, months_part) {
            (Some(y), Some(m)) => format!("{} y {}", y, m),
            (Some(y), None) => y,
            (None, Some(m)) => m,
            (None, None) => unreachable!(),
        }
    }
}

/// Calculate a pet's age from its birth date, evaluated against today's
/// local calendar date.
///
/// Fails with [`AgeError::BirthDateInFuture`] if the birth date is after
/// today; no partial result is produced.
pub fn calculate_age(birth_date: NaiveDate, options: &AgeOptions) -> Result<PetAgeResult, AgeError> {
    let today = Local::now().date_naive();
    calculate_age_at(birth_date, today, options)
}

/// Clock-free variant of [`calculate_age`]: the caller supplies "today".
pub fn calculate_age_at(
    birth_date: NaiveDate,
    today: NaiveDate,
    options: &AgeOptions,
) -> Result<PetAgeResult, AgeError> {
    if birth_date > today {
        return Err(AgeError::BirthDateInFuture);
    }
    let total_months = elapsed_months(birth_date, today);
    debug!(
        "age calculation: born {} -> {} elapsed months ({})",
        birth_date,
        total_months,
        options.species
    );
    Ok(compose_result(total_months, options))
}

/// Alternate entry over caller-supplied whole years and months.
///
/// Performs no date validation; months of 12 or more carry into years.
pub fn calculate_from_age(years: u32, months: u32, options: &AgeOptions) -> PetAgeResult {
    compose_result(years * 12 + months, options)
}

/// Parse an owner-supplied birth date. Accepts an ISO-8601 calendar date,
/// with or without a trailing time component.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, AgeError> {
    let date_part = input.trim().split('T').next().unwrap_or(input);
    let date = date_part.parse::<NaiveDate>()?;
    Ok(date)
}

/// Calendar-aware elapsed whole months between two dates, `birth <= today`.
/// The month is not complete until the day-of-month comes around again.
fn elapsed_months(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut months =
        (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn compose_result(total_months: u32, options: &AgeOptions) -> PetAgeResult {
    let years = total_months / 12;
    let months = total_months % 12;

    let pet_years = match options.species {
        Species::Dog => {
            let rate = options.size.unwrap_or(DogSize::Medium).aging_rate();
            pet_years_for(total_months, rate)
        }
        Species::Cat => pet_years_for(total_months, 4.0),
    };

    let age_category = AgeCategory::for_age(options.species, total_months);

    PetAgeResult {
        species: options.species,
        years,
        months,
        human_years: round_one_decimal(total_months as f64 / 12.0),
        pet_years: round_one_decimal(pet_years),
        age_category,
        description: age_description(options.species, age_category).to_string(),
    }
}

/// Three-regime pet-year curve. The first two regimes are shared by both
/// species; `adult_rate` only applies past 24 months.
fn pet_years_for(total_months: u32, adult_rate: f64) -> f64 {
    let m = total_months as f64;
    if total_months <= 12 {
        m * 15.0 / 12.0
    } else if total_months <= 24 {
        15.0 + (m - 12.0) * 9.0 / 12.0
    } else {
        24.0 + (m - 24.0) * adult_rate / 12.0
    }
}

/// Round half-up to one decimal place. Inputs here are never negative, so
/// f64's half-away-from-zero rounding coincides with half-up.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Owner-facing advisory line per species and life stage
fn age_description(species: Species, category: AgeCategory) -> &'static str {
    match (species, category) {
        (Species::Dog, AgeCategory::Puppy) => {
            "Tu cachorro está en plena etapa de crecimiento y socialización."
        }
        (Species::Dog, AgeCategory::Young) => {
            "Tu perro joven está lleno de energía: mantén el ejercicio diario."
        }
        (Species::Dog, AgeCategory::Adult) => {
            "Tu perro adulto necesita una rutina estable de ejercicio y revisiones anuales."
        }
        (Species::Dog, AgeCategory::Senior) => {
            "Tu perro senior merece chequeos veterinarios cada seis meses."
        }
        (Species::Cat, AgeCategory::Puppy) => {
            "Tu gatito está creciendo rápido: refuerza el juego y la socialización."
        }
        (Species::Cat, AgeCategory::Young) => {
            "Tu gato joven es muy activo: ofrécele juego diario y rascadores."
        }
        (Species::Cat, AgeCategory::Adult) => {
            "Tu gato adulto agradece una rutina estable y un control de peso anual."
        }
        (Species::Cat, AgeCategory::Senior) => {
            "Tu gato senior necesita revisiones veterinarias más frecuentes."
        }
    }
}
