//! Command implementations - clean, ASCII-only terminal output

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use huella_common::{
    age_recommendations, calculate_age, calculate_from_age, parse_birth_date, AgeCategory,
    AgeOptions, DogSize, PetAgeResult, Species,
};

/// `huellactl age` - run the age engine the way the owner portal does
pub fn age(
    birth_date: Option<String>,
    years: Option<u32>,
    months: Option<u32>,
    species: &str,
    size: Option<&str>,
    json: bool,
) -> Result<()> {
    let species: Species = species.parse()?;
    let size: Option<DogSize> = size.map(str::parse).transpose()?;
    let options = AgeOptions {
        species,
        size,
        exact_age: None,
    };

    let result = match (birth_date, years) {
        (Some(raw), _) => {
            let birth = parse_birth_date(&raw)?;
            debug!("calculating from birth date {}", birth);
            calculate_age(birth, &options)?
        }
        (None, Some(years)) => calculate_from_age(years, months.unwrap_or(0), &options),
        (None, None) => bail!("either --birth-date or --years is required"),
    };

    let recommendations = age_recommendations(&result);

    if json {
        let payload = serde_json::json!({
            "result": result,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    display_result(&result, &recommendations);
    Ok(())
}

/// `huellactl stages` - reference table for support staff
pub fn stages() -> Result<()> {
    println!();
    println!("{}", "Life stages (elapsed months, upper bound exclusive)".bold());
    println!();
    for species in [Species::Dog, Species::Cat] {
        let senior_from = match species {
            Species::Dog => 84,
            Species::Cat => 96,
        };
        println!("  {}", species.as_str().cyan());
        println!("    cachorro  0-5");
        println!("    joven     6-23");
        println!("    adulto    24-{}", senior_from - 1);
        println!("    senior    {}+", senior_from);
        println!();
    }
    println!("Adult aging rates: dog small 4, medium 5, large 6; cat 4 (pet years per year)");
    println!();
    Ok(())
}

fn display_result(result: &PetAgeResult, recommendations: &[&str]) {
    let stage = match result.age_category {
        AgeCategory::Puppy => result.age_category.as_str().bright_green().to_string(),
        AgeCategory::Young => result.age_category.as_str().green().to_string(),
        AgeCategory::Adult => result.age_category.as_str().yellow().to_string(),
        AgeCategory::Senior => result.age_category.as_str().bright_red().to_string(),
    };

    println!();
    println!("{}", "[HUELLA] Pet age".bold());
    println!();
    println!("  Species:    {}", result.species.label_es());
    println!("  Age:        {} ({} human years)", result.span_label(), result.human_years);
    println!("  Pet years:  {}", result.pet_years.to_string().cyan());
    println!("  Stage:      {}", stage);
    println!();
    println!("{}", result.description);

    if !recommendations.is_empty() {
        println!();
        println!("{}", "[RECOMMENDATIONS]".bold());
        for item in recommendations {
            println!("  * {}", item);
        }
    }
    println!();
}
