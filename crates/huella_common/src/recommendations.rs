//! Care recommendations per life stage
//!
//! Fixed advisory tables keyed by age category, with a couple of
//! species-conditional extras for older pets. No I/O and no failure mode:
//! every result gets a fresh, non-empty list.

use crate::age::{AgeCategory, PetAgeResult};
use crate::species::Species;

/// Dogs past this many pet years get a dental evaluation reminder
const DOG_DENTAL_PET_YEARS: f64 = 7.0;

/// Cats past this many pet years get renal and weight monitoring reminders
const CAT_SENIOR_CARE_PET_YEARS: f64 = 8.0;

/// Derive the care recommendation list for a computed age result.
///
/// Category bucket first, in table order; species-conditional extras are
/// appended at the end.
pub fn age_recommendations(result: &PetAgeResult) -> Vec<&'static str> {
    let mut items: Vec<&'static str> = category_recommendations(result.age_category).to_vec();

    match result.species {
        Species::Dog if result.pet_years > DOG_DENTAL_PET_YEARS => {
            items.push("Programa una evaluación dental profesional.");
        }
        Species::Cat if result.pet_years > CAT_SENIOR_CARE_PET_YEARS => {
            items.push("Solicita un monitoreo de la función renal en la próxima visita.");
            items.push("Mantén un control de peso estricto para prevenir el sobrepeso.");
        }
        _ => {}
    }

    items
}

fn category_recommendations(category: AgeCategory) -> &'static [&'static str] {
    match category {
        AgeCategory::Puppy => &[
            "Completa el calendario de vacunación con tu veterinario.",
            "Desparasitación interna y externa según la pauta del veterinario.",
            "Prioriza la socialización temprana con personas y otros animales.",
            "Alimentación específica para cachorros, varias tomas al día.",
        ],
        AgeCategory::Young => &[
            "Consulta con tu veterinario sobre la esterilización.",
            "Establece una rutina diaria de ejercicio y juego.",
            "Comienza la higiene dental en casa cuanto antes.",
        ],
        AgeCategory::Adult => &[
            "Chequeo veterinario completo una vez al año.",
            "Vigila el peso y ajusta la ración si es necesario.",
            "Mantén el ejercicio constante, adaptado a su energía.",
        ],
        AgeCategory::Senior => &[
            "Chequeos veterinarios cada seis meses.",
            "Valora una dieta formulada para animales senior.",
            "Análisis de sangre periódicos para detectar problemas a tiempo.",
            "Observa cambios de movilidad, apetito o comportamiento.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::{calculate_from_age, AgeOptions};
    use crate::species::DogSize;

    #[test]
    fn test_every_category_has_recommendations() {
        for (years, months) in [(0u32, 2u32), (1, 0), (4, 0), (12, 0)] {
            let result = calculate_from_age(years, months, &AgeOptions::dog(None));
            assert!(
                age_recommendations(&result).len() >= 3,
                "thin list at {}y {}m",
                years,
                months
            );
        }
    }

    #[test]
    fn test_dog_dental_extra_threshold() {
        // 15 months -> 17.3 pet years, past the 7 pet-year threshold
        let result = calculate_from_age(1, 3, &AgeOptions::dog(Some(DogSize::Medium)));
        let items = age_recommendations(&result);
        assert!(items.iter().any(|s| s.contains("evaluación dental")));

        // 5 months -> 6.3 pet years, below the threshold
        let puppy = calculate_from_age(0, 5, &AgeOptions::dog(None));
        let puppy_items = age_recommendations(&puppy);
        assert!(!puppy_items.iter().any(|s| s.contains("evaluación dental")));
    }

    #[test]
    fn test_old_cat_gets_renal_and_weight_extras() {
        // 100 months -> 49.3 pet years, senior
        let result = calculate_from_age(8, 4, &AgeOptions::cat());
        let items = age_recommendations(&result);
        assert!(items.iter().any(|s| s.contains("renal")));
        assert!(items.iter().any(|s| s.contains("peso")));
    }

    #[test]
    fn test_extras_are_appended_after_bucket() {
        let result = calculate_from_age(8, 4, &AgeOptions::cat());
        let items = age_recommendations(&result);
        let bucket_len = 4; // senior bucket
        assert_eq!(items.len(), bucket_len + 2);
        assert!(items[bucket_len].contains("renal"));
        assert!(items[bucket_len + 1].contains("peso"));
    }

    #[test]
    fn test_newborn_cat_has_only_bucket_items() {
        let result = calculate_from_age(0, 0, &AgeOptions::cat());
        let items = age_recommendations(&result);
        assert_eq!(items.len(), 4); // puppy bucket, no extras at 0.0 pet years
    }

    #[test]
    fn test_fresh_list_each_call() {
        let result = calculate_from_age(3, 0, &AgeOptions::dog(Some(DogSize::Small)));
        let a = age_recommendations(&result);
        let b = age_recommendations(&result);
        assert_eq!(a, b);
    }
}
