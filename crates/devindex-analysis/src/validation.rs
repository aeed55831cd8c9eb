//! Structural checks run before any scoring.

use std::collections::HashSet;

use devindex_core::errors::InputError;
use devindex_core::types::Entity;

/// Year must fall within `[min, max]` inclusive.
pub fn validate_year(year: i32, min: i32, max: i32) -> Result<(), InputError> {
    if year < min || year > max {
        return Err(InputError::InvalidYear { year, min, max });
    }
    Ok(())
}

/// Population must be non-empty with unique entity ids.
pub fn validate_population(entities: &[Entity]) -> Result<(), InputError> {
    if entities.is_empty() {
        return Err(InputError::EmptyPopulation);
    }
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.id.as_str()) {
            return Err(InputError::DuplicateEntity {
                id: entity.id.clone(),
            });
        }
    }
    Ok(())
}

/// k for a caller-requested cluster count: at least `min_k`, at most half
/// the population, never more than the population itself.
pub fn clamp_report_k(requested: usize, min_k: usize, population: usize) -> usize {
    requested.min(population / 2).max(min_k).min(population)
}

/// k for a full analysis run with the configured default count, capped at
/// the population.
pub fn clamp_analysis_k(requested: usize, population: usize) -> usize {
    requested.clamp(1, population.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds_inclusive() {
        assert!(validate_year(2000, 2000, 2100).is_ok());
        assert!(validate_year(2100, 2000, 2100).is_ok());
        assert_eq!(
            validate_year(1999, 2000, 2100),
            Err(InputError::InvalidYear {
                year: 1999,
                min: 2000,
                max: 2100
            })
        );
        assert!(validate_year(2101, 2000, 2100).is_err());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let entities = vec![
            Entity::new("a", "A", "R"),
            Entity::new("b", "B", "R"),
            Entity::new("a", "A again", "R"),
        ];
        assert_eq!(
            validate_population(&entities),
            Err(InputError::DuplicateEntity { id: "a".into() })
        );
        assert_eq!(validate_population(&[]), Err(InputError::EmptyPopulation));
    }

    #[test]
    fn report_k_clamping() {
        assert_eq!(clamp_report_k(4, 2, 20), 4);
        assert_eq!(clamp_report_k(4, 2, 6), 3);
        assert_eq!(clamp_report_k(4, 2, 3), 2);
        assert_eq!(clamp_report_k(10, 2, 1), 1);
        assert_eq!(clamp_report_k(1, 2, 10), 2);
    }

    #[test]
    fn analysis_k_clamping() {
        assert_eq!(clamp_analysis_k(4, 12), 4);
        assert_eq!(clamp_analysis_k(4, 3), 3);
        assert_eq!(clamp_analysis_k(0, 3), 1);
    }
}
