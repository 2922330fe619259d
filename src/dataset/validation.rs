//! Dataset validation.
//!
//! # Responsibilities
//! - Check that every restriction carries the fields its type needs
//! - Check hour ranges and weekday codes parse
//! - Detect duplicate vehicle and restriction ids
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs once at load; the evaluator assumes well-formed data

use std::collections::HashSet;
use std::fmt;

use crate::dataset::types::{Dataset, Restriction, RestrictionKind, WEEKDAY_CODES};

/// A single semantic problem found in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Dotted path to the offending entry, e.g. `restrictions[3]`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the loaded catalog.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut vehicle_ids = HashSet::new();
    for (i, vehicle) in dataset.vehicles.iter().enumerate() {
        let field = format!("vehicles[{}]", i);
        if vehicle.id.trim().is_empty() {
            errors.push(ValidationError::new(&field, "id must not be empty"));
        } else if !vehicle_ids.insert(vehicle.id.as_str()) {
            errors.push(ValidationError::new(&field, format!("duplicate vehicle id '{}'", vehicle.id)));
        }
        if !(vehicle.height_m.is_finite() && vehicle.height_m > 0.0) {
            errors.push(ValidationError::new(&field, "height_m must be a positive number"));
        }
        if !(vehicle.weight_ton.is_finite() && vehicle.weight_ton > 0.0) {
            errors.push(ValidationError::new(&field, "weight_ton must be a positive number"));
        }
    }

    let mut restriction_ids = HashSet::new();
    for (i, restriction) in dataset.restrictions.iter().enumerate() {
        let field = format!("restrictions[{}]", i);
        if restriction.id.trim().is_empty() {
            errors.push(ValidationError::new(&field, "id must not be empty"));
        } else if !restriction_ids.insert(restriction.id.as_str()) {
            errors.push(ValidationError::new(
                &field,
                format!("duplicate restriction id '{}'", restriction.id),
            ));
        }
        check_type_fields(&field, restriction, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_type_fields(field: &str, restriction: &Restriction, errors: &mut Vec<ValidationError>) {
    let missing = |name: &str| {
        ValidationError::new(
            field,
            format!("{} restriction requires '{}'", restriction.kind.as_str(), name),
        )
    };

    match restriction.kind {
        RestrictionKind::Height if restriction.max_height_m.is_none() => {
            errors.push(missing("max_height_m"));
        }
        RestrictionKind::Weight if restriction.max_weight_ton.is_none() => {
            errors.push(missing("max_weight_ton"));
        }
        RestrictionKind::Grade if restriction.max_grade_percent.is_none() => {
            errors.push(missing("max_grade_percent"));
        }
        RestrictionKind::Info if restriction.description.is_none() => {
            errors.push(missing("description"));
        }
        RestrictionKind::TimeZone => {
            if restriction.restricted_hours.is_none() {
                errors.push(missing("restricted_hours"));
            }
            if let Err(e) = restriction.hour_ranges() {
                errors.push(ValidationError::new(field, e.to_string()));
            }
            for day in &restriction.restricted_days {
                if !WEEKDAY_CODES.contains(&day.as_str()) {
                    errors.push(ValidationError::new(
                        field,
                        format!("unknown weekday code '{}'", day),
                    ));
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::{Severity, Vehicle};

    fn restriction(id: &str, kind: RestrictionKind) -> Restriction {
        Restriction {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            severity: Severity::Warning,
            max_height_m: None,
            max_weight_ton: None,
            restricted_hours: None,
            restricted_days: Vec::new(),
            max_grade_percent: None,
            description: None,
            lat: None,
            lng: None,
            extra: Default::default(),
        }
    }

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: id.to_string(),
            height_m: 4.0,
            weight_ton: 20.0,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_valid_dataset() {
        let mut height = restriction("h1", RestrictionKind::Height);
        height.max_height_m = Some(4.5);
        let mut zone = restriction("z1", RestrictionKind::TimeZone);
        zone.restricted_hours = Some("05-10,16-21".to_string());
        zone.restricted_days = vec!["seg".to_string(), "sex".to_string()];

        let dataset = Dataset {
            vehicles: vec![vehicle("truck")],
            restrictions: vec![height, zone, restriction("p1", RestrictionKind::Prohibited)],
        };
        assert!(validate_dataset(&dataset).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut zone = restriction("z1", RestrictionKind::TimeZone);
        zone.restricted_hours = Some("morning".to_string());
        zone.restricted_days = vec!["monday".to_string()];

        let dataset = Dataset {
            vehicles: vec![vehicle("truck"), vehicle("truck")],
            restrictions: vec![
                restriction("h1", RestrictionKind::Height),
                restriction("w1", RestrictionKind::Weight),
                zone,
            ],
        };

        let errors = validate_dataset(&dataset).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors[0].message.contains("duplicate vehicle id"));
        assert!(errors.iter().any(|e| e.message.contains("max_height_m")));
        assert!(errors.iter().any(|e| e.message.contains("max_weight_ton")));
        assert!(errors.iter().any(|e| e.message.contains("invalid hour range")));
        assert!(errors.iter().any(|e| e.message.contains("unknown weekday code 'monday'")));
    }

    #[test]
    fn test_duplicate_restriction_ids() {
        let dataset = Dataset {
            vehicles: vec![],
            restrictions: vec![
                restriction("p1", RestrictionKind::Prohibited),
                restriction("p1", RestrictionKind::Prohibited),
            ],
        };
        let errors = validate_dataset(&dataset).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "restrictions[1]");
    }
}
