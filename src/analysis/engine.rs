//! Rule evaluation mapping a vehicle and the current time to route alerts.

use crate::analysis::types::{Alert, EvaluationTime};
use crate::dataset::{weekday_code, Restriction, RestrictionKind, Vehicle};

/// Height margin under a clearance limit that still warrants a warning.
pub const HEIGHT_MARGIN_M: f64 = 0.3;

/// Vehicles heavier than this get grade warnings.
pub const GRADE_WEIGHT_THRESHOLD_TON: f64 = 30.0;

// Absorbs float error in `max - margin` so the margin boundary is inclusive.
const HEIGHT_TOLERANCE: f64 = 1e-9;

/// Evaluate every restriction against `vehicle` at time `at`.
///
/// The result is sorted by severity (danger, warning, info); alerts of equal
/// severity keep the order of `restrictions`.
pub fn evaluate(vehicle: &Vehicle, restrictions: &[Restriction], at: EvaluationTime) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = restrictions
        .iter()
        .filter_map(|restriction| {
            alert_message(vehicle, restriction, at)
                .map(|message| Alert::from_restriction(restriction, message))
        })
        .collect();

    // sort_by_key is stable
    alerts.sort_by_key(|alert| alert.severity.rank());

    tracing::debug!(
        vehicle = %vehicle.id,
        hour = at.hour,
        weekday = weekday_code(at.weekday),
        alerts = alerts.len(),
        "Restrictions evaluated"
    );
    alerts
}

/// Returns the alert message when `restriction` applies, `None` otherwise.
fn alert_message(vehicle: &Vehicle, restriction: &Restriction, at: EvaluationTime) -> Option<String> {
    match restriction.kind {
        RestrictionKind::Height => {
            let max = restriction.max_height_m?;
            if vehicle.height_m >= max {
                Some(format!(
                    "Seu veículo ({}m) excede o limite de {}m",
                    vehicle.height_m, max
                ))
            } else if vehicle.height_m >= max - HEIGHT_MARGIN_M - HEIGHT_TOLERANCE {
                Some(format!(
                    "Atenção: limite de {}m (seu veículo: {}m)",
                    max, vehicle.height_m
                ))
            } else {
                None
            }
        }
        RestrictionKind::Weight => {
            let max = restriction.max_weight_ton?;
            (vehicle.weight_ton > max).then(|| {
                format!(
                    "Seu veículo ({}t) excede o limite de {}t",
                    vehicle.weight_ton, max
                )
            })
        }
        RestrictionKind::TimeZone => Some(time_zone_message(restriction, at)),
        RestrictionKind::Prohibited => Some("Via proibida para caminhões".to_string()),
        RestrictionKind::Grade => {
            let grade = restriction.max_grade_percent?;
            (vehicle.weight_ton > GRADE_WEIGHT_THRESHOLD_TON).then(|| {
                format!("Ladeira íngreme ({}%). Cuidado com carga pesada.", grade)
            })
        }
        RestrictionKind::Info => restriction.description.clone(),
    }
}

/// Time zones are always reported; only the wording depends on whether the
/// window is active right now.
fn time_zone_message(restriction: &Restriction, at: EvaluationTime) -> String {
    let hours = restriction.restricted_hours.as_deref().unwrap_or_default();
    let today = weekday_code(at.weekday);

    let in_window = restriction
        .hour_ranges()
        .map(|ranges| ranges.iter().any(|range| range.contains(at.hour)))
        .unwrap_or(false);
    let restricted_today = restriction.restricted_days.iter().any(|day| day == today);

    if in_window && restricted_today {
        format!("Restrição ativa agora ({})", hours)
    } else {
        format!(
            "Verificar horário: {} ({})",
            hours,
            restriction.restricted_days.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Severity;
    use chrono::Weekday;

    fn vehicle(height_m: f64, weight_ton: f64) -> Vehicle {
        Vehicle {
            id: "test".to_string(),
            name: "Test Truck".to_string(),
            height_m,
            weight_ton,
            extra: Default::default(),
        }
    }

    fn restriction(id: &str, kind: RestrictionKind, severity: Severity) -> Restriction {
        Restriction {
            id: id.to_string(),
            name: format!("Restriction {}", id),
            kind,
            severity,
            max_height_m: None,
            max_weight_ton: None,
            restricted_hours: None,
            restricted_days: Vec::new(),
            max_grade_percent: None,
            description: None,
            lat: Some(-23.55),
            lng: Some(-46.63),
            extra: Default::default(),
        }
    }

    fn height(max: f64) -> Restriction {
        let mut r = restriction("h", RestrictionKind::Height, Severity::Danger);
        r.max_height_m = Some(max);
        r
    }

    fn time_zone(hours: &str, days: &[&str]) -> Restriction {
        let mut r = restriction("z", RestrictionKind::TimeZone, Severity::Warning);
        r.restricted_hours = Some(hours.to_string());
        r.restricted_days = days.iter().map(|d| d.to_string()).collect();
        r
    }

    fn noon_monday() -> EvaluationTime {
        EvaluationTime::new(12, Weekday::Mon)
    }

    #[test]
    fn test_height_exceeds_limit() {
        let alerts = evaluate(&vehicle(4.2, 20.0), &[height(4.0)], noon_monday());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Seu veículo (4.2m) excede o limite de 4m");
    }

    #[test]
    fn test_height_exact_limit_exceeds() {
        let alerts = evaluate(&vehicle(4.0, 20.0), &[height(4.0)], noon_monday());
        assert!(alerts[0].message.contains("excede"));
    }

    #[test]
    fn test_height_approaching_limit() {
        for h in [3.7, 3.8, 3.99] {
            let alerts = evaluate(&vehicle(h, 20.0), &[height(4.0)], noon_monday());
            assert_eq!(alerts.len(), 1, "height {} should warn", h);
            assert_eq!(
                alerts[0].message,
                format!("Atenção: limite de 4m (seu veículo: {}m)", h)
            );
        }
    }

    #[test]
    fn test_height_well_below_limit() {
        let alerts = evaluate(&vehicle(3.6, 20.0), &[height(4.0)], noon_monday());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_weight_strictly_greater() {
        let mut r = restriction("w", RestrictionKind::Weight, Severity::Danger);
        r.max_weight_ton = Some(23.0);

        assert!(evaluate(&vehicle(3.0, 23.0), &[r.clone()], noon_monday()).is_empty());

        let alerts = evaluate(&vehicle(3.0, 45.5), &[r], noon_monday());
        assert_eq!(alerts[0].message, "Seu veículo (45.5t) excede o limite de 23t");
    }

    #[test]
    fn test_grade_threshold() {
        let mut r = restriction("g", RestrictionKind::Grade, Severity::Warning);
        r.max_grade_percent = Some(12.0);

        assert!(evaluate(&vehicle(3.0, 30.0), &[r.clone()], noon_monday()).is_empty());

        let alerts = evaluate(&vehicle(3.0, 30.5), &[r], noon_monday());
        assert_eq!(
            alerts[0].message,
            "Ladeira íngreme (12%). Cuidado com carga pesada."
        );
    }

    #[test]
    fn test_prohibited_and_info_always_present() {
        let prohibited = restriction("p", RestrictionKind::Prohibited, Severity::Danger);
        let mut info = restriction("i", RestrictionKind::Info, Severity::Info);
        info.description = Some("Balança na saída".to_string());

        for v in [vehicle(2.0, 3.0), vehicle(4.5, 57.0)] {
            let alerts = evaluate(&v, &[prohibited.clone(), info.clone()], noon_monday());
            assert_eq!(alerts.len(), 2);
            assert_eq!(alerts[0].message, "Via proibida para caminhões");
            assert_eq!(alerts[1].message, "Balança na saída");
            assert_eq!(alerts[1].description.as_deref(), Some("Balança na saída"));
        }
    }

    #[test]
    fn test_time_zone_active() {
        let zone = time_zone("05-10,16-21", &["seg", "ter"]);
        let at = EvaluationTime::new(17, Weekday::Mon);
        let alerts = evaluate(&vehicle(3.0, 10.0), &[zone], at);
        assert_eq!(alerts[0].message, "Restrição ativa agora (05-10,16-21)");
    }

    #[test]
    fn test_time_zone_outside_window_still_reported() {
        let zone = time_zone("05-10,16-21", &["seg", "ter"]);

        // Right day, wrong hour
        let alerts = evaluate(&vehicle(3.0, 10.0), &[zone.clone()], noon_monday());
        assert_eq!(alerts[0].message, "Verificar horário: 05-10,16-21 (seg, ter)");

        // Right hour, wrong day
        let at = EvaluationTime::new(8, Weekday::Sun);
        let alerts = evaluate(&vehicle(3.0, 10.0), &[zone], at);
        assert!(alerts[0].message.starts_with("Verificar horário"));
    }

    #[test]
    fn test_sorted_by_severity_stable() {
        let mut info = restriction("i1", RestrictionKind::Info, Severity::Info);
        info.description = Some("first info".to_string());
        let zone = time_zone("05-10", &["seg"]);
        let p1 = restriction("p1", RestrictionKind::Prohibited, Severity::Danger);
        let mut info2 = restriction("i2", RestrictionKind::Info, Severity::Info);
        info2.description = Some("second info".to_string());
        let p2 = restriction("p2", RestrictionKind::Prohibited, Severity::Danger);

        let alerts = evaluate(
            &vehicle(3.0, 10.0),
            &[info, zone, p1, info2, p2],
            noon_monday(),
        );
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "z", "i1", "i2"]);
        assert!(alerts
            .windows(2)
            .all(|w| w[0].severity.rank() <= w[1].severity.rank()));
    }

    #[test]
    fn test_alert_copies_restriction_fields() {
        let alerts = evaluate(&vehicle(4.5, 10.0), &[height(4.0)], noon_monday());
        let alert = &alerts[0];
        assert_eq!(alert.id, "h");
        assert_eq!(alert.name, "Restriction h");
        assert_eq!(alert.kind, RestrictionKind::Height);
        assert_eq!(alert.severity, Severity::Danger);
        assert_eq!(alert.lat, Some(-23.55));
        assert_eq!(alert.lng, Some(-46.63));
    }
}
