//! Alert types produced by the restriction evaluator.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::dataset::{Restriction, RestrictionKind, Severity};

/// A restriction evaluated against a specific vehicle and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    pub severity: Severity,
    /// Driver-facing explanation of why this alert applies.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Alert {
    pub(crate) fn from_restriction(restriction: &Restriction, message: String) -> Self {
        Self {
            id: restriction.id.clone(),
            name: restriction.name.clone(),
            kind: restriction.kind,
            severity: restriction.severity,
            message,
            description: restriction.description.clone(),
            lat: restriction.lat,
            lng: restriction.lng,
        }
    }
}

/// The slice of wall-clock time the evaluator looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationTime {
    /// Hour of day, 0..=23.
    pub hour: u32,
    pub weekday: Weekday,
}

impl EvaluationTime {
    pub fn new(hour: u32, weekday: Weekday) -> Self {
        Self { hour, weekday }
    }

    /// Current local time of the server.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            hour: at.hour(),
            weekday: at.weekday(),
        }
    }
}
