//! Vehicle and restriction catalog types.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Weekday codes used by `restricted_days`, indexed from Sunday.
pub const WEEKDAY_CODES: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sab"];

/// Map a weekday to its dataset code.
pub fn weekday_code(day: Weekday) -> &'static str {
    WEEKDAY_CODES[day.num_days_from_sunday() as usize]
}

/// A truck profile available to planners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    /// Overall height in meters.
    pub height_m: f64,
    /// Gross weight in metric tons.
    pub weight_ton: f64,
    /// Descriptive catalog fields (e.g. `axles`), served back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Category of a restriction. Decides which rule the evaluator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    Height,
    Weight,
    TimeZone,
    Prohibited,
    Grade,
    Info,
}

impl RestrictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestrictionKind::Height => "height",
            RestrictionKind::Weight => "weight",
            RestrictionKind::TimeZone => "time_zone",
            RestrictionKind::Prohibited => "prohibited",
            RestrictionKind::Grade => "grade",
            RestrictionKind::Info => "info",
        }
    }
}

/// How serious an alert is for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank: lower is more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Danger => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

/// A known hazard or limitation on the road network.
///
/// Only the fields relevant to `kind` are expected to be set; the rest are
/// omitted when the catalog is served back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_ton: Option<f64>,
    /// Comma-separated hour ranges, e.g. `"07-10,17-20"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restricted_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grade_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Restriction {
    /// Parse `restricted_hours` into ranges. Missing hours yield no ranges.
    pub fn hour_ranges(&self) -> Result<Vec<HourRange>, HourRangeError> {
        match &self.restricted_hours {
            Some(hours) => hours
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(HourRange::parse)
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}

/// Error parsing an `"HH-HH"` hour range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hour range '{0}', expected HH-HH")]
pub struct HourRangeError(pub String);

/// A half-open window of hours `[start, end)`.
///
/// A range whose start is after its end wraps past midnight (`"22-06"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    /// Parse `"07-10"` or `"07:00-10:00"`. Minutes are ignored.
    pub fn parse(raw: &str) -> Result<Self, HourRangeError> {
        let err = || HourRangeError(raw.trim().to_string());
        let (start, end) = raw.trim().split_once('-').ok_or_else(err)?;
        let start = parse_hour(start).ok_or_else(err)?;
        let end = parse_hour(end).ok_or_else(err)?;
        if start > 23 || end > 24 {
            return Err(err());
        }
        Ok(Self { start, end })
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether `hour` (0..=23) falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

fn parse_hour(raw: &str) -> Option<u32> {
    let hour = raw.trim().split(':').next()?;
    if hour.is_empty() || !hour.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    hour.parse().ok()
}

/// The full static catalog loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
}

impl Dataset {
    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}
