use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::WorkoutError, locale::Locale};

/// A map location, always ordered (latitude, longitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coords {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for (f64, f64) {
    fn from(coords: Coords) -> Self {
        (coords.lat, coords.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚵‍♂️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(WorkoutError::UnknownWorkoutKind(other.to_owned())),
        }
    }
}

/// Last ten digits of the creation time in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn from_date(date: &DateTime<Utc>) -> Self {
        let millis = date.timestamp_millis().to_string();
        let start = millis.len().saturating_sub(10);
        Self(millis[start..].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running { temp: f64, pace: f64 },
    Cycling { climb: f64, speed: f64 },
}

/// One logged session. Everything is fixed at construction, including the
/// derived metric and the description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: WorkoutId,
    date: DateTime<Utc>,
    coords: Coords,
    distance: f64,
    duration: f64,
    description: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    /// Distance in km, duration in minutes, temp in steps/min.
    pub fn running(
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        temp: f64,
        locale: Locale,
    ) -> Result<Self, WorkoutError> {
        let pace = derive("pace", duration, distance, "distance")? / 60.;
        Ok(Self::new(date, coords, distance, duration, WorkoutDetails::Running { temp, pace }, locale))
    }

    /// Distance in km, duration in minutes, climb in meters.
    pub fn cycling(
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        climb: f64,
        locale: Locale,
    ) -> Result<Self, WorkoutError> {
        let speed = derive("speed", distance, duration, "duration")?;
        Ok(Self::new(date, coords, distance, duration, WorkoutDetails::Cycling { climb, speed }, locale))
    }

    fn new(
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        details: WorkoutDetails,
        locale: Locale,
    ) -> Self {
        let kind = details.kind();
        Self {
            id: WorkoutId::from_date(&date),
            date,
            coords,
            distance,
            duration,
            description: describe(kind, &date, locale),
            details,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn date(&self) -> &DateTime<Utc> {
        &self.date
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

pub fn describe(kind: WorkoutKind, date: &DateTime<Utc>, locale: Locale) -> String {
    format!("{} {}", locale.kind_label(kind), locale.format_date(date))
}

fn derive(metric: &'static str, numerator: f64, denominator: f64, divisor: &'static str) -> Result<f64, WorkoutError> {
    if denominator == 0. {
        return Err(WorkoutError::DivisionByZeroDerivation { metric, divisor });
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(WorkoutError::NonFiniteDerivation { metric });
    }
    Ok(value)
}
