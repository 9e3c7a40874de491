use serde::{Deserialize, Serialize};

use crate::{
    error::{InvalidInput, WorkoutError},
    workout::WorkoutKind,
};

/// Raw field contents as read from the workout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub temp: String,
    pub climb: String,
}

/// Checked numbers for one workout, ready for the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling.
    pub extra: f64,
}

impl WorkoutInput {
    /// Pace for running, speed for cycling, computed the way the model does.
    pub fn derived_metric(&self) -> (&'static str, f64) {
        match self.kind {
            WorkoutKind::Running => ("pace", self.duration / self.distance / 60.),
            WorkoutKind::Cycling => ("speed", self.distance / self.duration),
        }
    }
}

impl FormValues {
    pub fn running(distance: &str, duration: &str, temp: &str) -> Self {
        Self {
            kind: WorkoutKind::Running.as_str().into(),
            distance: distance.into(),
            duration: duration.into(),
            temp: temp.into(),
            climb: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, climb: &str) -> Self {
        Self {
            kind: WorkoutKind::Cycling.as_str().into(),
            distance: distance.into(),
            duration: duration.into(),
            temp: String::new(),
            climb: climb.into(),
        }
    }

    /// Every numeric field of the selected kind must be finite and > 0.
    pub fn validate(&self) -> Result<WorkoutInput, WorkoutError> {
        let kind: WorkoutKind = self.kind.parse()?;
        let (extra_field, extra) = match kind {
            WorkoutKind::Running => ("temp", &self.temp),
            WorkoutKind::Cycling => ("climb", &self.climb),
        };

        let input = WorkoutInput {
            kind,
            distance: positive("distance", &self.distance)?,
            duration: positive("duration", &self.duration)?,
            extra: positive(extra_field, extra)?,
        };

        let (metric, derived) = input.derived_metric();
        if !derived.is_finite() {
            return Err(WorkoutError::InvalidWorkoutData(InvalidInput::MetricNotFinite { metric }));
        }
        Ok(input)
    }

    /// Empties the numeric fields, keeping the selected kind.
    pub fn clear_numbers(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.temp.clear();
        self.climb.clear();
    }
}

/// Blank input reads as zero, like a browser number coercion.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.);
    }
    trimmed.parse().ok()
}

fn positive(field: &'static str, raw: &str) -> Result<f64, WorkoutError> {
    let value = parse_number(raw)
        .filter(|value| value.is_finite())
        .ok_or(WorkoutError::InvalidWorkoutData(InvalidInput::NotANumber { field }))?;

    if value <= 0. {
        return Err(WorkoutError::InvalidWorkoutData(InvalidInput::NotPositive { field, value }));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(values: FormValues) -> &'static str {
        match values.validate() {
            Err(WorkoutError::InvalidWorkoutData(input)) => input.field(),
            other => panic!("expected invalid data, got {other:?}"),
        }
    }

    #[test]
    fn accepts_positive_numbers() {
        let input = FormValues::running(" 5 ", "30", "160").validate().unwrap();
        assert_eq!(
            input,
            WorkoutInput { kind: WorkoutKind::Running, distance: 5., duration: 30., extra: 160. }
        );

        let input = FormValues::cycling("37.5", "80", "370").validate().unwrap();
        assert_eq!(input.kind, WorkoutKind::Cycling);
        assert_eq!(input.extra, 370.);
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        assert_eq!(invalid_field(FormValues::running("-1", "30", "160")), "distance");
        assert_eq!(invalid_field(FormValues::running("0", "30", "160")), "distance");
        assert_eq!(invalid_field(FormValues::running("5", "abc", "160")), "duration");
        assert_eq!(invalid_field(FormValues::running("5", "30", "")), "temp");
        assert_eq!(invalid_field(FormValues::cycling("5", "30", "inf")), "climb");
        assert_eq!(invalid_field(FormValues::cycling("NaN", "30", "10")), "distance");
    }

    #[test]
    fn only_fields_of_the_selected_kind_are_checked() {
        let mut values = FormValues::running("5", "30", "160");
        values.climb = "garbage".into();
        assert!(values.validate().is_ok());

        let mut values = FormValues::cycling("5", "30", "100");
        values.temp = "-3".into();
        assert!(values.validate().is_ok());
    }

    #[test]
    fn overflowing_metric_is_rejected() {
        assert_eq!(invalid_field(FormValues::running("1e-310", "30", "160")), "pace");
        assert_eq!(invalid_field(FormValues::cycling("1e308", "0.001", "10")), "speed");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut values = FormValues::running("5", "30", "160");
        values.kind = "swimming".into();
        assert_eq!(values.validate().unwrap_err(), WorkoutError::UnknownWorkoutKind("swimming".into()));
    }

    #[test]
    fn blank_reads_as_zero() {
        assert_eq!(parse_number("   "), Some(0.));
        assert_eq!(parse_number("1e3"), Some(1000.));
        assert_eq!(parse_number("12km"), None);
    }
}
