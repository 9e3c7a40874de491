use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workout::WorkoutKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ukrainian,
    English,
}

/// Unit labels shown next to the values in a sidebar entry.
pub struct Units {
    pub distance: &'static str,
    pub duration: &'static str,
    pub pace: &'static str,
    pub cadence: &'static str,
    pub speed: &'static str,
    pub climb: &'static str,
}

const UKRAINIAN_UNITS: Units = Units {
    distance: "км",
    duration: "мин",
    pace: "м/мин",
    cadence: "шаг/мин",
    speed: "км/ч",
    climb: "м",
};

const ENGLISH_UNITS: Units = Units {
    distance: "km",
    duration: "min",
    pace: "min/km",
    cadence: "spm",
    speed: "km/h",
    climb: "m",
};

impl Locale {
    pub fn kind_label(self, kind: WorkoutKind) -> &'static str {
        match (self, kind) {
            (Locale::Ukrainian, WorkoutKind::Running) => "Пробіжка",
            (Locale::Ukrainian, WorkoutKind::Cycling) => "Велотренування",
            (Locale::English, WorkoutKind::Running) => "Run —",
            (Locale::English, WorkoutKind::Cycling) => "Ride —",
        }
    }

    pub fn format_date(self, date: &DateTime<Utc>) -> String {
        match self {
            Locale::Ukrainian => date.format("%d.%m.%Y").to_string(),
            Locale::English => date.format("%b %-d, %Y").to_string(),
        }
    }

    pub fn units(self) -> &'static Units {
        match self {
            Locale::Ukrainian => &UKRAINIAN_UNITS,
            Locale::English => &ENGLISH_UNITS,
        }
    }

    pub fn invalid_input_message(self) -> &'static str {
        match self {
            Locale::Ukrainian => "Введіть позитивне число!",
            Locale::English => "Enter a positive number!",
        }
    }

    pub fn location_unavailable_message(self) -> &'static str {
        match self {
            Locale::Ukrainian => "Неможливо отримати Вашу геолокацію",
            Locale::English => "Unable to get your location",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn dates_follow_locale_conventions() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap();
        assert_eq!(Locale::Ukrainian.format_date(&date), "07.03.2026");
        assert_eq!(Locale::English.format_date(&date), "Mar 7, 2026");
    }
}
