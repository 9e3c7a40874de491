use crate::{
    config::PopupLayout,
    locale::Locale,
    workout::{Workout, WorkoutDetails, WorkoutKind},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

/// Popups stay open until the map is cleared.
pub fn popup_options(kind: WorkoutKind, layout: &PopupLayout) -> PopupOptions {
    PopupOptions {
        max_width: layout.max_width,
        min_width: layout.min_width,
        auto_close: false,
        close_on_click: false,
        class_name: format!("{}-popup", kind.as_str()),
    }
}

pub fn popup_content(workout: &Workout) -> String {
    format!("{} {}", workout.kind().icon(), workout.description())
}

/// The `<li>` for the workout list. Derived metrics are rounded for display
/// only.
pub fn sidebar_entry(workout: &Workout, locale: Locale) -> String {
    let units = locale.units();
    let kind = workout.kind();

    let mut html = format!(
        r#"<li class="workout workout--{kind}" data-id="{id}">
  <h2 class="workout__title">{title}</h2>
{distance}{duration}"#,
        id = workout.id(),
        title = workout.description(),
        distance = detail(kind.icon(), &workout.distance().to_string(), units.distance),
        duration = detail("⏱", &workout.duration().to_string(), units.duration),
    );

    match workout.details() {
        WorkoutDetails::Running { temp, pace } => {
            html.push_str(&detail("📏⏱", &format!("{pace:.2}"), units.pace));
            html.push_str(&detail("👟⏱", &temp.to_string(), units.cadence));
        }
        WorkoutDetails::Cycling { climb, speed } => {
            html.push_str(&detail("📏⏱", &format!("{speed:.2}"), units.speed));
            html.push_str(&detail("🏔", &climb.to_string(), units.climb));
        }
    }

    html.push_str("</li>\n");
    html
}

fn detail(icon: &str, value: &str, unit: &str) -> String {
    format!(
        r#"  <div class="workout__details">
    <span class="workout__icon">{icon}</span>
    <span class="workout__value">{value}</span>
    <span class="workout__unit">{unit}</span>
  </div>
"#
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::workout::Coords;

    fn run() -> Workout {
        let date = Utc.with_ymd_and_hms(2026, 10, 18, 8, 15, 0).unwrap();
        Workout::running(date, Coords::new(50.45, 30.52), 5., 32., 160., Locale::Ukrainian).unwrap()
    }

    fn ride() -> Workout {
        let date = Utc.with_ymd_and_hms(2026, 10, 18, 8, 15, 0).unwrap();
        Workout::cycling(date, Coords::new(50.45, 30.52), 27.5, 60., 370., Locale::English).unwrap()
    }

    #[test]
    fn popup_never_closes_on_its_own() {
        let options = popup_options(WorkoutKind::Cycling, &PopupLayout::default());
        assert!(!options.auto_close);
        assert!(!options.close_on_click);
        assert_eq!(options.class_name, "cycling-popup");
        assert_eq!((options.max_width, options.min_width), (200., 100.));
    }

    #[test]
    fn popup_content_has_icon_and_description() {
        assert_eq!(popup_content(&run()), "🏃 Пробіжка 18.10.2026");
        assert_eq!(popup_content(&ride()), "🚵‍♂️ Ride — Oct 18, 2026");
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let workout = run();
        let html = sidebar_entry(&workout, Locale::Ukrainian);

        assert!(html.starts_with(&format!(r#"<li class="workout workout--running" data-id="{}">"#, workout.id())));
        assert!(html.contains(r#"<h2 class="workout__title">Пробіжка 18.10.2026</h2>"#));
        assert!(html.contains(r#"<span class="workout__value">5</span>"#));
        assert!(html.contains(r#"<span class="workout__value">32</span>"#));
        // 32 / 5 / 60 = 0.10666..
        assert!(html.contains(r#"<span class="workout__value">0.11</span>"#));
        assert!(html.contains(r#"<span class="workout__value">160</span>"#));
        assert!(html.contains("шаг/мин"));
        assert!(!html.contains("🏔"));
    }

    #[test]
    fn cycling_entry_shows_speed_and_climb() {
        let html = sidebar_entry(&ride(), Locale::English);

        assert!(html.contains("workout--cycling"));
        assert!(html.contains(r#"<span class="workout__value">27.5</span>"#));
        assert!(html.contains(r#"<span class="workout__value">0.46</span>"#));
        assert!(html.contains(r#"<span class="workout__value">370</span>"#));
        assert!(html.contains("km/h"));
        assert!(!html.contains("👟"));
    }

    #[test]
    fn rounding_is_display_only() {
        let workout = run();
        sidebar_entry(&workout, Locale::Ukrainian);

        let WorkoutDetails::Running { pace, .. } = *workout.details() else {
            panic!("expected running");
        };
        assert!((pace - 32. / 5. / 60.).abs() < 1e-15);
    }
}
