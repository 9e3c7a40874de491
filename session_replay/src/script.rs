use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};
use workout_lib::{
    clock::{FixedClock, MonotonicClock},
    config::SessionConfig,
    event::EventQueue,
    form::FormValues,
    headless::{GeolocationOutcome, MemoryForm, MemorySidebar, RecordingMap, ScriptedGeolocation},
    Coords, SessionController, WorkoutKind,
};

pub type HeadlessSession = SessionController<RecordingMap, MemoryForm, MemorySidebar>;

#[derive(Debug, Deserialize)]
pub struct Script {
    pub geolocation: GeolocationOutcome,
    /// Pins the clock so ids and descriptions are reproducible.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Click(Coords),
    SelectKind(WorkoutKind),
    Fill(FormValues),
    Submit(FormValues),
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse script {}", path.display()))
    }
}

pub fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn replay(script: &Script, config: SessionConfig) -> HeadlessSession {
    let queue = EventQueue::new();
    let mut session = SessionController::new(
        config,
        RecordingMap::default(),
        MemoryForm::default(),
        MemorySidebar::default(),
        queue.sink(),
    );
    if let Some(start) = script.start {
        session = session.with_clock(MonotonicClock::new(FixedClock(start)));
    }

    session.start(&mut ScriptedGeolocation::new(script.geolocation.clone()));
    queue.dispatch(&mut session);

    for (i, step) in script.steps.iter().enumerate() {
        match step {
            Step::Click(coords) => {
                if !session.map().click(*coords) {
                    warn!("Step {}: map not ready, click dropped", i);
                }
            }
            Step::SelectKind(kind) => session.form().select_kind(*kind),
            Step::Fill(values) => session.form().fill(values.clone()),
            Step::Submit(values) => session.form().submit_with(values.clone()),
        }
        let handled = queue.dispatch(&mut session);
        info!("Step {} handled {} event(s), state {:?}", i, handled, session.state());
    }

    session
}

#[cfg(test)]
mod tests {
    use workout_lib::SessionState;

    use super::*;

    const SCRIPT: &str = r#"{
        "geolocation": { "resolve": { "latitude": 50.45, "longitude": 30.52 } },
        "start": "2026-10-18T08:15:00Z",
        "steps": [
            { "click": { "lat": 50.45, "lng": 30.52 } },
            { "submit": { "type": "running", "distance": "5", "duration": "30", "temp": "160" } },
            { "select_kind": "cycling" },
            { "click": { "lat": 50.5, "lng": 30.6 } },
            { "submit": { "type": "cycling", "distance": "-2", "duration": "60", "climb": "300" } },
            { "submit": { "type": "cycling", "distance": "20", "duration": "60", "climb": "300" } }
        ]
    }"#;

    #[test]
    fn replays_clicks_and_submissions() {
        let script: Script = serde_json::from_str(SCRIPT).unwrap();
        let session = replay(&script, SessionConfig::default());

        assert_eq!(session.state(), SessionState::MapReady);
        assert_eq!(session.workouts().len(), 2);
        assert_eq!(session.workouts()[1].kind(), WorkoutKind::Cycling);
        assert_eq!(session.workouts()[1].coords(), Coords::new(50.5, 30.6));
        assert_eq!(session.form().alerts().len(), 1);
        assert_eq!(session.map().markers().len(), 2);
        assert!(session.sidebar().entries()[0].contains("workout--cycling"));
    }

    #[test]
    fn failed_geolocation_drops_every_click() {
        let script: Script = serde_json::from_str(
            r#"{
                "geolocation": { "fail": "permission_denied" },
                "steps": [
                    { "click": { "lat": 1.0, "lng": 2.0 } },
                    { "submit": { "type": "running", "distance": "5", "duration": "30", "temp": "160" } }
                ]
            }"#,
        )
        .unwrap();
        let session = replay(&script, SessionConfig::default());

        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.workouts().is_empty());
        assert!(session.map().markers().is_empty());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        assert_eq!(load_config(None).unwrap(), SessionConfig::default());
    }
}
