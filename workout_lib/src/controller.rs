use tracing::{debug, info, warn};

use crate::{
    capabilities::{FormSurface, GeolocationSource, MapClick, MapWidget, Position, Sidebar},
    clock::{Clock, MonotonicClock, SystemClock},
    config::SessionConfig,
    error::{GeolocationError, WorkoutError},
    event::{EventSink, SessionEvent},
    form::FormValues,
    render,
    workout::{Coords, Workout, WorkoutKind},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Waiting for a position. Stays here for good if geolocation fails.
    Uninitialized,
    MapReady,
    FormOpen { pending: Coords },
}

/// Owns the workouts and drives the map, the form and the sidebar.
pub struct SessionController<M, F, S> {
    config: SessionConfig,
    map: M,
    form: F,
    sidebar: S,
    clock: Box<dyn Clock>,
    events: EventSink,
    state: SessionState,
    workouts: Vec<Workout>,
}

impl<M, F, S> SessionController<M, F, S>
where
    M: MapWidget,
    F: FormSurface,
    S: Sidebar,
{
    pub fn new(config: SessionConfig, map: M, form: F, sidebar: S, events: EventSink) -> Self {
        Self {
            config,
            map,
            form,
            sidebar,
            clock: Box::new(MonotonicClock::new(SystemClock)),
            events,
            state: SessionState::Uninitialized,
            workouts: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Hooks up the form and asks for the current position.
    pub fn start(&mut self, geolocation: &mut impl GeolocationSource) {
        let events = self.events.clone();
        self.form.on_submit(Box::new(move |values| events(SessionEvent::FormSubmitted(values))));

        let events = self.events.clone();
        self.form.on_kind_change(Box::new(move |kind| events(SessionEvent::KindChanged(kind))));

        let on_success = {
            let events = self.events.clone();
            Box::new(move |position: Position| events(SessionEvent::PositionResolved(position)))
        };
        let on_error = {
            let events = self.events.clone();
            Box::new(move |error: GeolocationError| events(SessionEvent::PositionFailed(error)))
        };

        if let Err(error) = geolocation.get_current_position(on_success, on_error) {
            self.on_position_failed(error);
        }
    }

    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::PositionResolved(position) => self.on_position_resolved(position),
            SessionEvent::PositionFailed(error) => self.on_position_failed(error),
            SessionEvent::MapClicked(click) => self.on_map_clicked(click),
            SessionEvent::FormSubmitted(values) => {
                if let Err(e) = self.on_form_submitted(values) {
                    debug!("Submission rejected: {}", e);
                }
            }
            SessionEvent::KindChanged(kind) => self.toggle_input_kind_fields(kind),
        }
    }

    pub fn on_position_resolved(&mut self, position: Position) {
        if self.state != SessionState::Uninitialized {
            warn!("Map already initialized, ignoring position {:?}", position);
            return;
        }

        let coords = position.coords();
        info!("https://www.google.com/maps/@{},{},14z", coords.lat, coords.lng);

        self.map.create_view(coords, self.config.zoom);
        self.map.add_tile_layer(&self.config.tile_layer);

        let events = self.events.clone();
        self.map.on_click(Box::new(move |click| events(SessionEvent::MapClicked(click))));

        self.state = SessionState::MapReady;
    }

    pub fn on_position_failed(&mut self, error: GeolocationError) {
        let error = WorkoutError::from(error);
        warn!("{}: {}", self.config.locale.location_unavailable_message(), error);
    }

    pub fn on_map_clicked(&mut self, click: MapClick) {
        if self.state == SessionState::Uninitialized {
            debug!("Map click before the map exists, ignoring");
            return;
        }

        self.state = SessionState::FormOpen { pending: click.latlng };
        self.form.show();
        self.form.focus_distance();
    }

    /// On success the new workout is on the map, at the top of the list, and
    /// the form is cleared and hidden. On failure nothing changes.
    pub fn on_form_submitted(&mut self, values: FormValues) -> Result<&Workout, WorkoutError> {
        let SessionState::FormOpen { pending } = self.state else {
            return Err(WorkoutError::NoPendingClick);
        };

        let input = match values.validate() {
            Ok(input) => input,
            Err(e) => {
                self.form.alert(self.config.locale.invalid_input_message());
                return Err(e);
            }
        };

        let date = self.clock.now();
        let locale = self.config.locale;
        let built = match input.kind {
            WorkoutKind::Running => Workout::running(date, pending, input.distance, input.duration, input.extra, locale),
            WorkoutKind::Cycling => Workout::cycling(date, pending, input.distance, input.duration, input.extra, locale),
        };
        let workout = match built {
            Ok(workout) => workout,
            Err(e) => {
                warn!("Validated input still failed to build a workout: {}", e);
                self.form.alert(locale.invalid_input_message());
                return Err(e);
            }
        };
        info!("New workout {} ({})", workout.id(), workout.description());

        self.render_on_map(&workout);
        self.render_on_sidebar(&workout);
        self.hide_form();

        self.state = SessionState::MapReady;
        self.workouts.push(workout);
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    pub fn toggle_input_kind_fields(&mut self, kind: WorkoutKind) {
        self.form.show_kind_fields(kind);
    }

    fn hide_form(&mut self) {
        self.form.clear();
        self.form.hide();
    }

    fn render_on_map(&mut self, workout: &Workout) {
        let mut marker = self.map.add_marker(workout.coords());
        let options = render::popup_options(workout.kind(), &self.config.popup);
        self.map.bind_popup(&mut marker, &options);
        self.map.set_popup_content(&mut marker, &render::popup_content(workout));
        self.map.open_popup(&mut marker);
    }

    fn render_on_sidebar(&mut self, workout: &Workout) {
        self.sidebar.insert_after_form(&render::sidebar_entry(workout, self.config.locale));
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn sidebar(&self) -> &S {
        &self.sidebar
    }
}
