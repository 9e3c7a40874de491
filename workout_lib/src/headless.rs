//! In-memory capabilities for driving a session without a browser.

use std::cell::RefCell;

use serde::Deserialize;

use crate::{
    capabilities::{FormSurface, GeolocationSource, MapClick, MapWidget, Position, Sidebar},
    config::TileLayerConfig,
    error::GeolocationError,
    form::FormValues,
    render::PopupOptions,
    workout::{Coords, WorkoutKind},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationOutcome {
    Resolve(Position),
    Fail(GeolocationError),
    Unsupported,
    /// Never calls back.
    Silent,
}

pub struct ScriptedGeolocation {
    outcome: GeolocationOutcome,
}

impl ScriptedGeolocation {
    pub fn new(outcome: GeolocationOutcome) -> Self {
        Self { outcome }
    }

    pub fn resolving(position: Position) -> Self {
        Self::new(GeolocationOutcome::Resolve(position))
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self::new(GeolocationOutcome::Fail(error))
    }

    pub fn unsupported() -> Self {
        Self::new(GeolocationOutcome::Unsupported)
    }

    pub fn silent() -> Self {
        Self::new(GeolocationOutcome::Silent)
    }
}

impl GeolocationSource for ScriptedGeolocation {
    fn get_current_position(
        &mut self,
        on_success: Box<dyn FnOnce(Position)>,
        on_error: Box<dyn FnOnce(GeolocationError)>,
    ) -> Result<(), GeolocationError> {
        match &self.outcome {
            GeolocationOutcome::Resolve(position) => on_success(*position),
            GeolocationOutcome::Fail(error) => on_error(error.clone()),
            GeolocationOutcome::Unsupported => return Err(GeolocationError::Unsupported),
            GeolocationOutcome::Silent => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMarker {
    pub coords: Coords,
    pub popup: Option<PopupOptions>,
    pub content: Option<String>,
    pub open: bool,
}

/// Remembers every call so tests can inspect what was drawn.
#[derive(Default)]
pub struct RecordingMap {
    view: Option<(Coords, f64)>,
    tile_layers: Vec<TileLayerConfig>,
    click_handler: Option<Box<dyn Fn(MapClick)>>,
    markers: Vec<RecordedMarker>,
}

impl RecordingMap {
    /// Simulates a user click. Returns false if nobody listens yet.
    pub fn click(&self, latlng: Coords) -> bool {
        match &self.click_handler {
            Some(handler) => {
                handler(MapClick { latlng });
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> Option<(Coords, f64)> {
        self.view
    }

    pub fn tile_layers(&self) -> &[TileLayerConfig] {
        &self.tile_layers
    }

    pub fn has_click_handler(&self) -> bool {
        self.click_handler.is_some()
    }

    pub fn markers(&self) -> &[RecordedMarker] {
        &self.markers
    }
}

impl MapWidget for RecordingMap {
    type Marker = usize;

    fn create_view(&mut self, center: Coords, zoom: f64) {
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, config: &TileLayerConfig) {
        self.tile_layers.push(config.clone());
    }

    fn on_click(&mut self, handler: Box<dyn Fn(MapClick)>) {
        self.click_handler = Some(handler);
    }

    fn add_marker(&mut self, coords: Coords) -> usize {
        self.markers.push(RecordedMarker {
            coords,
            popup: None,
            content: None,
            open: false,
        });
        self.markers.len() - 1
    }

    fn bind_popup(&mut self, marker: &mut usize, options: &PopupOptions) {
        self.markers[*marker].popup = Some(options.clone());
    }

    fn set_popup_content(&mut self, marker: &mut usize, html: &str) {
        self.markers[*marker].content = Some(html.to_owned());
    }

    fn open_popup(&mut self, marker: &mut usize) {
        self.markers[*marker].open = true;
    }
}

pub struct MemoryForm {
    values: RefCell<FormValues>,
    visible: bool,
    focused: Option<&'static str>,
    kind_fields: WorkoutKind,
    alerts: Vec<String>,
    submit_handler: Option<Box<dyn Fn(FormValues)>>,
    kind_handler: Option<Box<dyn Fn(WorkoutKind)>>,
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self {
            values: RefCell::new(FormValues {
                kind: WorkoutKind::Running.as_str().into(),
                ..FormValues::default()
            }),
            visible: false,
            focused: None,
            kind_fields: WorkoutKind::Running,
            alerts: Vec::new(),
            submit_handler: None,
            kind_handler: None,
        }
    }
}

impl MemoryForm {
    /// Types into the inputs without submitting.
    pub fn fill(&self, values: FormValues) {
        *self.values.borrow_mut() = values;
    }

    pub fn submit(&self) {
        let values = self.values.borrow().clone();
        if let Some(handler) = &self.submit_handler {
            handler(values);
        }
    }

    pub fn submit_with(&self, values: FormValues) {
        self.fill(values);
        self.submit();
    }

    pub fn select_kind(&self, kind: WorkoutKind) {
        self.values.borrow_mut().kind = kind.as_str().into();
        if let Some(handler) = &self.kind_handler {
            handler(kind);
        }
    }

    pub fn values(&self) -> FormValues {
        self.values.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focused(&self) -> Option<&'static str> {
        self.focused
    }

    pub fn kind_fields(&self) -> WorkoutKind {
        self.kind_fields
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl FormSurface for MemoryForm {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focused = None;
    }

    fn clear(&mut self) {
        self.values.get_mut().clear_numbers();
    }

    fn focus_distance(&mut self) {
        self.focused = Some("distance");
    }

    fn show_kind_fields(&mut self, kind: WorkoutKind) {
        self.kind_fields = kind;
    }

    fn on_submit(&mut self, handler: Box<dyn Fn(FormValues)>) {
        self.submit_handler = Some(handler);
    }

    fn on_kind_change(&mut self, handler: Box<dyn Fn(WorkoutKind)>) {
        self.kind_handler = Some(handler);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

/// Entries in visual order, top first.
#[derive(Debug, Default)]
pub struct MemorySidebar {
    entries: Vec<String>,
}

impl MemorySidebar {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Sidebar for MemorySidebar {
    fn insert_after_form(&mut self, html: &str) {
        self.entries.insert(0, html.to_owned());
    }
}
