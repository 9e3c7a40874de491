//! What the session controller needs from its surroundings. The browser
//! frontend implements these over Leaflet and the DOM, `headless` keeps
//! everything in memory.

use serde::{Deserialize, Serialize};

use crate::{
    config::TileLayerConfig,
    error::GeolocationError,
    form::FormValues,
    render::PopupOptions,
    workout::{Coords, WorkoutKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn coords(&self) -> Coords {
        Coords::new(self.latitude, self.longitude)
    }
}

/// Where on the map the user clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapClick {
    pub latlng: Coords,
}

pub trait GeolocationSource {
    /// One-shot request. Either callback may fire later, or never.
    /// Returns `Unsupported` right away when there is no position source.
    fn get_current_position(
        &mut self,
        on_success: Box<dyn FnOnce(Position)>,
        on_error: Box<dyn FnOnce(GeolocationError)>,
    ) -> Result<(), GeolocationError>;
}

pub trait MapWidget {
    type Marker;

    fn create_view(&mut self, center: Coords, zoom: f64);
    fn add_tile_layer(&mut self, config: &TileLayerConfig);
    fn on_click(&mut self, handler: Box<dyn Fn(MapClick)>);
    fn add_marker(&mut self, coords: Coords) -> Self::Marker;
    fn bind_popup(&mut self, marker: &mut Self::Marker, options: &PopupOptions);
    fn set_popup_content(&mut self, marker: &mut Self::Marker, html: &str);
    fn open_popup(&mut self, marker: &mut Self::Marker);
}

pub trait FormSurface {
    fn show(&mut self);
    fn hide(&mut self);
    /// Empties the numeric inputs.
    fn clear(&mut self);
    fn focus_distance(&mut self);
    /// Shows the input row belonging to `kind` and hides the other one.
    fn show_kind_fields(&mut self, kind: WorkoutKind);
    fn on_submit(&mut self, handler: Box<dyn Fn(FormValues)>);
    fn on_kind_change(&mut self, handler: Box<dyn Fn(WorkoutKind)>);
    /// Blocking, user facing message.
    fn alert(&mut self, message: &str);
}

pub trait Sidebar {
    /// Inserts markup directly after the form element.
    fn insert_after_form(&mut self, html: &str);
}
