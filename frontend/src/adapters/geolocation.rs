use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};
use workout_lib::{
    capabilities::{GeolocationSource, Position},
    GeolocationError,
};

/// `navigator.geolocation`, asked once without a timeout.
pub struct BrowserGeolocation;

impl GeolocationSource for BrowserGeolocation {
    fn get_current_position(
        &mut self,
        on_success: Box<dyn FnOnce(Position)>,
        on_error: Box<dyn FnOnce(GeolocationError)>,
    ) -> Result<(), GeolocationError> {
        let geolocation = window()
            .navigator()
            .geolocation()
            .map_err(|_| GeolocationError::Unsupported)?;

        let success = Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            on_success(Position {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            });
        });

        let failure = Closure::once_into_js(move |failure: GeolocationPositionError| {
            error!(format!("Geolocation failed: {}", failure.message()));
            on_error(match failure.code() {
                1 => GeolocationError::PermissionDenied,
                2 => GeolocationError::PositionUnavailable,
                3 => GeolocationError::Timeout,
                _ => GeolocationError::Other(failure.message()),
            });
        });

        geolocation
            .get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref()))
            .map_err(|e| GeolocationError::Other(format!("{:?}", e)))
    }
}
