mod dom_form;
mod geolocation;
mod leaflet_map;

pub use dom_form::{DomForm, DomSidebar, FormInputs};
pub use geolocation::BrowserGeolocation;
pub use leaflet_map::LeafletMap;

use gloo_console::error;
use wasm_bindgen::JsValue;

/// DOM calls only fail on broken markup; log and carry on.
fn log_js_error<T>(context: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(format!("{context} failed:"), e);
            None
        }
    }
}
