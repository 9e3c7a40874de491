use gloo_console::{error, info};
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use workout_lib::{
    capabilities::{MapClick, MapWidget},
    config::TileLayerConfig,
    render,
    Coords,
};

pub struct LeafletMap {
    container: HtmlElement,
    map: Option<Map>,
}

pub struct PopupMarker {
    marker: Marker,
    popup: Option<Popup>,
}

impl LeafletMap {
    pub fn new(container: HtmlElement) -> Self {
        Self { container, map: None }
    }

    fn map(&self) -> Option<&Map> {
        if self.map.is_none() {
            error!("Map used before its view was created");
        }
        self.map.as_ref()
    }
}

fn lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.lat, coords.lng)
}

impl MapWidget for LeafletMap {
    type Marker = PopupMarker;

    fn create_view(&mut self, center: Coords, zoom: f64) {
        let map = Map::new_with_element(&self.container, &MapOptions::default());
        map.set_view(&lat_lng(center), zoom);
        self.map = Some(map);
    }

    fn add_tile_layer(&mut self, config: &TileLayerConfig) {
        let Some(map) = self.map() else {
            return;
        };
        let opts = TileLayerOptions::new();
        opts.set_attribution(config.attribution.clone());
        TileLayer::new_options(&config.url_template, &opts).add_to(map);
    }

    fn on_click(&mut self, handler: Box<dyn Fn(MapClick)>) {
        let Some(map) = self.map() else {
            return;
        };
        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let latlng = event.lat_lng();
            handler(MapClick {
                latlng: Coords::new(latlng.lat(), latlng.lng()),
            });
        }));
    }

    fn add_marker(&mut self, coords: Coords) -> PopupMarker {
        let marker = Marker::new(&lat_lng(coords));
        if let Some(map) = self.map() {
            marker.add_to(map);
        }
        PopupMarker { marker, popup: None }
    }

    fn bind_popup(&mut self, marker: &mut PopupMarker, options: &render::PopupOptions) {
        let opts = PopupOptions::default();
        opts.set_max_width(options.max_width);
        opts.set_min_width(options.min_width);
        opts.set_auto_close(options.auto_close);
        opts.set_close_on_click(options.close_on_click);
        opts.set_class_name(options.class_name.clone());

        let popup = Popup::new(&opts, None);
        marker.marker.bind_popup(&popup);
        marker.popup = Some(popup);
    }

    fn set_popup_content(&mut self, marker: &mut PopupMarker, html: &str) {
        match &marker.popup {
            Some(popup) => {
                popup.set_content(&JsValue::from_str(html));
            }
            None => info!("Marker has no popup, content dropped"),
        }
    }

    fn open_popup(&mut self, marker: &mut PopupMarker) {
        marker.marker.open_popup();
    }
}
