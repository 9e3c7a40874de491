use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const DEFAULT_ZOOM: f64 = 13.;
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub zoom: f64,
    pub tile_layer: TileLayerConfig,
    pub popup: PopupLayout,
    pub locale: Locale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayerConfig::default(),
            popup: PopupLayout::default(),
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.into(),
            attribution: OSM_ATTRIBUTION.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupLayout {
    pub max_width: f64,
    pub min_width: f64,
}

impl Default for PopupLayout {
    fn default() -> Self {
        Self {
            max_width: 200.,
            min_width: 100.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{ "zoom": 15, "locale": "english" }"#).unwrap();

        assert_eq!(config.zoom, 15.);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.tile_layer, TileLayerConfig::default());
        assert_eq!(config.popup.max_width, 200.);
    }
}
