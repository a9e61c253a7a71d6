use serde::{Deserialize, Serialize};

use crate::icon::WeatherIcon;

/// The single record behind the widget's display.
///
/// Either no snapshot exists (initial state) or every field is populated:
/// snapshots are built in one piece from a fully parsed provider payload and
/// replaced wholesale on the next successful fetch. There is no field-by-field
/// mutation and no explicit clear operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Floor of the provider's metric temperature.
    pub temperature_c: i32,
    pub humidity_pct: u8,
    /// Provider `wind.speed` carried through unchanged; displayed as km/h.
    pub wind_speed_kmh: f64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub icon: WeatherIcon,
}

impl WeatherSnapshot {
    /// The coordinate pair the map view is keyed on.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
