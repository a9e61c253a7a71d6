use crate::model::WeatherSnapshot;

/// Render the widget as a pure function of display state.
///
/// No snapshot: only the search-bar hint. Snapshot present: condition icon,
/// temperature, location, humidity, and wind. The map frame itself belongs to
/// the front end's [`crate::map::MapView`] implementation.
pub fn render(snapshot: Option<&WeatherSnapshot>) -> String {
    match snapshot {
        None => "Type a city name and press search.".to_string(),
        Some(snap) => format!(
            "{label} [{asset}]\n{temp}°C in {location}\nHumidity: {humidity}%\nWind: {wind} km/h",
            label = snap.icon.label(),
            asset = snap.icon.asset(),
            temp = snap.temperature_c,
            location = snap.location,
            humidity = snap.humidity_pct,
            wind = snap.wind_speed_kmh,
        ),
    }
}
