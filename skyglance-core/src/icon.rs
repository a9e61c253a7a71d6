use serde::{Deserialize, Serialize};

/// The widget's fixed icon set.
///
/// Provider icon codes are grouped by condition family; every family maps to
/// one of these seven assets. Codes outside the table fall back to
/// [`WeatherIcon::Clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherIcon {
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl WeatherIcon {
    /// Map a provider icon code (e.g. `"04d"`, `"10n"`) to a local icon.
    ///
    /// Only the two-digit condition family matters; the day/night suffix is
    /// ignored. Unknown codes fall back to `Clear`.
    pub fn from_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => WeatherIcon::Clear,
            Some("02") => WeatherIcon::Clouds,
            Some("03") | Some("04") => WeatherIcon::Drizzle,
            Some("09") | Some("10") => WeatherIcon::Rain,
            Some("11") => WeatherIcon::Thunderstorm,
            Some("13") => WeatherIcon::Snow,
            Some("50") => WeatherIcon::Mist,
            _ => WeatherIcon::Clear,
        }
    }

    /// File name of the bundled illustrative asset.
    pub fn asset(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "clear.png",
            WeatherIcon::Clouds => "clouds.png",
            WeatherIcon::Drizzle => "drizzle.png",
            WeatherIcon::Rain => "rain.png",
            WeatherIcon::Thunderstorm => "thunderstorm.png",
            WeatherIcon::Snow => "snow.png",
            WeatherIcon::Mist => "mist.png",
        }
    }

    /// Human-readable condition label.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "Clear",
            WeatherIcon::Clouds => "Clouds",
            WeatherIcon::Drizzle => "Drizzle",
            WeatherIcon::Rain => "Rain",
            WeatherIcon::Thunderstorm => "Thunderstorm",
            WeatherIcon::Snow => "Snow",
            WeatherIcon::Mist => "Mist",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_codes_hit_their_table_entry() {
        let table = [
            ("01d", WeatherIcon::Clear),
            ("01n", WeatherIcon::Clear),
            ("02d", WeatherIcon::Clouds),
            ("03n", WeatherIcon::Drizzle),
            ("04d", WeatherIcon::Drizzle),
            ("09n", WeatherIcon::Rain),
            ("10d", WeatherIcon::Rain),
            ("11n", WeatherIcon::Thunderstorm),
            ("13d", WeatherIcon::Snow),
            ("50n", WeatherIcon::Mist),
        ];

        for (code, expected) in table {
            assert_eq!(WeatherIcon::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn unmapped_codes_fall_back_to_clear() {
        for code in ["99d", "12n", "", "d", "weird"] {
            assert_eq!(WeatherIcon::from_code(code), WeatherIcon::Clear, "code {code:?}");
        }
    }

    #[test]
    fn every_icon_has_a_distinct_asset() {
        let all = [
            WeatherIcon::Clear,
            WeatherIcon::Clouds,
            WeatherIcon::Drizzle,
            WeatherIcon::Rain,
            WeatherIcon::Thunderstorm,
            WeatherIcon::Snow,
            WeatherIcon::Mist,
        ];

        let assets: Vec<_> = all.iter().map(|i| i.asset()).collect();
        let mut deduped = assets.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), assets.len());
        assert_eq!(assets.len(), 7);
    }
}
