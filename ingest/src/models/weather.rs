use serde::Deserialize;

/// Typed mirror of the OpenWeatherMap current-weather response.
///
/// Every field referenced by the pipeline is required, so a document with a
/// missing path fails once, at deserialization, instead of somewhere in the
/// middle of field-by-field extraction. An upstream error payload (e.g.
/// city not found) does not match this shape and fails the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherDocument {
    pub coord: Coord,
    pub weather: Vec<WeatherCondition>,
    pub base: String,
    pub main: MainReadings,
    pub visibility: i64,
    pub wind: Wind,
    pub clouds: Clouds,
    pub dt: i64,
    pub sys: SysInfo,
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    #[serde(rename = "type")]
    pub kind: i64,
    pub id: i64,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}
