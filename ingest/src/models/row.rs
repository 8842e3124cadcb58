/// One flattened weather observation, 27 columns wide.
///
/// The field types are the destination table's column types: the warehouse
/// infers its schema from the first batch written, so a float column must
/// stay a float on every later load or the write becomes a user-visible
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRow {
    pub lon: f64,
    pub lat: f64,
    pub weather_id: i64,
    pub weather_main: String,
    pub weather_description: String,
    pub weather_icon: String,
    pub base: String,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
    pub visibility: i64,
    pub wind_speed: f64,
    pub wind_deg: i64,
    pub clouds_all: i64,
    pub dt: i64,
    pub sys_type: i64,
    pub sys_id: i64,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}
