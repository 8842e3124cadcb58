use common::{Error, Result};

use crate::models::{RawWeatherDocument, WeatherRow};

/// Flattens the nested upstream document into the fixed 27-column row.
///
/// Only `weather[0]` is consulted; the upstream sometimes returns several
/// conditions and the extras are dropped on purpose. No unit conversion or
/// rounding happens here, metric units were already requested at fetch
/// time.
pub fn flatten(doc: &RawWeatherDocument) -> Result<WeatherRow> {
    let condition = doc
        .weather
        .first()
        .ok_or_else(|| Error::MalformedDocument("weather list is empty".to_string()))?;

    Ok(WeatherRow {
        lon: doc.coord.lon,
        lat: doc.coord.lat,
        weather_id: condition.id,
        weather_main: condition.main.clone(),
        weather_description: condition.description.clone(),
        weather_icon: condition.icon.clone(),
        base: doc.base.clone(),
        temp: doc.main.temp,
        feels_like: doc.main.feels_like,
        temp_min: doc.main.temp_min,
        temp_max: doc.main.temp_max,
        pressure: doc.main.pressure,
        humidity: doc.main.humidity,
        visibility: doc.visibility,
        wind_speed: doc.wind.speed,
        wind_deg: doc.wind.deg,
        clouds_all: doc.clouds.all,
        dt: doc.dt,
        sys_type: doc.sys.kind,
        sys_id: doc.sys.id,
        country: doc.sys.country.clone(),
        sunrise: doc.sys.sunrise,
        sunset: doc.sys.sunset,
        timezone: doc.timezone,
        id: doc.id,
        name: doc.name.clone(),
        cod: doc.cod,
    })
}
