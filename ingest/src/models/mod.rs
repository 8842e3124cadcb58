mod row;
mod weather;

pub mod schema;

pub use row::WeatherRow;
pub use weather::{
    Clouds, Coord, MainReadings, RawWeatherDocument, SysInfo, WeatherCondition, Wind,
};
