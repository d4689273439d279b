use serde::{Deserialize, Serialize};

/// Current conditions document as returned by the provider, reshaped into
/// the subset the dashboard consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub coord: Coord,
    pub weather: Vec<WeatherCondition>,
    pub base: String,
    pub main: MainReadings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow: Option<Precipitation>,
    pub dt: i64,
    pub sys: Sys,
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grnd_level: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", skip_serializing_if = "Option::is_none")]
    pub three_hours: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Deserialize)]
pub struct ForecastSeries {
    pub list: Vec<ForecastSample>,
}

/// One 3-hour measurement from the forecast list. The dt_txt date prefix
/// carries the provider's day-boundary convention, see manager_forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub dt: i64,
    pub dt_txt: String,
    pub main: SampleReadings,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReadings {
    pub temp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub icon: String,
    pub main: String,
    pub description: String,
}
