pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::initialization::ProviderConfig;
use crate::manager_owm::errors::WeatherError;
use crate::manager_owm::models::{Coord, ForecastSample, ForecastSeries, WeatherSnapshot};

/// Struct for fetching current conditions and forecasts from OpenWeatherMap
///
/// The api key is injected at construction together with the rest of the
/// provider configuration, every request carries it as the appid parameter
#[derive(Clone)]
pub struct OpenWeather {
    client: Client,
    api_key: String,
    base_url: String,
    units: String,
    lang: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching weather data
    ///
    /// # Arguments
    ///
    /// * 'config' - provider section of the application configuration
    pub fn new(config: &ProviderConfig) -> Result<OpenWeather, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Retrieves current conditions for a coordinate pair
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'lon' - longitude of the location
    pub async fn current_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let json = self.get_checked(&url, &[("lat", lat.to_string()), ("lon", lon.to_string())]).await?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Retrieves current conditions by free text city name, letting the
    /// provider do the geocoding
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as entered by the user
    pub async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let json = self.get_checked(&url, &[("q", city.to_string())]).await?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Resolves a city name to a coordinate pair by reading the coordinates
    /// echoed back in a current conditions lookup. An unknown city surfaces
    /// as the provider's non-success status, typically 404
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as entered by the user
    pub async fn resolve_coordinates(&self, city: &str) -> Result<Coord, WeatherError> {
        let snapshot = self.current_by_city(city).await?;

        Ok(snapshot.coord)
    }

    /// Retrieves the forecast time series for a coordinate pair, one sample
    /// per 3 hour interval over the provider's forecast window
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'lon' - longitude of the location
    pub async fn forecast_series(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSample>, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let json = self.get_checked(&url, &[("lat", lat.to_string()), ("lon", lon.to_string())]).await?;

        let series: ForecastSeries = serde_json::from_str(&json)?;
        Ok(series.list)
    }

    async fn get_checked(&self, url: &str, params: &[(&str, String)]) -> Result<String, WeatherError> {
        let req = self.client
            .get(url)
            .query(&[
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .query(params)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(WeatherError::Provider(status.as_u16(), format!("provider answered {} for {}", status, url)));
        }

        Ok(req.text().await?)
    }
}
