//! Canned provider documents shared by the wiremock based tests

use serde_json::{json, Value};
use crate::initialization::ProviderConfig;

pub fn provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        units: "metric".to_string(),
        lang: "en".to_string(),
        timeout_seconds: 5,
    }
}

pub fn current_weather_body(name: &str, lat: f64, lon: f64) -> Value {
    json!({
        "coord": { "lon": lon, "lat": lat },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "base": "stations",
        "main": {
            "temp": 17.4,
            "feels_like": 16.9,
            "temp_min": 15.6,
            "temp_max": 19.2,
            "pressure": 1016,
            "humidity": 72,
            "sea_level": 1016,
            "grnd_level": 1011
        },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 220, "gust": 5.8 },
        "clouds": { "all": 0 },
        "dt": 1709294400,
        "sys": { "country": "SE", "sunrise": 1709272800, "sunset": 1709311200 },
        "timezone": 3600,
        "id": 2673730,
        "name": name,
        "cod": 200
    })
}

pub fn forecast_sample_json(dt: i64, dt_txt: &str, temp: f64, icon: &str, main: &str) -> Value {
    json!({
        "dt": dt,
        "main": {
            "temp": temp,
            "feels_like": temp - 1.0,
            "temp_min": temp,
            "temp_max": temp,
            "pressure": 1014,
            "humidity": 68,
            "temp_kf": 0.0
        },
        "weather": [
            { "id": 800, "main": main, "description": main.to_lowercase(), "icon": icon }
        ],
        "clouds": { "all": 10 },
        "wind": { "speed": 4.1, "deg": 190 },
        "visibility": 10000,
        "pop": 0.0,
        "sys": { "pod": "d" },
        "dt_txt": dt_txt
    })
}

pub fn forecast_body(list: Vec<Value>) -> Value {
    json!({
        "cod": "200",
        "message": 0,
        "cnt": list.len(),
        "list": list,
        "city": {
            "id": 2673730,
            "name": "Stockholm",
            "coord": { "lat": 59.3293, "lon": 18.0686 },
            "country": "SE",
            "population": 1000000,
            "timezone": 3600,
            "sunrise": 1709272800,
            "sunset": 1709311200
        }
    })
}
