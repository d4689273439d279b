use std::fmt;

/// Failure modes of a weather lookup, from input validation through
/// transport to payload decoding
#[derive(Debug)]
pub enum WeatherError {
    Validation(String),
    Provider(u16, String),
    Network(String),
    Document(String),
    Aggregation(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherError::Validation(e) => write!(f, "WeatherError::Validation: {}", e),
            WeatherError::Provider(status, e) => write!(f, "WeatherError::Provider({}): {}", status, e),
            WeatherError::Network(e) => write!(f, "WeatherError::Network: {}", e),
            WeatherError::Document(e) => write!(f, "WeatherError::Document: {}", e),
            WeatherError::Aggregation(e) => write!(f, "WeatherError::Aggregation: {}", e),
        }
    }
}
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Network(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Document(e.to_string())
    }
}
