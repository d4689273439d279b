use log::{error, info};
use tokio::task::JoinSet;
use crate::manager_owm::errors::WeatherError;
use crate::manager_owm::models::WeatherSnapshot;
use crate::manager_owm::OpenWeather;

/// Cities shown in the reference panel alongside the primary location
pub const REFERENCE_CITIES: [&str; 8] = [
    "London",
    "Dubai",
    "Tokyo",
    "New York",
    "Paris",
    "Toronto",
    "Sydney",
    "Singapore",
];

/// Fetches current conditions for every given city in parallel
///
/// One independent lookup is spawned per city and the successes are
/// collected in input list order. A failed lookup only drops that city from
/// the result, it never fails the batch
///
/// # Arguments
///
/// * 'provider' - the weather provider to query
/// * 'cities' - city names to look up
pub async fn fetch_reference_batch(provider: &OpenWeather, cities: &[&str]) -> Vec<WeatherSnapshot> {
    let mut set: JoinSet<(usize, Result<WeatherSnapshot, WeatherError>)> = JoinSet::new();

    for (i, city) in cities.iter().enumerate() {
        let provider = provider.clone();
        let city = city.to_string();
        set.spawn(async move { (i, provider.current_by_city(&city).await) });
    }

    let mut slots: Vec<Option<WeatherSnapshot>> = cities.iter().map(|_| None).collect();
    for (i, result) in set.join_all().await {
        match result {
            Ok(snapshot) => {
                info!("reference conditions for {}: {}", cities[i], snapshot.main.temp);
                slots[i] = Some(snapshot);
            }
            Err(e) => error!("dropping reference location {}: {}", cities[i], e),
        }
    }

    slots.into_iter().flatten().collect()
}
