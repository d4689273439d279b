use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::manager_forecast::{group_by_day, DaySummary, DISPLAY_HORIZON_DAYS};
use crate::manager_locations::{fetch_reference_batch, REFERENCE_CITIES};
use crate::manager_owm::errors::WeatherError;
use crate::manager_owm::models::{Coord, WeatherSnapshot};
use crate::manager_owm::OpenWeather;
use crate::AppState;

#[derive(Deserialize, Debug)]
struct LocationQuery {
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
}

#[derive(Serialize)]
struct ForecastView {
    forecast: Vec<DaySummary>,
}

#[derive(Serialize)]
struct DashboardView {
    current: WeatherSnapshot,
    forecast: Vec<DaySummary>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[get("/weather")]
pub async fn current_weather(params: web::Query<LocationQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let result = match (params.lat, params.lon, params.city.as_deref()) {
        (Some(lat), Some(lon), _) => data.provider.current_by_coords(lat, lon).await,
        (_, _, Some(city)) => data.provider.current_by_city(city).await,
        _ => Err(missing_location()),
    };

    match result {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            error!("failed to fetch current conditions: {}", e);
            error_response(&e)
        }
    }
}

#[get("/forecast")]
pub async fn forecast(params: web::Query<LocationQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    match forecast_days(&data.provider, &params).await {
        Ok(days) => HttpResponse::Ok().json(ForecastView { forecast: days }),
        Err(e) => {
            error!("failed to build forecast: {}", e);
            error_response(&e)
        }
    }
}

#[get("/dashboard")]
pub async fn dashboard(params: web::Query<LocationQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    match dashboard_view(&data.provider, &params).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => {
            error!("failed to build dashboard: {}", e);
            error_response(&e)
        }
    }
}

#[get("/other-countries")]
pub async fn other_countries(data: web::Data<AppState>) -> impl Responder {
    let snapshots = fetch_reference_batch(&data.provider, &REFERENCE_CITIES).await;

    HttpResponse::Ok().json(snapshots)
}

/// Resolves the request to a coordinate pair without any upstream call when
/// coordinates are already present, they take precedence over a city name.
/// Missing both is rejected here, before any network traffic
async fn resolve_target(provider: &OpenWeather, params: &LocationQuery) -> Result<Coord, WeatherError> {
    match (params.lat, params.lon, params.city.as_deref()) {
        (Some(lat), Some(lon), _) => Ok(Coord { lat, lon }),
        (_, _, Some(city)) => provider.resolve_coordinates(city).await,
        _ => Err(missing_location()),
    }
}

async fn forecast_days(provider: &OpenWeather, params: &LocationQuery) -> Result<Vec<DaySummary>, WeatherError> {
    let coord = resolve_target(provider, params).await?;
    let samples = provider.forecast_series(coord.lat, coord.lon).await?;

    let mut days = group_by_day(&samples)?;
    days.truncate(DISPLAY_HORIZON_DAYS);

    Ok(days)
}

/// Builds the combined view: the current conditions and forecast lookups for
/// the resolved target run concurrently and are joined before grouping
async fn dashboard_view(provider: &OpenWeather, params: &LocationQuery) -> Result<DashboardView, WeatherError> {
    let coord = resolve_target(provider, params).await?;

    let (current, samples) = tokio::join!(
        provider.current_by_coords(coord.lat, coord.lon),
        provider.forecast_series(coord.lat, coord.lon),
    );

    let mut days = group_by_day(&samples?)?;
    days.truncate(DISPLAY_HORIZON_DAYS);

    Ok(DashboardView { current: current?, forecast: days })
}

fn missing_location() -> WeatherError {
    WeatherError::Validation("missing lat/lon or city parameter".to_string())
}

fn error_response(e: &WeatherError) -> HttpResponse {
    let status = match e {
        WeatherError::Validation(_) => StatusCode::BAD_REQUEST,
        WeatherError::Provider(status, _) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    HttpResponse::build(status).json(ErrorBody { error: e.to_string() })
}
