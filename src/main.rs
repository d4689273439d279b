mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_forecast;
mod manager_locations;
mod manager_owm;
#[cfg(test)]
mod test_support;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_owm::OpenWeather;

pub struct AppState {
    provider: OpenWeather,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let provider = OpenWeather::new(&config.provider)?;

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { provider: provider.clone() }))
            .service(handlers::current_weather)
            .service(handlers::forecast)
            .service(handlers::dashboard)
            .service(handlers::other_countries)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
