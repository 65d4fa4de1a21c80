use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use trip_planner_api::{
    config::AppConfig,
    db::memory::InMemoryItineraryStore,
    routes,
    services::{completion_service::CompletionClient, itinerary_service::ItineraryService},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    if config.completion.api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set, itinerary generation will fail");
    }

    let completion = CompletionClient::new(config.completion.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let service = web::Data::new(ItineraryService::new(
        completion,
        InMemoryItineraryStore::shared(),
    ));

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes::config)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
