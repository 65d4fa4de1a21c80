use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::ItineraryError;

pub mod health;
pub mod itinerary;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ItineraryError::InvalidBody(err.to_string()).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route(
                    "/generate-itinerary",
                    web::post().to(itinerary::generate),
                )
                .route("/itineraries/{id}", web::get().to(itinerary::get_by_id)),
        );
}
