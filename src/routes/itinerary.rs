use actix_web::{web, HttpResponse};
use log::error;

use crate::error::ItineraryError;
use crate::models::itinerary::ItineraryRequest;
use crate::services::itinerary_service::ItineraryService;

/*
    /api/generate-itinerary
*/
pub async fn generate(
    service: web::Data<ItineraryService>,
    input: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ItineraryError> {
    match service.generate(input.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err) => {
            if let ItineraryError::Upstream(message) = &err {
                error!("Itinerary generation failed: {}", message);
            }
            Err(err)
        }
    }
}

/*
    /api/itineraries/{id}
*/
pub async fn get_by_id(
    service: web::Data<ItineraryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ItineraryError> {
    let itinerary = service.find(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(itinerary))
}
