use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::db::memory::ItineraryStore;
use crate::services::itinerary_service::ItineraryService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(service: web::Data<ItineraryService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "OK".to_string(),
        services: HashMap::new(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let completion = check_completion(&service);
    health
        .services
        .insert("completion".to_string(), completion.clone());
    health.services.insert(
        "store".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} itineraries in memory", service.store().len())),
        },
    );

    // Without a key every generation request fails
    if completion.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_completion(service: &ItineraryService) -> ServiceStatus {
    let config = service.completion().config();
    match config.api_key.as_deref() {
        Some(key) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!(
                    "Model {} at {} ({})",
                    config.model, config.base_url, masked_key
                )),
            }
        }
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("OPENAI_API_KEY not configured".to_string()),
        },
    }
}
