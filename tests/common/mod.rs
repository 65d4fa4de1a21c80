use actix_web::{web, App};
use serde_json::{json, Value};
use std::time::Duration;

use trip_planner_api::{
    config::CompletionConfig,
    db::memory::{InMemoryItineraryStore, ItineraryStore},
    routes,
    services::{completion_service::CompletionClient, itinerary_service::ItineraryService},
};

pub struct TestApp {
    pub service: web::Data<ItineraryService>,
}

impl TestApp {
    /// App whose completion calls go to `base_url` (usually a mockito server).
    pub fn new(base_url: &str) -> Self {
        Self::with_api_key(base_url, Some("sk-test"))
    }

    pub fn with_api_key(base_url: &str, api_key: Option<&str>) -> Self {
        let config = CompletionConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        let completion = CompletionClient::new(config).expect("Failed to build completion client");

        Self {
            service: web::Data::new(ItineraryService::new(
                completion,
                InMemoryItineraryStore::shared(),
            )),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .configure(routes::config)
    }

    #[allow(dead_code)]
    pub fn stored_count(&self) -> usize {
        self.service.store().len()
    }
}

#[allow(dead_code)]
pub fn tokyo_request() -> Value {
    json!({
        "destination": "Tokyo",
        "dates": { "start": "2024-06-01", "end": "2024-06-03" },
        "travelers": "2 adults",
        "budget": "medium",
        "interests": ["Adventure", "Culture"],
        "email": "a@b.com"
    })
}

#[allow(dead_code)]
/// Wraps `content` the way the chat completion API returns it.
pub fn completion_body(content: &Value) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content.to_string() },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[allow(dead_code)]
pub async fn mock_completion(server: &mut mockito::ServerGuard, status: usize, body: String) -> mockito::Mock {
    server
        .mock("POST", "/chat/completions")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
