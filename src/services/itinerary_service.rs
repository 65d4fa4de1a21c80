use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde_json::Value;

use crate::db::memory::ItineraryStore;
use crate::error::ItineraryError;
use crate::models::completion::GeneratedDay;
use crate::models::itinerary::{
    DayPlan, GenerateItineraryResponse, ItineraryRecord, ItineraryRequest, ItineraryStatus,
    TripRequest, TripWindow,
};
use crate::services::completion_service::CompletionClient;
use crate::services::id_service::IdGenerator;
use crate::services::itinerary_generation_service::{generate_itinerary, sort_by_time};
use crate::services::prompt_service::build_prompt;

pub const SUCCESS_MESSAGE: &str = "Itinerary generated successfully!";

pub struct ItineraryService {
    completion: CompletionClient,
    store: Arc<dyn ItineraryStore>,
    ids: IdGenerator,
}

impl ItineraryService {
    pub fn new(completion: CompletionClient, store: Arc<dyn ItineraryStore>) -> Self {
        Self {
            completion,
            store,
            ids: IdGenerator::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn ItineraryStore> {
        &self.store
    }

    pub fn completion(&self) -> &CompletionClient {
        &self.completion
    }

    /// Validate, ask the completion service, fall back when it returns no
    /// usable days, then store and return the record. Nothing is stored on error.
    pub async fn generate(
        &self,
        request: ItineraryRequest,
    ) -> Result<GenerateItineraryResponse, ItineraryError> {
        let trip = request.validate()?;
        let window = trip.dates.window()?;

        let prompt = build_prompt(&trip, &window);
        let content = self.completion.complete(&prompt).await?;

        // Unparseable content is an upstream failure, not a reason to fall back.
        let parsed: Value = serde_json::from_str(&content)?;

        let days = match extract_days(&parsed, &window) {
            Some(days) => days,
            None => {
                warn!(
                    "Completion for {} returned no usable days, using templated itinerary",
                    trip.destination
                );
                generate_itinerary(&trip.destination, &window, &trip.interests)
            }
        };

        Ok(self.assemble(trip, days, Utc::now()))
    }

    /// Builds the record, stores it and wraps it in the success envelope.
    pub fn assemble(
        &self,
        trip: TripRequest,
        days: Vec<DayPlan>,
        created_at: DateTime<Utc>,
    ) -> GenerateItineraryResponse {
        let id = self.ids.next_id(created_at);

        let record = ItineraryRecord {
            id: id.clone(),
            destination: trip.destination,
            dates: trip.dates,
            travelers: trip.travelers,
            budget: trip.budget,
            interests: trip.interests,
            email: trip.email,
            status: ItineraryStatus::Generated,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            days,
        };

        self.store.put(record.clone());
        info!(
            "Stored itinerary {} ({} days) for {}",
            id,
            record.days.len(),
            record.destination
        );

        GenerateItineraryResponse {
            success: true,
            itinerary_id: id,
            message: SUCCESS_MESSAGE.to_string(),
            itinerary: record,
        }
    }

    pub fn find(&self, id: &str) -> Result<ItineraryRecord, ItineraryError> {
        self.store.get(id).ok_or(ItineraryError::NotFound)
    }
}

/// Pulls `days` out of the parsed completion. Returns `None` when the key is
/// missing, null, empty, or not shaped like a list of day plans. Missing day
/// numbers and dates are filled in from the trip window.
pub fn extract_days(parsed: &Value, window: &TripWindow) -> Option<Vec<DayPlan>> {
    let raw = parsed.get("days")?;
    let generated: Vec<GeneratedDay> = match serde_json::from_value(raw.clone()) {
        Ok(days) => days,
        Err(e) => {
            warn!("Discarding malformed days from completion: {}", e);
            return None;
        }
    };

    if generated.is_empty() {
        return None;
    }

    let days = generated
        .into_iter()
        .zip(0u32..)
        .map(|(day, offset)| {
            let mut activities = day.activities;
            sort_by_time(&mut activities);
            DayPlan {
                day: day.day.unwrap_or(offset + 1),
                date: day.date.unwrap_or_else(|| window.date_of(offset)),
                activities,
            }
        })
        .collect();

    Some(days)
}
