use crate::models::itinerary::{TripRequest, TripWindow};

/// Renders the instruction sent to the completion service. Only the request
/// for a JSON object with a `days` array matters to the rest of the pipeline.
pub fn build_prompt(trip: &TripRequest, window: &TripWindow) -> String {
    format!(
        "Create a detailed {}-day travel itinerary for {} visiting {} with a {} budget. \
         Interests include: {}. Include accommodations, activities, and dining recommendations. \
         Format as JSON with days array containing date, activities (time, title, description).",
        window.day_count,
        trip.travelers,
        trip.destination,
        trip.budget,
        trip.interests.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::TripDates;

    fn trip() -> TripRequest {
        TripRequest {
            destination: "Tokyo".to_string(),
            dates: TripDates {
                start: "2024-06-01".to_string(),
                end: "2024-06-03".to_string(),
            },
            travelers: "2 adults".to_string(),
            budget: "medium".to_string(),
            interests: vec!["Adventure".to_string(), "Culture".to_string()],
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_trip_details() {
        let trip = trip();
        let window = trip.dates.window().unwrap();
        let prompt = build_prompt(&trip, &window);

        assert!(prompt.starts_with("Create a detailed 3-day travel itinerary for 2 adults visiting Tokyo"));
        assert!(prompt.contains("with a medium budget"));
        assert!(prompt.contains("Interests include: Adventure, Culture."));
        assert!(prompt.contains("Format as JSON with days array"));
    }

    #[test]
    fn test_prompt_with_no_interests() {
        let mut trip = trip();
        trip.interests.clear();
        let window = trip.dates.window().unwrap();

        assert!(build_prompt(&trip, &window).contains("Interests include: ."));
    }
}
