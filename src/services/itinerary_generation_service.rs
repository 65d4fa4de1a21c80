use crate::models::itinerary::{Activity, DayPlan, TripWindow};

const ADVENTURE_INTEREST: &str = "Adventure";
const CULTURE_INTEREST: &str = "Culture";

/// Templated itinerary used when the completion service gives back no usable
/// days. Output depends only on the inputs.
pub fn generate_itinerary(destination: &str, window: &TripWindow, interests: &[String]) -> Vec<DayPlan> {
    (0..window.day_count)
        .map(|offset| DayPlan {
            day: offset + 1,
            date: window.date_of(offset),
            activities: generate_daily_activities(destination, interests),
        })
        .collect()
}

/// Same activity set for every day of the trip, sorted by time of day.
pub fn generate_daily_activities(destination: &str, interests: &[String]) -> Vec<Activity> {
    let mut activities = Vec::with_capacity(4);

    if interests.iter().any(|i| i == ADVENTURE_INTEREST) {
        activities.push(activity(
            "09:00",
            &format!("{} Adventure Tour", destination),
            "Exciting outdoor activities",
        ));
    }

    if interests.iter().any(|i| i == CULTURE_INTEREST) {
        activities.push(activity(
            "14:00",
            "Cultural Experience",
            "Visit local museums and historical sites",
        ));
    }

    activities.push(activity(
        "12:00",
        "Lunch at Local Restaurant",
        "Try authentic local cuisine",
    ));
    activities.push(activity("19:00", "Dinner", "Relax and enjoy your meal"));

    sort_by_time(&mut activities);
    activities
}

/// Stable, lexicographic on "HH:MM".
pub fn sort_by_time(activities: &mut [Activity]) {
    activities.sort_by(|a, b| a.time.cmp(&b.time));
}

fn activity(time: &str, title: &str, description: &str) -> Activity {
    Activity {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
