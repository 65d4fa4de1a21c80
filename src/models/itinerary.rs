use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/*
    Body of POST /api/generate-itinerary. Every field is optional on the wire so
    that absent values surface as a validation error instead of a parse error.
*/
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItineraryRequest {
    pub destination: Option<String>,
    pub dates: Option<RequestedDates>,
    pub travelers: Option<String>,
    pub budget: Option<String>,
    pub interests: Option<Vec<String>>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RequestedDates {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A request that passed validation; all required fields are present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    pub dates: TripDates,
    pub travelers: String,
    pub budget: String,
    pub interests: Vec<String>,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripDates {
    pub start: String,
    pub end: String,
}

/// Resolved trip start and the number of calendar days it spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripWindow {
    pub start: DateTime<Utc>,
    pub day_count: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    Generated,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    pub id: String,
    pub destination: String,
    pub dates: TripDates,
    pub travelers: String,
    pub budget: String,
    pub interests: Vec<String>,
    pub email: String,
    pub status: ItineraryStatus,
    pub created_at: String,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    /// 24-hour "HH:MM"; ordering is plain string comparison.
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryResponse {
    pub success: bool,
    pub itinerary_id: String,
    pub message: String,
    pub itinerary: ItineraryRecord,
}

fn required(value: Option<String>) -> Result<String, ItineraryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ItineraryError::Validation),
    }
}

impl ItineraryRequest {
    /// Checks destination, dates, travelers, budget and email. Interests are
    /// optional and default to an empty list.
    pub fn validate(self) -> Result<TripRequest, ItineraryError> {
        let dates = self.dates.ok_or(ItineraryError::Validation)?;

        Ok(TripRequest {
            destination: required(self.destination)?,
            dates: TripDates {
                start: required(dates.start)?,
                end: required(dates.end)?,
            },
            travelers: required(self.travelers)?,
            budget: required(self.budget)?,
            interests: self.interests.unwrap_or_default(),
            email: required(self.email)?,
        })
    }
}

/// Accepts a bare date (UTC midnight), an RFC 3339 timestamp, or a naive
/// timestamp which is read as UTC.
pub fn parse_trip_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|dt| dt.and_utc())
}

/// `ceil((end - start) / 1 day) + 1` on the raw millisecond difference.
pub fn day_count(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let diff = (end - start).num_milliseconds();
    // Integer division truncates toward zero, which is already the ceiling for negatives.
    let mut days = diff / MILLIS_PER_DAY;
    if diff > 0 && diff % MILLIS_PER_DAY != 0 {
        days += 1;
    }
    days + 1
}

impl TripDates {
    pub fn window(&self) -> Result<TripWindow, ItineraryError> {
        let start = parse_trip_date(&self.start).ok_or(ItineraryError::InvalidDates)?;
        let end = parse_trip_date(&self.end).ok_or(ItineraryError::InvalidDates)?;

        let days = day_count(start, end);
        if days < 1 {
            return Err(ItineraryError::InvalidDates);
        }
        let day_count = u32::try_from(days).map_err(|_| ItineraryError::InvalidDates)?;

        Ok(TripWindow { start, day_count })
    }
}

impl TripWindow {
    /// ISO date of the zero-based day `offset`.
    pub fn date_of(&self, offset: u32) -> String {
        (self.start + Duration::days(offset as i64))
            .format("%Y-%m-%d")
            .to_string()
    }
}
