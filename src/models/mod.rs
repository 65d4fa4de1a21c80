pub mod completion;
pub mod itinerary;
