pub mod completion_service;
pub mod id_service;
pub mod itinerary_generation_service;
pub mod itinerary_service;
pub mod prompt_service;
