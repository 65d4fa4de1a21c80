use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::itinerary::ItineraryRecord;

/// Storage for generated itineraries. Records are insert-only.
pub trait ItineraryStore: Send + Sync {
    fn put(&self, record: ItineraryRecord);
    fn get(&self, id: &str) -> Option<ItineraryRecord>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime map with no bound and no expiry.
#[derive(Default)]
pub struct InMemoryItineraryStore {
    records: RwLock<HashMap<String, ItineraryRecord>>,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<dyn ItineraryStore> {
        Arc::new(Self::new())
    }
}

impl ItineraryStore for InMemoryItineraryStore {
    fn put(&self, record: ItineraryRecord) {
        // A poisoned lock still holds complete records; nothing is written partially.
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert(record.id.clone(), record);
    }

    fn get(&self, id: &str) -> Option<ItineraryRecord> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
