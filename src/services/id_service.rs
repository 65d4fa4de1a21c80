use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Hands out itinerary ids derived from the creation time in Unix
/// milliseconds. When two ids would land on the same (or an earlier)
/// millisecond the later one is bumped past the last id issued, so ids are
/// strictly increasing for the life of the process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, created_at: DateTime<Utc>) -> String {
        let now = created_at.timestamp_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now > previous { now } else { previous + 1 };
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => previous = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_id_matches_timestamp_when_free() {
        let ids = IdGenerator::new();
        let at = DateTime::from_timestamp_millis(1_717_200_000_123).unwrap();
        assert_eq!(ids.next_id(at), "1717200000123");
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let ids = IdGenerator::new();
        let at = DateTime::from_timestamp_millis(1_717_200_000_000).unwrap();

        assert_eq!(ids.next_id(at), "1717200000000");
        assert_eq!(ids.next_id(at), "1717200000001");
        assert_eq!(ids.next_id(at), "1717200000002");
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = Arc::new(IdGenerator::new());
        let at = Utc::now();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id(at)).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 2000);
    }
}
