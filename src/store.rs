//! In-memory day store
//!
//! The store is the system's sole state: an ordered list of day records
//! seeded at startup and mutated only by append. No delete or update
//! operations exist.

use tokio::sync::RwLock;

use crate::types::Day;

/// Names used to seed a fresh store, in calendar order (ids 1..=7).
const SEED_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Ordered collection of day records.
///
/// Ids are assigned as `len + 1` at append time. Nothing is ever removed,
/// so this keeps ids unique and monotonic. The length is read and the
/// record pushed under the same write lock, so concurrent appends cannot
/// observe a stale length and hand out duplicate ids.
pub struct DayStore {
    days: RwLock<Vec<Day>>,
}

impl DayStore {
    /// Create a store seeded with the seven days of the week.
    pub fn seeded() -> Self {
        let days = SEED_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Day {
                id: i as u64 + 1,
                name: (*name).to_string(),
            })
            .collect();

        Self {
            days: RwLock::new(days),
        }
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<Day> {
        self.days.read().await.clone()
    }

    /// Linear scan for the first record with a matching id.
    pub async fn get(&self, id: u64) -> Option<Day> {
        self.days.read().await.iter().find(|d| d.id == id).cloned()
    }

    /// Append a new record, assigning the next sequential id.
    pub async fn append(&self, name: String) -> Day {
        let mut days = self.days.write().await;
        let day = Day {
            id: days.len() as u64 + 1,
            name,
        };
        days.push(day.clone());
        day
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.days.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.days.read().await.is_empty()
    }
}

impl Default for DayStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn seeded_store_has_seven_days_in_order() {
        let store = DayStore::seeded();
        let days = store.list().await;

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].id, 1);
        assert_eq!(days[0].name, "Monday");
        assert_eq!(days[6].id, 7);
        assert_eq!(days[6].name, "Sunday");
    }

    #[tokio::test]
    async fn append_assigns_next_sequential_id() {
        let store = DayStore::seeded();

        let day = store.append("Funday".to_string()).await;
        assert_eq!(day.id, 8);
        assert_eq!(day.name, "Funday");
        assert_eq!(store.len().await, 8);

        let day = store.append("Someday".to_string()).await;
        assert_eq!(day.id, 9);
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let store = DayStore::seeded();

        assert!(store.get(0).await.is_none());
        assert!(store.get(42).await.is_none());
        assert_eq!(store.get(3).await.unwrap().name, "Wednesday");
    }

    #[tokio::test]
    async fn concurrent_appends_yield_unique_ids() {
        let store = Arc::new(DayStore::seeded());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(format!("day-{i}")).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        let expected: Vec<u64> = (8..=23).collect();
        assert_eq!(ids, expected);
    }
}
