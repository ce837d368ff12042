use tokio::sync::RwLock;

/// A record that can be held in a [`MemoryStore`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Ordered in-memory collection keyed by a synthetic id
///
/// Records are only ever appended, so listing always yields insertion order.
#[derive(Debug)]
pub struct MemoryStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> MemoryStore<R> {
    /// Create a store pre-populated with seed records
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of every record in insertion order
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    /// First record whose id matches exactly
    pub async fn get(&self, id: &str) -> Option<R> {
        let records = self.records.read().await;
        records.iter().find(|record| record.id() == id).cloned()
    }

    /// Every record accepted by `predicate`, preserving order
    pub async fn filter<F>(&self, predicate: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Assign the next id, build the record with it and append it
    ///
    /// The id is `len + 1`, computed and appended under one write guard so
    /// concurrent inserts never share an id. This only stays unique while
    /// records are never removed; deletion needs a monotonic counter instead.
    pub async fn insert_with<F>(&self, build: F) -> R
    where
        F: FnOnce(String) -> R,
    {
        let mut records = self.records.write().await;
        let id = (records.len() + 1).to_string();
        let record = build(id);
        records.push(record.clone());
        record
    }
}

#[cfg(test)]
impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
