use crate::core::rates::RateSnapshot;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Session-scoped store of fetched snapshots, keyed by currency pair.
///
/// A command fetches at most once per pair; repeated lookups within one
/// run see the same snapshot instead of re-fetching. Nothing survives
/// the process.
#[derive(Clone, Default)]
pub struct SnapshotCache {
    inner: Arc<Mutex<HashMap<String, RateSnapshot>>>,
}

fn pair_key(base: &str, target: &str) -> String {
    format!("{base}:{target}")
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, base: &str, target: &str) -> Option<RateSnapshot> {
        let cache = self.inner.lock().await;
        let value = cache.get(&pair_key(base, target)).cloned();
        if value.is_some() {
            debug!("Snapshot cache HIT for {base}/{target}");
        } else {
            debug!("Snapshot cache MISS for {base}/{target}");
        }
        value
    }

    pub async fn put(&self, snapshot: RateSnapshot) {
        let mut cache = self.inner.lock().await;
        debug!("Snapshot cache PUT for {}/{}", snapshot.base, snapshot.target);
        cache.insert(pair_key(&snapshot.base, &snapshot.target), snapshot);
    }
}
