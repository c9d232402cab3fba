//! Pass-scoped response cache.
//!
//! Deduplicates identical calls (same query text, variables and mode) within one
//! generation pass. The cache lives in memory only, is cleared at every pass
//! boundary, and never stores failures.

use crate::envelope::ContentEnvelope;
use crate::query::QueryRequest;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call-signature keyed cache for one generation pass.
#[derive(Debug, Default)]
pub struct PassCache {
    entries: Mutex<HashMap<String, ContentEnvelope>>,
    hits: AtomicU64,
}

impl PassCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key: blake3 over query text, serialized variables and mode.
    pub fn key_for(request: &QueryRequest) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(request.query().as_bytes());
        hasher.update(&[0]);
        // Variables are a sorted map, so equal variable sets serialize identically.
        hasher.update(serde_json::Value::Object(request.variables().clone()).to_string().as_bytes());
        hasher.update(&[0]);
        hasher.update(request.mode().as_str().as_bytes());
        hex::encode(hasher.finalize().as_bytes())
    }

    pub fn get(&self, key: &str) -> Option<ContentEnvelope> {
        let hit = self.entries.lock().get(key).cloned();
        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    pub fn insert(&self, key: String, envelope: ContentEnvelope) {
        self.entries.lock().insert(key, envelope);
    }

    /// Drop every entry and reset the hit counter.
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}
