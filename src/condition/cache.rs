//! Condition parsing cache - keyed by condition text with fast hashing

use crate::condition::ast::Condition;
use crate::condition::parser;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Parsed conditions keyed by their raw text
///
/// Owned by an engine; the handbook it serves is read-only, so entries
/// never go stale.
#[derive(Debug, Default)]
pub struct ConditionCache {
    entries: RwLock<AHashMap<String, Arc<Condition>>>,
}

impl ConditionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(AHashMap::with_capacity(capacity)),
        }
    }

    /// Get or parse a condition string, using the cache for repeated text
    #[inline]
    pub fn get_or_parse(&self, text: &str) -> Arc<Condition> {
        // Fast path: check read lock first
        {
            let entries = self.entries.read();
            if let Some(condition) = entries.get(text) {
                return Arc::clone(condition);
            }
        }

        // Slow path: parse and cache
        log::debug!("condition cache miss: {:?}", text);
        let condition = Arc::new(parser::parse(text));

        let mut entries = self.entries.write();
        Arc::clone(
            entries
                .entry(text.to_string())
                .or_insert_with(|| Arc::clone(&condition)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
