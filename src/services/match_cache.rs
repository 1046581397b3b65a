use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use oklch_match::{MatchResult, Variant};

/// Which engine operation produced a cached result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOp {
    /// Closest palette, paired with the requested shade
    Palette { shade: u8 },
    /// Closest single shade
    Shade,
    /// Mood transform, keyed by the exact bits of chroma and lightness
    Mood { chroma: u64, lightness: u64 },
}

impl MatchOp {
    pub fn mood(chroma: f64, lightness: f64) -> Self {
        MatchOp::Mood {
            chroma: chroma.to_bits(),
            lightness: lightness.to_bits(),
        }
    }
}

/// Cache key: normalized hex plus operation and variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub hex: String,
    pub op: MatchOp,
    pub variant: Variant,
}

/// Bounded memo of match results
///
/// Engine results are pure, so a hit is indistinguishable from recomputing.
/// When the map reaches `max_entries` it is cleared wholesale.
pub struct MatchCache {
    enabled: bool,
    max_entries: usize,
    entries: RwLock<HashMap<MatchKey, MatchResult>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MatchCache {
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            enabled: enabled && max_entries > 0,
            max_entries,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// A cache that stores nothing
    pub fn disabled() -> Self {
        Self::new(false, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Look up a result
    pub async fn get(&self, key: &MatchKey) -> Option<MatchResult> {
        if !self.enabled {
            return None;
        }
        let entries = self.entries.read().await;
        let found = entries.get(key).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Store a result
    pub async fn insert(&self, key: MatchKey, result: MatchResult) {
        if !self.enabled {
            return;
        }
        let mut entries = self.entries.write().await;
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            tracing::debug!(entries = entries.len(), "Match cache full, clearing");
            entries.clear();
        }
        entries.insert(key, result);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// `(hits, misses)` since creation
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new(true, 4096)
    }
}
