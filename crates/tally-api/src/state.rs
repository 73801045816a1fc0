//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The only shared mutable resource is the identifier-to-points store,
//! injected behind the [`ScoreStore`] trait so the scoring logic stays
//! independently testable and alternative backends can be dropped in
//! without touching the handlers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tally_core::ReceiptId;

// -- Score Store --------------------------------------------------------------

/// Storage abstraction for accepted receipt scores.
///
/// One identifier maps to exactly one computed point total. Identifiers
/// are freshly generated per submission and never reused, so `put` is
/// effectively write-once per key. Implementations must be safe to call
/// from any number of concurrent request handlers.
pub trait ScoreStore: Send + Sync + std::fmt::Debug {
    /// Record the points for an accepted receipt.
    ///
    /// Returns the previous value if the key existed (which, given fresh
    /// identifiers, indicates a collision and should not happen).
    fn put(&self, id: ReceiptId, points: u64) -> Option<u64>;

    /// Look up the points recorded under an identifier.
    fn get(&self, id: &ReceiptId) -> Option<u64>;

    /// Number of recorded scores.
    fn len(&self) -> usize;

    /// Whether no scores have been recorded yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`ScoreStore`] backed by a `HashMap`.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across an `.await`
/// point. `parking_lot::RwLock` is non-poisonable, so a panicking writer
/// does not permanently corrupt the store.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    data: RwLock<HashMap<ReceiptId, u64>>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn put(&self, id: ReceiptId, points: u64) -> Option<u64> {
        self.data.write().insert(id, points)
    }

    fn get(&self, id: &ReceiptId) -> Option<u64> {
        self.data.read().get(id).copied()
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}

// -- Application State --------------------------------------------------------

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the store sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Injected identifier-to-points store.
    pub scores: Arc<dyn ScoreStore>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with default configuration and an
    /// in-memory store.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create application state with the given configuration and an
    /// in-memory store.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            scores: Arc::new(MemoryScoreStore::new()),
            config,
        }
    }

    /// Create application state around an externally supplied store.
    pub fn with_store(scores: Arc<dyn ScoreStore>, config: AppConfig) -> Self {
        Self { scores, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_new_creates_empty_store() {
        let store = MemoryScoreStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn store_put_and_get_roundtrip() {
        let store = MemoryScoreStore::new();
        let id = ReceiptId::new();

        let prev = store.put(id.clone(), 28);
        assert!(prev.is_none(), "first put should return None");

        assert_eq!(store.get(&id), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_get_unknown_id_returns_none() {
        let store = MemoryScoreStore::new();
        store.put(ReceiptId::new(), 109);
        assert_eq!(store.get(&ReceiptId::new()), None);
    }

    #[test]
    fn store_put_returns_previous_value() {
        let store = MemoryScoreStore::new();
        let id = ReceiptId::new();
        store.put(id.clone(), 10);
        assert_eq!(store.put(id.clone(), 20), Some(10));
        assert_eq!(store.get(&id), Some(20));
    }

    #[test]
    fn store_is_shareable_across_threads() {
        let store = Arc::new(MemoryScoreStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let id = ReceiptId::new();
                    store.put(id.clone(), n);
                    assert_eq!(store.get(&id), Some(n));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn app_state_clones_share_the_store() {
        let state = AppState::new();
        let clone = state.clone();

        let id = ReceiptId::new();
        state.scores.put(id.clone(), 42);
        assert_eq!(clone.scores.get(&id), Some(42));
    }

    #[test]
    fn default_config_uses_port_8080() {
        assert_eq!(AppConfig::default().port, 8080);
    }
}
