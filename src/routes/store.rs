//! Route storage.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::routes::types::Route;

/// Keyed storage for created routes.
///
/// Implementations must be safe to share across request handlers.
pub trait RouteStore: Send + Sync {
    /// Store a route under its id.
    fn put(&self, route: Route);

    /// Look up a route by id.
    fn get(&self, id: &str) -> Option<Route>;

    /// All routes, newest first.
    fn list(&self) -> Vec<Route>;

    /// Number of stored routes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct StoredRoute {
    /// Insertion order, breaks ties between equal timestamps.
    seq: u64,
    route: Route,
}

/// Process-lifetime route store backed by a concurrent map.
///
/// Entries are never expired or removed.
#[derive(Clone, Default)]
pub struct InMemoryRouteStore {
    inner: Arc<DashMap<String, StoredRoute>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteStore for InMemoryRouteStore {
    fn put(&self, route: Route) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.inner.insert(route.id.clone(), StoredRoute { seq, route });
    }

    fn get(&self, id: &str) -> Option<Route> {
        self.inner.get(id).map(|r| r.value().route.clone())
    }

    fn list(&self) -> Vec<Route> {
        let mut entries: Vec<(u64, Route)> = self
            .inner
            .iter()
            .map(|r| (r.value().seq, r.value().route.clone()))
            .collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        entries.into_iter().map(|(_, route)| route).collect()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
