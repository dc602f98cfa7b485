use std::sync::Arc;

use crate::database::activity_repo::{ActivityRepository, CapacityPolicy, InMemoryActivityRepo};

/// Shared by every handler. Constructed once in `main` and dropped at shutdown.
#[derive(Clone, Debug)]
pub struct AppState {
    pub repo: Arc<dyn ActivityRepository>,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(repo: Arc<dyn ActivityRepository>, capacity: CapacityPolicy) -> Self {
        Self { repo, capacity }
    }

    /// Fresh seeded store, capacity informational.
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(InMemoryActivityRepo::seeded()),
            CapacityPolicy::Informational,
        )
    }
}
