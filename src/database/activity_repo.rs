use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityMap};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("activity {activity:?} does not exist")]
    NotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{activity} has no spots left ({max_participants} max)")]
    CapacityExceeded {
        activity: String,
        max_participants: u32,
    },
}

/// Whether `max_participants` limits signups or is only shown to students.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Informational,
    Enforced,
}

#[async_trait]
pub trait ActivityRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Owned snapshot of every activity; callers cannot reach the live store through it.
    async fn list(&self) -> ActivityMap;

    async fn get(&self, name: &str) -> Option<Activity>;

    /// Appends `email` to the roster of `name` and returns the updated record.
    /// The duplicate check and the append are one atomic step.
    async fn add_participant(
        &self,
        name: &str,
        email: &str,
        policy: CapacityPolicy,
    ) -> Result<Activity, StoreError>;
}

/// Process-lifetime store. One write lock guards the whole map, so concurrent
/// signups for the same activity cannot both pass the duplicate check.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepo {
    activities: RwLock<ActivityMap>,
}

impl InMemoryActivityRepo {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepo {
    async fn list(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    async fn add_participant(
        &self,
        name: &str,
        email: &str,
        policy: CapacityPolicy,
    ) -> Result<Activity, StoreError> {
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.get_mut(name) else {
            return Err(StoreError::NotFound {
                activity: name.to_string(),
            });
        };

        if activity.has_participant(email) {
            return Err(StoreError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if policy == CapacityPolicy::Enforced && activity.is_full() {
            return Err(StoreError::CapacityExceeded {
                activity: name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }
}
