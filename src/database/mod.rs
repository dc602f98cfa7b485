pub mod activity_repo;
pub mod seed;

pub use activity_repo::{ActivityRepository, CapacityPolicy, InMemoryActivityRepo, StoreError};
