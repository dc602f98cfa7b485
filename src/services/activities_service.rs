use thiserror::Error;
use tracing::{info, warn};

use crate::database::activity_repo::{ActivityRepository, CapacityPolicy, StoreError};
use crate::models::{ActivityMap, SignupConfirmation};

#[derive(Debug, Error)]
#[error(transparent)]
pub struct SignupError(#[from] pub StoreError);

impl SignupError {
    /// Student-facing reason, returned as the `detail` of the error body.
    pub fn detail(&self) -> String {
        match &self.0 {
            StoreError::NotFound { .. } => "Activity not found".to_string(),
            StoreError::AlreadyRegistered { activity, email } => {
                format!("{} is already signed up for {}", email, activity)
            }
            StoreError::CapacityExceeded { activity, .. } => format!("{} is full", activity),
        }
    }
}

pub async fn list_activities(repo: &dyn ActivityRepository) -> ActivityMap {
    repo.list().await
}

pub async fn signup_for_activity(
    repo: &dyn ActivityRepository,
    policy: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match repo.add_participant(activity_name, email, policy).await {
        Ok(activity) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = activity.participants.len(),
                "signup accepted"
            );
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_repo::InMemoryActivityRepo;

    #[tokio::test]
    async fn confirmation_mentions_email_and_activity() {
        let repo = InMemoryActivityRepo::seeded();
        let confirmation = signup_for_activity(
            &repo,
            CapacityPolicy::Informational,
            "Basketball Team",
            "testuser@mergington.edu",
        )
        .await
        .unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up testuser@mergington.edu for Basketball Team"
        );
    }

    #[tokio::test]
    async fn error_details() {
        let repo = InMemoryActivityRepo::seeded();

        let err = signup_for_activity(
            &repo,
            CapacityPolicy::Informational,
            "Nonexistent Activity",
            "student@mergington.edu",
        )
        .await
        .unwrap_err();
        assert_eq!(err.detail(), "Activity not found");

        let err = signup_for_activity(
            &repo,
            CapacityPolicy::Informational,
            "Chess Club",
            "michael@mergington.edu",
        )
        .await
        .unwrap_err();
        assert!(err.detail().contains("already signed up"));
        assert!(err.detail().contains("michael@mergington.edu"));
    }

    #[tokio::test]
    async fn list_reflects_signups() {
        let repo = InMemoryActivityRepo::seeded();
        signup_for_activity(
            &repo,
            CapacityPolicy::Informational,
            "Debate Team",
            "multisport@mergington.edu",
        )
        .await
        .unwrap();

        let activities = list_activities(&repo).await;
        assert_eq!(
            activities["Debate Team"].participants,
            vec!["multisport@mergington.edu"]
        );
        assert!(activities["Chess Club"]
            .participants
            .contains(&"daniel@mergington.edu".to_string()));
    }
}
