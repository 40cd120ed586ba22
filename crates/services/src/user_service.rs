use std::sync::Arc;

use kotoba_core::model::{User, UserId};
use storage::repository::UserRepository;
use tracing::info;

use crate::error::UserServiceError;

/// Lists accounts and flips the admin role for the users dashboard.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// # Errors
    ///
    /// Returns `UserServiceError::Storage` if repository access fails.
    pub async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        let users = self.users.list_users().await?;
        Ok(users)
    }

    /// Promote a user to admin, or revoke admin from one who has it.
    ///
    /// The current role is read back first so a stale table cannot flip the
    /// role in the wrong direction.
    ///
    /// # Errors
    ///
    /// Returns `UserServiceError::UserNotFound` if the account is gone.
    /// Returns `UserServiceError::Storage` if repository access fails.
    pub async fn toggle_admin(&self, id: &UserId) -> Result<User, UserServiceError> {
        let current = self
            .users
            .get_user(id)
            .await?
            .ok_or(UserServiceError::UserNotFound)?;
        let role = current.role().toggled();
        let user = self.users.update_user_role(id, role).await?;
        info!(%id, %role, "user role updated");
        Ok(user)
    }
}
