use kotoba_core::model::User;
use services::UserServiceError;

/// A row in the admin users table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRowVm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
    pub is_admin: bool,
}

impl UserRowVm {
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_admin {
            "Revoke Admin"
        } else {
            "Make Admin"
        }
    }
}

impl From<&User> for UserRowVm {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            role_label: if user.is_admin() { "Admin" } else { "User" },
            is_admin: user.is_admin(),
        }
    }
}

/// Rows whose name or email contains `query`, in backend order.
#[must_use]
pub fn map_user_rows(users: &[User], query: &str) -> Vec<UserRowVm> {
    users
        .iter()
        .filter(|user| user.matches_query(query))
        .map(UserRowVm::from)
        .collect()
}

#[must_use]
pub fn user_role_message(result: &Result<User, UserServiceError>) -> String {
    match result {
        Ok(user) => format!("User role updated to {}", user.role()),
        Err(UserServiceError::UserNotFound) => "User no longer exists".to_owned(),
        Err(_) => "Failed to update user role".to_owned(),
    }
}
