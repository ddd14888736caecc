//! User Directory
//!
//! In-memory account management for the user administration view. The
//! directory is owned by the view that created it; nothing is persisted.

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::types::{CreateUserRequest, User, UserRole, UserStatus};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    UserNotFound,
    AlreadyExists(String),
    InvalidInput(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::UserNotFound => write!(f, "User not found"),
            DirectoryError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            DirectoryError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DirectoryError {}

// ============================================================================
// DIRECTORY
// ============================================================================

pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Directory seeded with the mock account roster.
    pub fn new() -> Self {
        Self {
            users: seed_users(),
        }
    }

    /// All accounts in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn get_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Create an account. Usernames are unique within the directory.
    pub fn create(&mut self, request: CreateUserRequest) -> Result<User, DirectoryError> {
        if request.username.is_empty() {
            return Err(DirectoryError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }
        if !request.email.contains('@') {
            return Err(DirectoryError::InvalidInput(
                "Email address is not valid".to_string(),
            ));
        }
        if self.get_by_username(&request.username).is_some() {
            return Err(DirectoryError::AlreadyExists(
                "Username already exists".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            role: request.role,
            status: UserStatus::Active,
            last_login: None,
            created_at: Utc::now(),
            permissions: Vec::new(),
            department: request.department,
            phone_number: request.phone_number,
            two_factor_enabled: false,
        };

        self.users.push(user.clone());
        log::info!("Created user: {} ({})", user.username, user.role);
        Ok(user)
    }

    /// Replace an account wholesale, matched by id.
    pub fn update(&mut self, updated: User) -> Result<(), DirectoryError> {
        if !self.users.iter().any(|u| u.id == updated.id) {
            return Err(DirectoryError::UserNotFound);
        }

        // Renames must not collide with another account
        if self
            .users
            .iter()
            .any(|u| u.id != updated.id && u.username == updated.username)
        {
            return Err(DirectoryError::AlreadyExists(
                "Username already exists".to_string(),
            ));
        }

        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == updated.id)
            .ok_or(DirectoryError::UserNotFound)?;
        *slot = updated;
        Ok(())
    }

    /// Remove an account, returning it.
    pub fn delete(&mut self, user_id: &str) -> Result<User, DirectoryError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(DirectoryError::UserNotFound)?;

        let user = self.users.remove(index);
        log::info!("Deleted user: {}", user.username);
        Ok(user)
    }

    /// Flip an account between active and inactive. Suspended accounts
    /// reactivate, matching the admin view's toggle.
    pub fn toggle_status(&mut self, user_id: &str) -> Result<UserStatus, DirectoryError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(DirectoryError::UserNotFound)?;

        user.status = match user.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive | UserStatus::Suspended => UserStatus::Active,
        };

        Ok(user.status)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SEED ROSTER
// ============================================================================

fn seed_users() -> Vec<User> {
    let now = Utc::now();

    vec![
        User {
            id: "1".to_string(),
            username: "admin".to_string(),
            email: "admin@secureiot.com".to_string(),
            full_name: "System Administrator".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_login: Some(now - Duration::hours(6)),
            created_at: now - Duration::days(220),
            permissions: Vec::new(),
            department: Some("IT Operations".to_string()),
            phone_number: Some("+1-555-0101".to_string()),
            two_factor_enabled: true,
        },
        User {
            id: "2".to_string(),
            username: "operator1".to_string(),
            email: "john.doe@secureiot.com".to_string(),
            full_name: "John Doe".to_string(),
            role: UserRole::Operator,
            status: UserStatus::Active,
            last_login: Some(now - Duration::hours(2)),
            created_at: now - Duration::days(150),
            permissions: Vec::new(),
            department: Some("Operations".to_string()),
            phone_number: Some("+1-555-0102".to_string()),
            two_factor_enabled: true,
        },
        User {
            id: "3".to_string(),
            username: "security_analyst".to_string(),
            email: "jane.smith@secureiot.com".to_string(),
            full_name: "Jane Smith".to_string(),
            role: UserRole::SecurityAnalyst,
            status: UserStatus::Active,
            last_login: Some(now - Duration::minutes(45)),
            created_at: now - Duration::days(120),
            permissions: Vec::new(),
            department: Some("Security".to_string()),
            phone_number: Some("+1-555-0103".to_string()),
            two_factor_enabled: true,
        },
        User {
            id: "4".to_string(),
            username: "viewer1".to_string(),
            email: "bob.wilson@secureiot.com".to_string(),
            full_name: "Bob Wilson".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Inactive,
            last_login: Some(now - Duration::days(5)),
            created_at: now - Duration::days(60),
            permissions: Vec::new(),
            department: Some("Monitoring".to_string()),
            phone_number: Some("+1-555-0104".to_string()),
            two_factor_enabled: false,
        },
        User {
            id: "5".to_string(),
            username: "temp_user".to_string(),
            email: "temp@secureiot.com".to_string(),
            full_name: "Temporary User".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Suspended,
            last_login: None,
            created_at: now - Duration::days(14),
            permissions: Vec::new(),
            department: Some("Temp".to_string()),
            phone_number: None,
            two_factor_enabled: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{}@secureiot.com", username),
            full_name: "New Person".to_string(),
            role: UserRole::Operator,
            department: None,
            phone_number: None,
            permissions: Vec::new(),
        }
    }

    #[test]
    fn test_seed_roster() {
        let dir = UserDirectory::new();
        assert_eq!(dir.list().len(), 5);
        assert!(dir.get_by_username("admin").is_some());
    }

    #[test]
    fn test_create_and_lookup() {
        let mut dir = UserDirectory::new();
        let user = dir.create(request("alice.johnson")).unwrap();

        assert_eq!(user.status, UserStatus::Active);
        assert!(user.last_login.is_none());
        assert_eq!(dir.get(&user.id).unwrap().username, "alice.johnson");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut dir = UserDirectory::new();
        let err = dir.create(request("admin")).unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadyExists(_)));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut dir = UserDirectory::new();
        let mut bad = request("carol");
        bad.email = "not-an-email".to_string();

        let err = dir.create(bad).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidInput(_)));
    }

    #[test]
    fn test_toggle_status() {
        let mut dir = UserDirectory::new();

        assert_eq!(dir.toggle_status("1").unwrap(), UserStatus::Inactive);
        assert_eq!(dir.toggle_status("1").unwrap(), UserStatus::Active);
        // Suspended accounts reactivate
        assert_eq!(dir.toggle_status("5").unwrap(), UserStatus::Active);
    }

    #[test]
    fn test_delete_removes_account() {
        let mut dir = UserDirectory::new();
        let removed = dir.delete("4").unwrap();

        assert_eq!(removed.username, "viewer1");
        assert!(dir.get("4").is_none());
        assert_eq!(dir.delete("4").unwrap_err(), DirectoryError::UserNotFound);
    }

    #[test]
    fn test_update_rejects_username_collision() {
        let mut dir = UserDirectory::new();
        let mut user = dir.get("2").unwrap().clone();
        user.username = "admin".to_string();

        let err = dir.update(user).unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadyExists(_)));
    }
}
