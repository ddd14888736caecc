//! User Administration
//!
//! Platform accounts as an in-memory directory: seeded mock users plus
//! create/update/delete/toggle operations with username uniqueness
//! enforced.

pub mod directory;
pub mod types;

pub use directory::{DirectoryError, UserDirectory};
pub use types::{CreateUserRequest, PermissionCategory, User, UserPermission, UserRole, UserStatus};
