/**
 * Domain Records
 *
 * This module defines the records the service reads from and writes to
 * storage: registered users and relying applications.
 *
 * Both types carry confidential material (a password hash, a signing
 * secret). Their `Debug` output redacts it so a stray `{:?}` in a log line
 * cannot leak it.
 */
use std::fmt;

/// A registered user
///
/// Created by registration and immutable afterwards. The email is the
/// lookup key for login; the id is assigned by storage.
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Storage-assigned identifier
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password, never the plaintext
    #[sqlx(rename = "pass_hash")]
    pub password_hash: Vec<u8>,
    /// Whether the user holds administrator privileges
    pub is_admin: bool,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// A relying application
///
/// Tokens issued for an application are signed with its `secret`; the
/// application verifies them with the same secret.
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct App {
    pub id: i64,
    pub name: String,
    pub secret: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}
