//! Mock authentication service.
//!
//! No real credential verification happens anywhere: the password is
//! accepted but never checked, and the caller picks their own role at
//! login. Two fixture identities are seeded for demos; any other
//! well-formed email is accepted and gets a fabricated identity. The
//! current identity persists as a single wholesale-overwritten record in
//! the [`LocalStore`].

use std::sync::Mutex;

use tracing::info;

use aidconnect_core::{Email, Role, UserId};

use crate::models::CurrentUser;
use crate::storage::{LocalStore, StorageError, keys};

use super::Pacing;

/// A seeded demo identity.
#[derive(Debug, Clone)]
struct FixtureIdentity {
    id: UserId,
    email: String,
    name: String,
    role: Role,
}

/// Login / registration / logout against the mock identity table.
#[derive(Debug)]
pub struct SessionService {
    store: LocalStore,
    /// Fixture table plus identities registered this process lifetime.
    /// Registrations are process-local on purpose; only the signed-in
    /// identity survives a restart.
    fixtures: Mutex<Vec<FixtureIdentity>>,
    pacing: Pacing,
}

/// Authentication errors surfaced to the login form.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email matched no fixture and is not a well-formed address.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionService {
    /// Build the service with the two seeded demo identities.
    #[must_use]
    pub fn new(store: LocalStore, pacing: Pacing) -> Self {
        let fixtures = vec![
            FixtureIdentity {
                id: UserId::new("1"),
                email: "staff@aidconnect.org".to_owned(),
                name: "Admin Staff".to_owned(),
                role: Role::Staff,
            },
            FixtureIdentity {
                id: UserId::new("2"),
                email: "donor@example.com".to_owned(),
                name: "John Donor".to_owned(),
                role: Role::Donor,
            },
        ];
        Self {
            store,
            fixtures: Mutex::new(fixtures),
            pacing,
        }
    }

    /// Attempt a login.
    ///
    /// A fixture whose email and role both match wins; otherwise any
    /// parseable email is accepted with a fabricated identity whose
    /// display name is the email's local part. The simulated delay runs
    /// whether or not the attempt succeeds. The password is ignored.
    pub async fn login(
        &self,
        email: &str,
        _password: &str,
        role: Role,
    ) -> Result<CurrentUser, AuthError> {
        self.pacing.auth_delay().await;

        let fixture = self
            .lock_fixtures()
            .iter()
            .find(|f| f.email.eq_ignore_ascii_case(email) && f.role == role)
            .cloned();

        let user = if let Some(fixture) = fixture {
            CurrentUser {
                id: fixture.id,
                email: Email::parse(&fixture.email)
                    .map_err(|_| AuthError::AuthenticationFailed)?,
                name: fixture.name,
                role: fixture.role,
            }
        } else {
            let parsed = Email::parse(email).map_err(|_| AuthError::AuthenticationFailed)?;
            let name = parsed.local_part().to_owned();
            CurrentUser {
                id: UserId::from_timestamp(chrono::Utc::now()),
                email: parsed,
                name,
                role,
            }
        };

        self.store.set(keys::CURRENT_USER, &user)?;
        info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(user)
    }

    /// Register a new identity. Always succeeds and signs the user in.
    pub async fn register(
        &self,
        email: Email,
        _password: &str,
        name: String,
        role: Role,
    ) -> Result<CurrentUser, AuthError> {
        self.pacing.auth_delay().await;

        let user = CurrentUser {
            id: UserId::from_timestamp(chrono::Utc::now()),
            email,
            name,
            role,
        };

        // Registered identities join the table so they can log back in by
        // the same email and role within this process lifetime.
        self.lock_fixtures().push(FixtureIdentity {
            id: user.id.clone(),
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            role: user.role,
        });

        self.store.set(keys::CURRENT_USER, &user)?;
        info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user)
    }

    /// Drop the persisted identity. Synchronous and idempotent.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(keys::CURRENT_USER)?;
        info!("user logged out");
        Ok(())
    }

    /// The identity persisted by a previous login, if any.
    pub fn current_persisted(&self) -> Result<Option<CurrentUser>, AuthError> {
        Ok(self.store.get(keys::CURRENT_USER)?)
    }

    fn lock_fixtures(&self) -> std::sync::MutexGuard<'_, Vec<FixtureIdentity>> {
        self.fixtures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new(LocalStore::in_memory(), Pacing::Instant)
    }

    #[tokio::test]
    async fn test_fixture_login() {
        let auth = service();
        let user = auth
            .login("staff@aidconnect.org", "anything", Role::Staff)
            .await
            .unwrap();
        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.name, "Admin Staff");
        assert_eq!(user.role, Role::Staff);
    }

    #[tokio::test]
    async fn test_fixture_requires_matching_role() {
        let auth = service();
        // Same email, wrong role: falls through to the generic rule and
        // gets a fabricated identity instead of the fixture.
        let user = auth
            .login("staff@aidconnect.org", "x", Role::Donor)
            .await
            .unwrap();
        assert_ne!(user.id.as_str(), "1");
        assert_eq!(user.role, Role::Donor);
        assert_eq!(user.name, "staff");
    }

    #[tokio::test]
    async fn test_generic_login_accepts_any_wellformed_email() {
        let auth = service();
        let user = auth.login("priya@example.org", "x", Role::Donor).await.unwrap();
        assert_eq!(user.name, "priya");
        assert_eq!(user.role, Role::Donor);
    }

    #[tokio::test]
    async fn test_malformed_email_rejected() {
        let auth = service();
        let err = auth.login("not-an-email", "x", Role::Donor).await.unwrap_err();
        assert!(matches!(err, AuthError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_login_persists_identity() {
        let auth = service();
        auth.login("donor@example.com", "x", Role::Donor).await.unwrap();
        let persisted = auth.current_persisted().unwrap().unwrap();
        assert_eq!(persisted.name, "John Donor");
    }

    #[tokio::test]
    async fn test_register_always_succeeds_and_signs_in() {
        let auth = service();
        let email = Email::parse("new@example.com").unwrap();
        let user = auth
            .register(email, "pw", "New Person".to_owned(), Role::Donor)
            .await
            .unwrap();
        assert_eq!(user.name, "New Person");
        assert!(auth.current_persisted().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_record_and_is_idempotent() {
        let auth = service();
        auth.login("donor@example.com", "x", Role::Donor).await.unwrap();
        auth.logout().unwrap();
        assert!(auth.current_persisted().unwrap().is_none());
        auth.logout().unwrap();
    }
}
