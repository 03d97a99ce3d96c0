//! Integration tests for the mock authentication service.

#![allow(clippy::unwrap_used)]

use aidconnect_core::{Email, Role};
use aidconnect_site::services::AuthError;

use aidconnect_integration_tests::{test_auth, test_auth_at};

#[tokio::test]
async fn test_fixture_staff_login() {
    let auth = test_auth();
    let user = auth.login("staff@aidconnect.org", "pw", Role::Staff).await.unwrap();
    assert_eq!(user.id.as_str(), "1");
    assert_eq!(user.name, "Admin Staff");
    assert_eq!(user.role, Role::Staff);
}

#[tokio::test]
async fn test_fixture_donor_login() {
    let auth = test_auth();
    let user = auth.login("donor@example.com", "pw", Role::Donor).await.unwrap();
    assert_eq!(user.id.as_str(), "2");
    assert_eq!(user.name, "John Donor");
}

#[tokio::test]
async fn test_any_wellformed_email_signs_in() {
    let auth = test_auth();
    let user = auth.login("someone@example.org", "pw", Role::Donor).await.unwrap();
    // Fabricated identity: name comes from the email local part.
    assert_eq!(user.name, "someone");
    assert_eq!(user.role, Role::Donor);
    assert_ne!(user.id.as_str(), "1");
    assert_ne!(user.id.as_str(), "2");
}

#[tokio::test]
async fn test_malformed_email_fails() {
    let auth = test_auth();
    let err = auth.login("not-an-email", "pw", Role::Donor).await.unwrap_err();
    assert!(matches!(err, AuthError::AuthenticationFailed));
    // Nothing was persisted by the failed attempt.
    assert!(auth.current_persisted().unwrap().is_none());
}

#[tokio::test]
async fn test_register_then_relogin() {
    let auth = test_auth();
    let email = Email::parse("new.donor@example.com").unwrap();
    let registered = auth
        .register(email, "pw", "New Donor".to_owned(), Role::Donor)
        .await
        .unwrap();

    let relogged = auth
        .login("new.donor@example.com", "pw", Role::Donor)
        .await
        .unwrap();
    assert_eq!(relogged.id, registered.id);
    assert_eq!(relogged.name, "New Donor");
}

#[tokio::test]
async fn test_logout_clears_persisted_identity() {
    let auth = test_auth();
    auth.login("donor@example.com", "pw", Role::Donor).await.unwrap();
    assert!(auth.current_persisted().unwrap().is_some());

    auth.logout().unwrap();
    assert!(auth.current_persisted().unwrap().is_none());
}

#[tokio::test]
async fn test_identity_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let auth = test_auth_at(dir.path());
        auth.login("staff@aidconnect.org", "pw", Role::Staff).await.unwrap();
    }

    let reopened = test_auth_at(dir.path());
    let persisted = reopened.current_persisted().unwrap().unwrap();
    assert_eq!(persisted.name, "Admin Staff");
    assert_eq!(persisted.role, Role::Staff);
}
