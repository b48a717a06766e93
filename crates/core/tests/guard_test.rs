use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use courtbook_core::guard::{GuardOutcome, RouteGuard};
use courtbook_core::session::{MemoryStorage, Role, SessionStore};
use rstest::rstest;

fn token(valid_for: Duration) -> String {
    let exp = (Utc::now() + valid_for).timestamp();
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
}

fn session_as(role: Role) -> SessionStore {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store.login(token(Duration::hours(1)), role).unwrap();
    store
}

#[rstest]
#[case(RouteGuard::admin())]
#[case(RouteGuard::partner())]
#[case(RouteGuard::authenticated())]
fn test_anonymous_is_sent_to_login(#[case] guard: RouteGuard) {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));

    assert_eq!(guard.check(&session), GuardOutcome::RedirectToLogin);
}

#[test]
fn test_expired_token_is_sent_to_login() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.login(token(Duration::seconds(-1)), Role::Admin).unwrap();

    assert_eq!(RouteGuard::admin().check(&session), GuardOutcome::RedirectToLogin);
}

#[test]
fn test_malformed_token_is_sent_to_login() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.login("garbage", Role::Admin).unwrap();

    assert_eq!(RouteGuard::admin().check(&session), GuardOutcome::RedirectToLogin);
}

#[rstest]
#[case(Role::Admin, GuardOutcome::Allow, GuardOutcome::Forbidden)]
#[case(Role::Partner, GuardOutcome::Forbidden, GuardOutcome::Allow)]
#[case(Role::Customer, GuardOutcome::Forbidden, GuardOutcome::Forbidden)]
fn test_roles_are_matched_exactly(
    #[case] role: Role,
    #[case] admin_screen: GuardOutcome,
    #[case] partner_screen: GuardOutcome,
) {
    let session = session_as(role);

    assert_eq!(RouteGuard::admin().check(&session), admin_screen);
    assert_eq!(RouteGuard::partner().check(&session), partner_screen);
    assert_eq!(RouteGuard::authenticated().check(&session), GuardOutcome::Allow);
}

#[test]
fn test_role_from_mixed_case_api_value() {
    let session = session_as("Partner".parse().unwrap());

    assert_eq!(RouteGuard::partner().check(&session), GuardOutcome::Allow);
}

#[test]
fn test_multi_role_guard() {
    let guard = RouteGuard::new([Role::Admin, Role::Partner]);

    assert!(guard.admits(Role::Admin));
    assert!(guard.admits(Role::Partner));
    assert!(!guard.admits(Role::Customer));
}
