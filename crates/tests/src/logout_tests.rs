use pretty_assertions::assert_eq;
use shared_types::{
    MarkerKey, MarkerStore, SessionMarkers, VerifyOutcome, DASHBOARD_PATH, LOGIN_PATH,
    SELECT_PROJECT_PATH,
};

use crate::common::{self, MockBackend, MockState};

fn full_markers() -> SessionMarkers {
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::SelectedProject, "p1");
    store.set(MarkerKey::CommitteeId, "c1");
    store.set(MarkerKey::TeamRole, "Developer");
    store.set(MarkerKey::UserRole, "user");
    store
}

#[tokio::test]
async fn unreachable_backend_still_clears_markers_and_goes_to_login() {
    let client = common::unreachable_client().await;
    let mut store = full_markers();

    let (path, result) = client::session::logout(&client, &mut store).await;

    assert_eq!(path, LOGIN_PATH);
    assert!(result.is_err_and(|e| e.is_transport()));
    assert!(store.is_empty());
}

#[tokio::test]
async fn logout_ends_the_backend_session() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;
    let mut store = full_markers();

    let (path, result) = client::session::logout(&backend.client, &mut store).await;

    assert_eq!(path, LOGIN_PATH);
    assert!(result.is_ok());
    assert!(store.is_empty());
    assert_eq!(
        client::session::verify(&backend.client).await,
        VerifyOutcome::NoSession
    );
}

#[tokio::test]
async fn change_project_returns_to_selector_which_lists_again() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = full_markers();

    assert_eq!(client::session::change_project(&mut store), SELECT_PROJECT_PATH);
    assert!(!store.has_project_context());
    assert_eq!(store.user_role.as_deref(), Some("user"));

    let outcome = client::selector::mount(&backend.client, &mut store).await;
    assert!(matches!(outcome, client::selector::SelectorMount::Ready(_)));
    assert!(backend
        .requests()
        .contains(&"GET /usuario/listar-equipo-proyecto".to_string()));
}

#[tokio::test]
async fn failed_logout_does_not_bounce_back_into_the_console() {
    let backend = MockBackend::start(MockState {
        fail_logout: true,
        ..MockState::signed_in("admin")
    })
    .await;
    let mut store = full_markers();

    let (path, result) = client::session::logout(&backend.client, &mut store).await;
    assert_eq!(path, LOGIN_PATH);
    assert!(result.is_err());
    assert!(store.is_empty());

    // The backend session is still live, but the login page stays put.
    backend.clear_requests();
    assert_eq!(client::session::resume_session(&backend.client, true).await, None);
    assert!(backend.requests().is_empty());

    // A later visit to the login page still resumes the live session.
    assert_eq!(
        client::session::resume_session(&backend.client, false).await,
        Some(DASHBOARD_PATH)
    );
}
