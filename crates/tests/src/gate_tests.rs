use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use shared_types::{
    GateDecision, GateState, MarkerKey, MarkerStore, Role, SessionMarkers, VerifyOutcome,
    DASHBOARD_PATH, LOGIN_PATH, SELECT_PROJECT_PATH,
};

use crate::common::{self, MockBackend, MockState};

#[tokio::test]
async fn member_without_markers_is_sent_to_selector() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state, GateState::NeedsProjectSelection);
    assert_eq!(state.decision(), GateDecision::Redirect(SELECT_PROJECT_PATH));
    assert_eq!(store.user_role.as_deref(), Some("user"));
}

#[tokio::test]
async fn admin_without_markers_renders_shell() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;
    let mut store = SessionMarkers::default();

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state, GateState::AuthenticatedPrivileged { role: Role::Admin });
    assert_eq!(state.decision(), GateDecision::RenderShell);
}

#[tokio::test]
async fn project_lead_is_never_sent_to_selector() {
    let backend = MockBackend::start(MockState::signed_in("jefe proyecto")).await;
    let mut store = SessionMarkers::default();

    let state = client::session::check_gate(
        &backend.client,
        &mut store,
        "/dashboard/attendance-management",
    )
    .await;

    assert_eq!(state.decision(), GateDecision::RenderShell);
    assert_eq!(state.role(), Some(&Role::ProjectLead));
}

#[tokio::test]
async fn member_with_selected_project_renders_nested_route() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::SelectedProject, "p1");

    let state = client::session::check_gate(
        &backend.client,
        &mut store,
        "/dashboard/course-management",
    )
    .await;

    assert_eq!(
        state,
        GateState::AuthenticatedMember {
            role: Role::Member("user".into())
        }
    );
    assert_eq!(state.decision(), GateDecision::RenderShell);
}

#[tokio::test]
async fn member_with_committee_and_team_role_renders_shell() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::CommitteeId, "c1");
    store.set(MarkerKey::TeamRole, "Developer");

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;
    assert_eq!(state.decision(), GateDecision::RenderShell);
}

#[tokio::test]
async fn committee_alone_is_not_a_project_context() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::CommitteeId, "c1");

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;
    assert_eq!(state.decision(), GateDecision::Redirect(SELECT_PROJECT_PATH));
}

#[tokio::test]
async fn network_error_goes_to_login_whatever_the_markers() {
    let client = common::unreachable_client().await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::SelectedProject, "p1");
    store.set(MarkerKey::UserRole, "admin");

    let state = client::session::check_gate(&client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state, GateState::Unauthenticated);
    assert_eq!(state.decision(), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(state.role(), None);
}

#[tokio::test]
async fn expired_session_goes_to_login() {
    let backend = MockBackend::start(MockState::signed_out()).await;
    let mut store = SessionMarkers::default();

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state.decision(), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(backend.requests(), vec!["GET /auth/verify-session".to_string()]);
}

#[tokio::test]
async fn non_json_verify_reply_is_no_session() {
    let backend = MockBackend::start(MockState {
        verify_body: Some("<html>ok</html>"),
        ..MockState::signed_in("admin")
    })
    .await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::SelectedProject, "p1");

    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state, GateState::Unauthenticated);
    assert_eq!(store.user_role, None);
}

#[tokio::test]
async fn verify_reply_without_envelope_is_no_session() {
    let backend = MockBackend::start(MockState {
        verify_body: Some(r#"{"role":"admin"}"#),
        ..MockState::signed_in("admin")
    })
    .await;

    assert_eq!(
        client::session::verify(&backend.client).await,
        VerifyOutcome::NoSession
    );
}

#[tokio::test]
async fn slow_verify_times_out_and_goes_to_login() {
    let backend = MockBackend::start(MockState {
        verify_delay: Some(Duration::from_secs(5)),
        ..MockState::signed_in("admin")
    })
    .await;
    let mut store = SessionMarkers::default();

    let started = Instant::now();
    let state = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;

    assert_eq!(state.decision(), GateDecision::Redirect(LOGIN_PATH));
    // Gives up at the configured 2 s timeout, not when the handler answers.
    assert!(started.elapsed() < Duration::from_secs(4));
}
