use std::time::{Duration, Instant};

use client::selector::{self as flow, SelectorMount};
use pretty_assertions::assert_eq;
use shared_types::{
    MarkerKey, MarkerStore, SelectorFilter, SelectorState, SessionMarkers, DASHBOARD_PATH,
    LOGIN_PATH,
};

use crate::common::{MockBackend, MockState};

async fn mounted(backend: &MockBackend, store: &mut SessionMarkers) -> SelectorState {
    let mut state = SelectorState::new();
    match flow::mount(&backend.client, store).await {
        SelectorMount::Ready(memberships) => memberships.apply(&mut state),
        SelectorMount::Redirect(path) => panic!("unexpected redirect to {path}"),
    }
    state
}

#[tokio::test]
async fn mount_loads_memberships_and_profile() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();

    let state = mounted(&backend, &mut store).await;

    assert!(!state.memberships_loading);
    assert_eq!(state.notice, None);
    let role_ids: Vec<&str> = state.team_roles.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(role_ids, vec!["r1", "2"]);
    assert_eq!(state.committees[0].name, "Etica");
    assert_eq!(state.profile.as_ref().map(|p| p.initials()), Some("AL".to_string()));
}

#[tokio::test]
async fn membership_listings_are_fetched_together() {
    let backend = MockBackend::start(MockState {
        listing_delay: Some(Duration::from_millis(700)),
        ..MockState::signed_in("user")
    })
    .await;

    let started = Instant::now();
    let memberships = flow::load_memberships(&backend.client).await;
    let elapsed = started.elapsed();

    assert!(memberships.team_roles.is_ok());
    assert!(memberships.committees.is_ok());
    assert!(memberships.profile.is_ok());
    // One after another would take at least 2.1 s.
    assert!(elapsed < Duration::from_millis(1500), "took {elapsed:?}");
}

#[tokio::test]
async fn stored_project_redirects_without_fetching() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    store.set(MarkerKey::SelectedProject, "p1");

    let outcome = flow::mount(&backend.client, &mut store).await;

    assert!(matches!(outcome, SelectorMount::Redirect(DASHBOARD_PATH)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn signed_out_selector_goes_to_login() {
    let backend = MockBackend::start(MockState::signed_out()).await;
    let mut store = SessionMarkers::default();

    let outcome = flow::mount(&backend.client, &mut store).await;

    assert!(matches!(outcome, SelectorMount::Redirect(LOGIN_PATH)));
    assert_eq!(backend.requests(), vec!["GET /auth/verify-session".to_string()]);
}

#[tokio::test]
async fn committee_listing_failure_shows_notice_and_keeps_the_rest() {
    let backend = MockBackend::start(MockState {
        fail_committees: true,
        ..MockState::signed_in("user")
    })
    .await;
    let mut store = SessionMarkers::default();

    let state = mounted(&backend, &mut store).await;

    assert_eq!(state.notice.as_deref(), Some("Error al listar comites"));
    assert!(state.committees.is_empty());
    assert_eq!(state.team_roles.len(), 2);
}

#[tokio::test]
async fn committee_after_team_role_replaces_selection() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    let mut state = mounted(&backend, &mut store).await;
    backend.clear_requests();

    let role = state.team_roles[0].clone();
    let first = flow::choose_team_role(&mut store, &mut state, &role);
    let result = flow::fetch_projects(&backend.client, &first).await;
    assert!(state.projects_loaded(first.ticket, result));
    assert_eq!(store.team_role.as_deref(), Some("Developer"));

    let committee = state.committees[0].clone();
    let second = flow::choose_committee(&mut store, &mut state, &committee);
    let result = flow::fetch_projects(&backend.client, &second).await;
    assert!(state.projects_loaded(second.ticket, result));

    assert_eq!(state.filter, SelectorFilter::Committee { id: "c1".into() });
    assert_eq!(state.filter.team_role_id(), None);
    assert_eq!(store.team_role, None);
    assert_eq!(store.committee_id.as_deref(), Some("c1"));
    assert_eq!(state.projects[0].project.id, "committee-c1-p1");
    assert_eq!(
        backend.requests(),
        vec![
            "GET /usuario/listar-proyecto-rol-proyecto/r1".to_string(),
            "GET /usuario/listar-comite-proyecto?comite_id=c1".to_string(),
        ]
    );
}

#[tokio::test]
async fn late_result_for_superseded_query_is_dropped() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    let mut state = mounted(&backend, &mut store).await;

    let role = state.team_roles[0].clone();
    let committee = state.committees[0].clone();
    let stale = flow::choose_team_role(&mut store, &mut state, &role);
    let current = flow::choose_committee(&mut store, &mut state, &committee);

    let current_result = flow::fetch_projects(&backend.client, &current).await;
    let stale_result = flow::fetch_projects(&backend.client, &stale).await;

    assert!(state.projects_loaded(current.ticket, current_result));
    assert!(!state.projects_loaded(stale.ticket, stale_result));
    assert_eq!(state.projects[0].project.id, "committee-c1-p1");
}

#[tokio::test]
async fn choosing_a_project_leads_past_the_gate() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let mut store = SessionMarkers::default();
    let mut state = mounted(&backend, &mut store).await;

    let role = state.team_roles[0].clone();
    let query = flow::choose_team_role(&mut store, &mut state, &role);
    let result = flow::fetch_projects(&backend.client, &query).await;
    state.projects_loaded(query.ticket, result);

    let project = &state.projects[0].project;
    assert_eq!(project.start_label(), "01/03/2024");
    assert_eq!(project.end_label(), "-");

    let next = flow::choose_project(&mut store, &project.id);
    assert_eq!(next, DASHBOARD_PATH);

    let gate = client::session::check_gate(&backend.client, &mut store, DASHBOARD_PATH).await;
    assert_eq!(gate.decision(), shared_types::GateDecision::RenderShell);
}
