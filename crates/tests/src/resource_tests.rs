use pretty_assertions::assert_eq;
use shared_types::{
    Activation, AppErrorKind, ListQuery, ResourceKind, RosterAction, DEFAULT_PAGE_SIZE,
};
use serde_json::json;

use crate::common::{MockBackend, MockState};

#[tokio::test]
async fn member_list_requests_only_active_records() {
    let backend = MockBackend::start(MockState::signed_in("user")).await;
    let query = ListQuery {
        search: "mat".into(),
        active_only: true,
        ..ListQuery::default()
    };

    let rows = backend
        .client
        .list_resources(ResourceKind::Courses, &query)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|r| r.is_active()));
    assert_eq!(
        backend.requests(),
        vec![format!(
            "GET /curso?limit={DEFAULT_PAGE_SIZE}&page=1&sort=createdAt&or[0][0][name][regex]=mat&active=true"
        )]
    );
}

#[tokio::test]
async fn privileged_list_includes_inactive_records() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    let rows = backend
        .client
        .list_resources(ResourceKind::Courses, &ListQuery::default())
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert!(!backend.requests()[0].contains("active=true"));
}

#[tokio::test]
async fn users_are_listed_and_searched_by_email_too() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;
    let query = ListQuery {
        search: "ana".into(),
        page: 2,
        ..ListQuery::default()
    };

    let rows = backend
        .client
        .list_resources(ResourceKind::Users, &query)
        .await
        .unwrap();

    let request = &backend.requests()[0];
    assert!(request.starts_with("GET /usuario/obtenerUsuarios?"));
    assert!(request.contains("page=2"));
    assert!(request.contains("or[0][1][email][regex]=ana"));
    assert_eq!(rows[0].id().as_deref(), Some("u1"));
}

#[tokio::test]
async fn list_without_data_is_an_empty_page() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    let rows = backend
        .client
        .list_resources(ResourceKind::Students, &ListQuery::default())
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn activation_patches_the_record() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    backend
        .client
        .set_activation(ResourceKind::Courses, "k2", Activation::Activate)
        .await
        .unwrap();
    backend
        .client
        .set_activation(ResourceKind::Courses, "k1", Activation::Deactivate)
        .await
        .unwrap();

    assert_eq!(
        backend.requests(),
        vec![
            "PATCH /curso/k2/activar".to_string(),
            "PATCH /curso/k1/desactivar".to_string(),
        ]
    );
}

#[tokio::test]
async fn activation_failure_carries_backend_message() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    let err = backend
        .client
        .set_activation(ResourceKind::Courses, "missing", Activation::Activate)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Curso no encontrado");
}

#[tokio::test]
async fn class_detail_accepts_a_bare_object() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    let class = backend.client.class_detail("c7").await.unwrap();

    assert_eq!(class.id, "c7");
    assert_eq!(class.general_schedule[0].time[0].start_time, "08:00");
    assert!(class.has_student("s1"));
    assert!(!class.has_student("s2"));
}

#[tokio::test]
async fn roster_changes_send_the_student_id() {
    let backend = MockBackend::start(MockState::signed_in("admin")).await;

    backend
        .client
        .change_roster("c7", "s2", RosterAction::Add)
        .await
        .unwrap();
    assert_eq!(backend.state().roster_body, Some(json!({ "studen_id": "s2" })));

    backend
        .client
        .change_roster("c7", "s1", RosterAction::Remove)
        .await
        .unwrap();
    assert_eq!(backend.state().roster_body, Some(json!({ "studen_id": "s1" })));

    assert_eq!(
        backend.requests(),
        vec![
            "PATCH /clase/c7/agregar-estudiante".to_string(),
            "PATCH /clase/c7/quitar-estudiante".to_string(),
        ]
    );
}
