use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Value};
use shared_types::ClientConfig;

/// Password the mock accepts for any email.
pub const GOOD_PASSWORD: &str = "secret";

/// Mutable fixture state behind the mock backend.
#[derive(Debug, Default)]
pub struct MockState {
    /// Role of the live session; `None` means signed out.
    pub role: Option<String>,
    /// Role granted by a successful login.
    pub login_role: String,
    pub fail_committees: bool,
    /// `/auth/logout` answers 500 and leaves the session alive.
    pub fail_logout: bool,
    /// Raw 200 body sent by verify-session instead of the role envelope.
    pub verify_body: Option<&'static str>,
    pub verify_delay: Option<Duration>,
    /// Applied to each of the three membership listings.
    pub listing_delay: Option<Duration>,
    /// Every request as `METHOD /path?query`, query percent-decoded.
    pub requests: Vec<String>,
    /// Last JSON body sent to a roster endpoint.
    pub roster_body: Option<Value>,
}

impl MockState {
    pub fn signed_in(role: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            login_role: role.to_string(),
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self {
            login_role: "user".to_string(),
            ..Self::default()
        }
    }
}

type Shared = Arc<Mutex<MockState>>;

/// A running mock of the GPDI API plus a client pointed at it.
pub struct MockBackend {
    state: Shared,
    pub client: ApiClient,
}

impl MockBackend {
    pub async fn start(initial: MockState) -> Self {
        let state: Shared = Arc::new(Mutex::new(initial));
        let router = mock_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock backend stopped");
        });

        let client = ApiClient::new(&test_config(format!("http://{addr}")))
            .expect("Failed to build API client");
        Self { state, client }
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("Mock state poisoned")
    }

    pub fn requests(&self) -> Vec<String> {
        self.state().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }
}

pub fn test_config(base_url: String) -> ClientConfig {
    ClientConfig {
        api_base_url: base_url,
        request_timeout_secs: 2,
        ..ClientConfig::default()
    }
}

/// Client whose backend refuses every connection.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a port");
    let addr = listener.local_addr().expect("Reserved port has no address");
    drop(listener);
    ApiClient::new(&test_config(format!("http://{addr}"))).expect("Failed to build API client")
}

fn mock_router(state: Shared) -> Router {
    Router::new()
        .route("/auth/verify-session", get(verify_session))
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
        .route("/usuario/informacion", get(profile))
        .route("/usuario/listar-equipo-proyecto", get(team_roles))
        .route("/usuario/listar-comite-proyecto", get(committees_or_projects))
        .route("/usuario/listar-proyecto-rol-proyecto/{id}", get(role_projects))
        .route("/usuario/obtenerUsuarios", get(users))
        .route("/curso", get(courses))
        .route("/estudiante", get(students))
        .route("/{resource}/{id}/{action}", patch(mutate))
        .route("/clase/{id}", get(class_detail))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

async fn record_request(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let target = urlencoding::decode(&target)
        .map(|t| t.into_owned())
        .unwrap_or(target);
    state
        .lock()
        .expect("Mock state poisoned")
        .requests
        .push(format!("{} {}", req.method(), target));
    next.run(req).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

fn listing_delay(state: &Shared) -> Option<Duration> {
    state.lock().expect("Mock state poisoned").listing_delay
}

async fn verify_session(State(state): State<Shared>) -> Response {
    let (role, body, delay) = {
        let state = state.lock().expect("Mock state poisoned");
        (state.role.clone(), state.verify_body, state.verify_delay)
    };
    pause(delay).await;
    if let Some(body) = body {
        return (StatusCode::OK, body).into_response();
    }
    match role {
        Some(role) => Json(json!({ "data": { "role": role } })).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Sesion no valida"),
    }
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body["password"] == GOOD_PASSWORD {
        let mut state = state.lock().expect("Mock state poisoned");
        state.role = Some(state.login_role.clone());
        Json(json!({ "message": "Login exitoso" })).into_response()
    } else {
        error(StatusCode::UNAUTHORIZED, "Credenciales incorrectas")
    }
}

async fn logout(State(state): State<Shared>) -> Response {
    let mut state = state.lock().expect("Mock state poisoned");
    if state.fail_logout {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error al cerrar sesion");
    }
    state.role = None;
    Json(json!({ "message": "Sesion cerrada" })).into_response()
}

async fn profile(State(state): State<Shared>) -> Response {
    pause(listing_delay(&state)).await;
    let role = state.lock().expect("Mock state poisoned").role.clone();
    Json(json!({
        "data": { "name": "Ana Lopez", "email": "ana@gpdi.edu", "role": role }
    }))
    .into_response()
}

async fn team_roles(State(state): State<Shared>) -> Json<Value> {
    pause(listing_delay(&state)).await;
    Json(json!({ "data": [{ "id": "r1", "nombre": "Developer" }, { "id": 2, "nombre": "Tester" }] }))
}

fn assignments(prefix: &str) -> Value {
    json!({
        "data": [
            { "proyecto_id": {
                "_id": format!("{prefix}-p1"),
                "nombre": "Control de asistencia",
                "descripcion": "Registro biometrico",
                "fechaInicio": "2024-03-01T00:00:00.000Z",
                "fechaFin": null
            } }
        ]
    })
}

async fn committees_or_projects(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(id) = params.get("comite_id") {
        return Json(assignments(&format!("committee-{id}"))).into_response();
    }
    pause(listing_delay(&state)).await;
    if state.lock().expect("Mock state poisoned").fail_committees {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error al listar comites");
    }
    Json(json!({ "data": [{ "id": "c1", "nombre": "Etica" }] })).into_response()
}

async fn role_projects(Path(id): Path<String>) -> Json<Value> {
    Json(assignments(&format!("role-{id}")))
}

async fn users() -> Json<Value> {
    Json(json!({
        "data": [
            { "_id": "u1", "name": "Ana Lopez", "email": "ana@gpdi.edu", "active": true, "createdAt": "2024-01-05T10:00:00Z" },
            { "_id": "u2", "name": "Luis Perez", "email": "luis@gpdi.edu", "active": false }
        ]
    }))
}

async fn courses(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = [
        json!({ "_id": "k1", "name": "Matematica", "active": true }),
        json!({ "_id": "k2", "name": "Historia", "active": false }),
    ];
    let active_only = params.get("active").map(String::as_str) == Some("true");
    let data: Vec<Value> = all
        .into_iter()
        .filter(|c| !active_only || c["active"] == true)
        .collect();
    Json(json!({ "data": data }))
}

async fn students() -> Json<Value> {
    // The list endpoint may omit `data` entirely when there is nothing to show.
    Json(json!({ "message": "Sin resultados" }))
}

async fn mutate(
    State(state): State<Shared>,
    Path((resource, id, action)): Path<(String, String, String)>,
    body: Bytes,
) -> Response {
    match (resource.as_str(), action.as_str()) {
        ("curso", "activar" | "desactivar") if id == "k1" || id == "k2" => {
            Json(json!({ "message": "Actualizado" })).into_response()
        }
        ("curso", _) => error(StatusCode::NOT_FOUND, "Curso no encontrado"),
        ("clase", "agregar-estudiante" | "quitar-estudiante") => {
            state.lock().expect("Mock state poisoned").roster_body = serde_json::from_slice(&body).ok();
            Json(json!({ "message": "Actualizado" })).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, "Ruta no encontrada"),
    }
}

async fn class_detail(Path(id): Path<String>) -> Json<Value> {
    // Answered without the usual envelope.
    Json(json!({
        "_id": id,
        "name": "Quinto A",
        "active": true,
        "general_schedule": [
            { "_id": "g1", "name": "Mañana", "day_of_week": "Lunes",
              "time": [{ "start_time": "08:00", "end_time": "10:00" }] }
        ],
        "students": [
            { "studen_id": { "_id": "s1", "name": "Carla", "code": "A-01" } }
        ]
    }))
}
