use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::{
    Activation, AppError, ClassDetail, ClientConfig, Committee, Envelope, ListQuery, LoginRequest,
    MaybeEnveloped, ProjectAssignment, ProjectSource, ResourceKind, ResourceRecord, RosterAction,
    RosterChange, SessionInfo, TeamRole, UserProfile,
};

use crate::error_convert::{check_status, from_reqwest};

/// Thin typed wrapper over the backend's REST API.
///
/// Every request is credentialed and carries the configured timeout.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Two clients are interchangeable when they target the same backend with
/// the same timeout.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.timeout == other.timeout
    }
}

#[derive(Deserialize)]
struct ListBody {
    #[serde(default)]
    data: Option<Vec<ResourceRecord>>,
}

async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let response = check_status(response).await?;
    let envelope: Envelope<T> = response.json().await.map_err(from_reqwest)?;
    Ok(envelope.data)
}

async fn parse_status_only(response: Response) -> Result<(), AppError> {
    check_status(response).await.map(|_| ())
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .timeout(self.timeout);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        builder.send().await.map_err(from_reqwest)
    }

    // ── Auth ───────────────────────────────────────────────────────

    /// `GET /auth/verify-session`.
    #[tracing::instrument(skip(self))]
    pub async fn verify_session(&self) -> Result<SessionInfo, AppError> {
        let response = self.send(self.request(Method::GET, "/auth/verify-session")).await?;
        parse_data(response).await
    }

    /// `POST /auth/login`.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<(), AppError> {
        let response = self
            .send(self.request(Method::POST, "/auth/login").json(request))
            .await?;
        parse_status_only(response).await
    }

    /// `GET /auth/logout`.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AppError> {
        let response = self.send(self.request(Method::GET, "/auth/logout")).await?;
        parse_status_only(response).await
    }

    // ── Profile and memberships ────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserProfile, AppError> {
        let response = self.send(self.request(Method::GET, "/usuario/informacion")).await?;
        parse_data(response).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn team_roles(&self) -> Result<Vec<TeamRole>, AppError> {
        let response = self
            .send(self.request(Method::GET, "/usuario/listar-equipo-proyecto"))
            .await?;
        parse_data(response).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn committees(&self) -> Result<Vec<Committee>, AppError> {
        let response = self
            .send(self.request(Method::GET, "/usuario/listar-comite-proyecto"))
            .await?;
        parse_data(response).await
    }

    /// Projects reachable through a team role or a committee.
    #[tracing::instrument(skip(self))]
    pub async fn projects(&self, source: &ProjectSource) -> Result<Vec<ProjectAssignment>, AppError> {
        let builder = match source {
            ProjectSource::TeamRole { id } => self.request(
                Method::GET,
                &format!("/usuario/listar-proyecto-rol-proyecto/{}", segment(id)),
            ),
            ProjectSource::Committee { id } => self
                .request(Method::GET, "/usuario/listar-comite-proyecto")
                .query(&[("comite_id", id.as_str())]),
        };
        let response = self.send(builder).await?;
        parse_data(response).await
    }

    // ── Resources ──────────────────────────────────────────────────

    /// One page of `kind`'s list. A body without `data` is an empty page.
    #[tracing::instrument(skip(self, query), fields(page = query.page))]
    pub async fn list_resources(
        &self,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> Result<Vec<ResourceRecord>, AppError> {
        let builder = self
            .request(Method::GET, kind.list_path())
            .query(&query.to_params(kind));
        let response = check_status(self.send(builder).await?).await?;
        let body: ListBody = response.json().await.map_err(from_reqwest)?;
        Ok(body.data.unwrap_or_default())
    }

    /// `PATCH {base}/:id/activar|desactivar`.
    #[tracing::instrument(skip(self))]
    pub async fn set_activation(
        &self,
        kind: ResourceKind,
        id: &str,
        activation: Activation,
    ) -> Result<(), AppError> {
        let path = format!("{}/{}/{}", kind.api_base(), segment(id), activation.path_suffix());
        let response = self
            .send(self.request(Method::PATCH, &path).json(&serde_json::json!({})))
            .await?;
        parse_status_only(response).await
    }

    /// `GET /clase/:id`; accepts the class with or without an envelope.
    #[tracing::instrument(skip(self))]
    pub async fn class_detail(&self, id: &str) -> Result<ClassDetail, AppError> {
        let path = format!("{}/{}", ResourceKind::Classes.api_base(), segment(id));
        let response = check_status(self.send(self.request(Method::GET, &path)).await?).await?;
        let payload: MaybeEnveloped<ClassDetail> = response.json().await.map_err(from_reqwest)?;
        Ok(payload.into_inner())
    }

    /// Add or remove one student from a class roster.
    #[tracing::instrument(skip(self))]
    pub async fn change_roster(
        &self,
        class_id: &str,
        student_id: &str,
        action: RosterAction,
    ) -> Result<(), AppError> {
        let path = format!(
            "{}/{}/{}",
            ResourceKind::Classes.api_base(),
            segment(class_id),
            action.path_suffix()
        );
        let body = RosterChange {
            student_id: student_id.to_string(),
        };
        let response = self.send(self.request(Method::PATCH, &path).json(&body)).await?;
        parse_status_only(response).await
    }
}
