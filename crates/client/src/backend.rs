use shared_types::{AppError, Committee, ProjectAssignment, ProjectSource, SessionInfo, TeamRole, UserProfile};

use crate::ApiClient;

/// The backend calls the navigation flows depend on.
///
/// [`ApiClient`] is the real implementation; flow tests substitute an
/// in-memory one.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn verify_session(&self) -> Result<SessionInfo, AppError>;
    async fn logout(&self) -> Result<(), AppError>;
    async fn profile(&self) -> Result<UserProfile, AppError>;
    async fn team_roles(&self) -> Result<Vec<TeamRole>, AppError>;
    async fn committees(&self) -> Result<Vec<Committee>, AppError>;
    async fn projects(&self, source: &ProjectSource) -> Result<Vec<ProjectAssignment>, AppError>;
}

impl Backend for ApiClient {
    async fn verify_session(&self) -> Result<SessionInfo, AppError> {
        ApiClient::verify_session(self).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        ApiClient::logout(self).await
    }

    async fn profile(&self) -> Result<UserProfile, AppError> {
        ApiClient::profile(self).await
    }

    async fn team_roles(&self) -> Result<Vec<TeamRole>, AppError> {
        ApiClient::team_roles(self).await
    }

    async fn committees(&self) -> Result<Vec<Committee>, AppError> {
        ApiClient::committees(self).await
    }

    async fn projects(&self, source: &ProjectSource) -> Result<Vec<ProjectAssignment>, AppError> {
        ApiClient::projects(self, source).await
    }
}
