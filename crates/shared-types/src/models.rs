use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::role::Role;

// ── Wire envelope ──────────────────────────────────────────────────

/// Every successful backend payload is wrapped as `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}

/// Some item endpoints answer with the bare object instead of an envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MaybeEnveloped<T> {
    Enveloped(Envelope<T>),
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Enveloped(env) => env.data,
            MaybeEnveloped::Bare(value) => value,
        }
    }
}

/// Error body; `message` is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepts ids sent either as strings or as numbers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ── Session ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    #[serde(default)]
    pub role: String,
}

impl SessionInfo {
    /// `None` when the backend answered without a usable role.
    pub fn role(&self) -> Option<Role> {
        Role::from_label(&self.role)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    pub fn role(&self) -> Option<Role> {
        Role::from_label(&self.role)
    }

    /// Up to two uppercase initials for the avatar.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

// ── Login ──────────────────────────────────────────────────────────

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Email is not valid.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

fn required_email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !value.trim().to_string().validate_email() {
        return Err(ValidationError::new("email").with_message(INVALID_EMAIL_MESSAGE.into()));
    }
    Ok(())
}

/// Text shown under the login form after a rejected attempt: the backend's
/// message when it sent one, otherwise a fixed hint.
pub fn login_failure_message(err: &crate::AppError) -> String {
    if err.is_transport() || err.message.trim().is_empty() {
        LOGIN_FAILED_MESSAGE.to_string()
    } else {
        err.message.clone()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub password: String,
}

// ── Project selection ──────────────────────────────────────────────

/// A team role the member holds inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRole {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

/// A committee the member belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Committee {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

/// First letter shown in the membership avatar.
pub fn avatar_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    #[serde(rename = "_id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "fechaInicio", default)]
    pub start_date: Option<String>,
    #[serde(rename = "fechaFin", default)]
    pub end_date: Option<String>,
}

impl ProjectSummary {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn start_label(&self) -> String {
        date_label(self.start_date.as_deref())
    }

    pub fn end_label(&self) -> String {
        date_label(self.end_date.as_deref())
    }
}

/// One membership row from the project listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectAssignment {
    #[serde(rename = "proyecto_id")]
    pub project: ProjectSummary,
}

/// Format an ISO-8601 timestamp or date as `dd/mm/yyyy`; unknown input is
/// shown as-is and missing input as `-`.
pub fn date_label(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
