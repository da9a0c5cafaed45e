//! Planning error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Errors surfaced by planner operations.
///
/// None of these are fatal; the caller corrects the input and re-invokes
/// the same operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error("{}", session_not_found_message(.0.as_ref()))]
    SessionNotFound(Option<SessionId>),

    #[error("Invalid value '{value}' for {field}. Allowed values: {}", .allowed.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Error parsing requirements: {0}. Please use start_project_planning instead.")]
    MalformedPayload(String),

    #[error("No active planning sessions. Please run start_project_planning first.")]
    NoActiveSession,

    #[error("Session store failure: {0}")]
    Infrastructure(String),
}

fn session_not_found_message(id: Option<&SessionId>) -> String {
    match id {
        Some(id) => format!(
            "Planning session '{}' not found. Please start over with start_project_planning.",
            id
        ),
        None => "No planning session found. Please start with start_project_planning.".to_string(),
    }
}

impl PlanningError {
    /// Creates an invalid enum value error for a field.
    pub fn invalid_enum(
        field: &'static str,
        value: impl Into<String>,
        allowed: Vec<&'static str>,
    ) -> Self {
        PlanningError::InvalidEnumValue {
            field,
            value: value.into(),
            allowed,
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanningError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            PlanningError::InvalidEnumValue { .. } => ErrorCode::InvalidEnumValue,
            PlanningError::MalformedPayload(_) => ErrorCode::MalformedPayload,
            PlanningError::NoActiveSession => ErrorCode::NoActiveSession,
            PlanningError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for PlanningError {
    fn from(err: DomainError) -> Self {
        PlanningError::Infrastructure(err.to_string())
    }
}
