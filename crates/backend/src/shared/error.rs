use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::enums::EntityType;
use serde_json::json;
use thiserror::Error;

/// Ошибки реестра пользовательских полей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    #[error("Field '{id}' is already registered for entity type '{entity_type}'")]
    DuplicateFieldId { entity_type: EntityType, id: String },

    #[error("Invalid field payload: {0}")]
    InvalidPayload(String),
}

impl RegistryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::InvalidEntityType(_) | RegistryError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            RegistryError::DuplicateFieldId { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Разбор типа сущности из строки (путь запроса и т.п.)
pub fn parse_entity_type(code: &str) -> Result<EntityType, RegistryError> {
    code.parse::<EntityType>()
        .map_err(|_| RegistryError::InvalidEntityType(code.to_string()))
}
