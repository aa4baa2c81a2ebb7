use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, Json};
use contracts::domain::a001_custom_field::aggregate::{CustomField, CustomFieldDto};
use contracts::enums::{EntityType, FieldDataType};
use serde_json::json;

use crate::domain::a001_custom_field::service;
use crate::shared::error::{parse_entity_type, RegistryError};

/// GET /api/custom_fields/:entity_type
pub async fn list(Path(entity_type): Path<String>) -> Result<Json<Vec<CustomField>>, RegistryError> {
    let entity_type = parse_entity_type(&entity_type)?;
    Ok(Json(service::get_fields(entity_type)))
}

/// POST /api/custom_fields/:entity_type
///
/// Тип сущности проверяется раньше тела запроса.
pub async fn add(
    Path(entity_type): Path<String>,
    payload: Result<Json<CustomFieldDto>, JsonRejection>,
) -> Result<Json<serde_json::Value>, RegistryError> {
    let entity_type = parse_entity_type(&entity_type)?;
    let Json(dto) = payload.map_err(|e| RegistryError::InvalidPayload(e.body_text()))?;
    let id = service::add_field(entity_type, dto)?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/custom_fields/:entity_type
pub async fn reset(Path(entity_type): Path<String>) -> Result<Json<serde_json::Value>, RegistryError> {
    let entity_type = parse_entity_type(&entity_type)?;
    let removed = service::reset_fields(entity_type);
    Ok(Json(json!({ "removed": removed })))
}

/// GET /api/custom_fields/meta/entity_types
pub async fn entity_types() -> Json<serde_json::Value> {
    let items: Vec<_> = EntityType::all()
        .into_iter()
        .map(|t| json!({ "code": t.code(), "name": t.display_name() }))
        .collect();
    Json(json!(items))
}

/// GET /api/custom_fields/meta/data_types
pub async fn data_types() -> Json<serde_json::Value> {
    let items: Vec<_> = FieldDataType::all()
        .into_iter()
        .map(|t| json!({ "code": t.code(), "name": t.display_name() }))
        .collect();
    Json(json!(items))
}
