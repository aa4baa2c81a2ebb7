use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, FieldDataType};

// ============================================================================
// Value types
// ============================================================================

/// Вариант выбора для поля типа `select`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Значение по умолчанию: строка, число или флаг
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefaultValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

// ============================================================================
// Aggregate
// ============================================================================

/// Пользовательское поле, расширяющее сущность (склад, клиент, заказ)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub label: String,
    pub data_type: FieldDataType,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldDefaultValue>,

    /// Актуально только для `dataType = select`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,

    pub entity_type: EntityType,
}

// ============================================================================
// DTO
// ============================================================================

/// Конфигурация поля, приходящая от клиента.
/// `entityType` необязателен: при регистрации всегда берётся тип из запроса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDto {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub label: String,
    pub data_type: FieldDataType,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldDefaultValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
}

impl CustomFieldDto {
    /// Собрать поле для указанного типа сущности
    pub fn into_field(self, entity_type: EntityType) -> CustomField {
        CustomField {
            id: self.id,
            name: self.name,
            label: self.label,
            data_type: self.data_type,
            is_required: self.is_required,
            default_value: self.default_value,
            options: self.options,
            entity_type,
        }
    }
}
