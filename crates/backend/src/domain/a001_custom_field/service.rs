use contracts::domain::a001_custom_field::aggregate::{CustomField, CustomFieldDto};
use contracts::enums::EntityType;
use once_cell::sync::Lazy;

use super::registry::CustomFieldRegistry;
use crate::shared::config::RegistryConfig;
use crate::shared::error::RegistryError;

/// Единый реестр пользовательских полей процесса.
/// Создаётся пустым при первом обращении, живёт до завершения процесса.
static CUSTOM_FIELDS: Lazy<CustomFieldRegistry> = Lazy::new(CustomFieldRegistry::new);

/// Применение настроек реестра (вызывается один раз при старте)
pub fn configure(config: &RegistryConfig) {
    CUSTOM_FIELDS.set_reject_duplicate_ids(config.reject_duplicate_ids);
    tracing::info!(
        "Custom field registry configured (reject_duplicate_ids = {})",
        config.reject_duplicate_ids
    );
}

/// Регистрация нового поля для типа сущности
pub fn add_field(entity_type: EntityType, config: CustomFieldDto) -> Result<String, RegistryError> {
    let id = config.id.clone();
    if config.data_type.uses_options() && config.options.as_ref().map_or(true, Vec::is_empty) {
        tracing::warn!("Custom field '{}' is a select without options", id);
    }
    match CUSTOM_FIELDS.add_field(entity_type, config) {
        Ok(()) => {
            tracing::info!(
                "Custom field '{}' added to {} ({} active)",
                id,
                entity_type,
                CUSTOM_FIELDS.count(entity_type)
            );
            Ok(id)
        }
        Err(e) => {
            tracing::warn!("Failed to add custom field: {}", e);
            Err(e)
        }
    }
}

/// Получение полей типа сущности
pub fn get_fields(entity_type: EntityType) -> Vec<CustomField> {
    CUSTOM_FIELDS.get_fields(entity_type)
}

/// Сброс всех полей типа сущности
pub fn reset_fields(entity_type: EntityType) -> usize {
    let removed = CUSTOM_FIELDS.reset_fields(entity_type);
    tracing::info!("Custom fields reset for {}: {} removed", entity_type, removed);
    removed
}
