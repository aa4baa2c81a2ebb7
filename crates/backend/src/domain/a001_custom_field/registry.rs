use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use contracts::domain::a001_custom_field::aggregate::{CustomField, CustomFieldDto};
use contracts::enums::EntityType;

use crate::shared::error::RegistryError;

/// Реестр пользовательских полей.
///
/// Хранит одну упорядоченную последовательность полей всех типов сущностей.
/// Последовательность только дополняется, удаление возможно лишь целиком
/// по типу сущности. Каждая операция выполняется под одной блокировкой.
pub struct CustomFieldRegistry {
    fields: Mutex<Vec<CustomField>>,
    reject_duplicate_ids: AtomicBool,
}

impl CustomFieldRegistry {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(Vec::new()),
            reject_duplicate_ids: AtomicBool::new(false),
        }
    }

    /// Реестр, отклоняющий повторный `id` в рамках одного типа сущности
    pub fn with_duplicate_check() -> Self {
        let registry = Self::new();
        registry.set_reject_duplicate_ids(true);
        registry
    }

    pub fn set_reject_duplicate_ids(&self, enabled: bool) {
        self.reject_duplicate_ids.store(enabled, Ordering::Relaxed);
    }

    pub fn rejects_duplicate_ids(&self) -> bool {
        self.reject_duplicate_ids.load(Ordering::Relaxed)
    }

    // Операции короткие и не оставляют Vec в промежуточном состоянии
    fn lock(&self) -> MutexGuard<'_, Vec<CustomField>> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Добавляет поле в конец последовательности.
    /// Тип сущности из аргумента всегда перекрывает тип из конфигурации поля.
    pub fn add_field(
        &self,
        entity_type: EntityType,
        config: CustomFieldDto,
    ) -> Result<(), RegistryError> {
        let field = config.into_field(entity_type);
        let mut fields = self.lock();

        if self.rejects_duplicate_ids()
            && fields
                .iter()
                .any(|f| f.entity_type == entity_type && f.id == field.id)
        {
            return Err(RegistryError::DuplicateFieldId {
                entity_type,
                id: field.id,
            });
        }

        fields.push(field);
        Ok(())
    }

    /// Снимок активных полей типа сущности в порядке добавления
    pub fn get_fields(&self, entity_type: EntityType) -> Vec<CustomField> {
        self.lock()
            .iter()
            .filter(|f| f.entity_type == entity_type)
            .cloned()
            .collect()
    }

    /// Удаляет все поля типа сущности, возвращает количество удалённых
    pub fn reset_fields(&self, entity_type: EntityType) -> usize {
        let mut fields = self.lock();
        let before = fields.len();
        fields.retain(|f| f.entity_type != entity_type);
        before - fields.len()
    }

    pub fn count(&self, entity_type: EntityType) -> usize {
        self.lock()
            .iter()
            .filter(|f| f.entity_type == entity_type)
            .count()
    }
}

impl Default for CustomFieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::FieldDataType;
    use std::sync::Arc;

    fn dto(id: &str, label: &str) -> CustomFieldDto {
        CustomFieldDto {
            id: id.into(),
            name: None,
            label: label.into(),
            data_type: FieldDataType::Text,
            is_required: false,
            default_value: None,
            options: None,
            entity_type: None,
        }
    }

    fn ids(fields: &[CustomField]) -> Vec<&str> {
        fields.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_starts_empty() {
        let registry = CustomFieldRegistry::new();
        for entity_type in EntityType::all() {
            assert!(registry.get_fields(entity_type).is_empty());
            assert_eq!(registry.count(entity_type), 0);
        }
    }

    #[test]
    fn test_add_then_get() {
        let registry = CustomFieldRegistry::new();
        let config = dto("cf-1", "Delivery window");
        registry
            .add_field(EntityType::Order, config.clone())
            .unwrap();

        let fields = registry.get_fields(EntityType::Order);
        assert_eq!(fields, vec![config.into_field(EntityType::Order)]);
        assert!(registry.get_fields(EntityType::Customer).is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let registry = CustomFieldRegistry::new();
        registry.add_field(EntityType::Order, dto("f1", "First")).unwrap();
        registry
            .add_field(EntityType::Customer, dto("c1", "Loyalty"))
            .unwrap();
        registry.add_field(EntityType::Order, dto("f2", "Second")).unwrap();

        assert_eq!(ids(&registry.get_fields(EntityType::Order)), ["f1", "f2"]);
    }

    #[test]
    fn test_entity_isolation() {
        let registry = CustomFieldRegistry::new();
        registry
            .add_field(EntityType::Inventory, dto("bin", "Bin"))
            .unwrap();
        registry
            .add_field(EntityType::Inventory, dto("lot", "Lot"))
            .unwrap();

        assert_eq!(registry.count(EntityType::Inventory), 2);
        assert!(registry.get_fields(EntityType::Order).is_empty());
        assert!(registry.get_fields(EntityType::Customer).is_empty());
    }

    #[test]
    fn test_config_entity_type_is_overridden() {
        let registry = CustomFieldRegistry::new();
        let mut config = dto("cf-1", "Region");
        config.entity_type = Some(EntityType::Customer);
        registry.add_field(EntityType::Order, config).unwrap();

        assert!(registry.get_fields(EntityType::Customer).is_empty());
        assert_eq!(
            registry.get_fields(EntityType::Order)[0].entity_type,
            EntityType::Order
        );
    }

    #[test]
    fn test_reset_is_scoped_to_entity_type() {
        let registry = CustomFieldRegistry::new();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();
        registry.add_field(EntityType::Customer, dto("c1", "B")).unwrap();
        registry.add_field(EntityType::Order, dto("o2", "C")).unwrap();
        registry.add_field(EntityType::Customer, dto("c2", "D")).unwrap();

        let customers_before = registry.get_fields(EntityType::Customer);
        assert_eq!(registry.reset_fields(EntityType::Order), 2);

        assert!(registry.get_fields(EntityType::Order).is_empty());
        assert_eq!(registry.get_fields(EntityType::Customer), customers_before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let registry = CustomFieldRegistry::new();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();
        registry.add_field(EntityType::Inventory, dto("i1", "B")).unwrap();

        assert_eq!(registry.reset_fields(EntityType::Order), 1);
        let after_first = registry.get_fields(EntityType::Inventory);
        assert_eq!(registry.reset_fields(EntityType::Order), 0);

        assert!(registry.get_fields(EntityType::Order).is_empty());
        assert_eq!(registry.get_fields(EntityType::Inventory), after_first);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = CustomFieldRegistry::new();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();

        let mut snapshot = registry.get_fields(EntityType::Order);
        snapshot[0].label = "Changed".into();
        snapshot.clear();

        let fields = registry.get_fields(EntityType::Order);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label, "A");
    }

    #[test]
    fn test_duplicates_accepted_by_default() {
        let registry = CustomFieldRegistry::new();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();
        assert_eq!(registry.count(EntityType::Order), 2);
    }

    #[test]
    fn test_duplicate_check_rejects_within_entity_type() {
        let registry = CustomFieldRegistry::with_duplicate_check();
        registry.add_field(EntityType::Order, dto("o1", "A")).unwrap();

        let err = registry
            .add_field(EntityType::Order, dto("o1", "Again"))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateFieldId {
                entity_type: EntityType::Order,
                id: "o1".into(),
            }
        );
        assert_eq!(ids(&registry.get_fields(EntityType::Order)), ["o1"]);
        assert_eq!(registry.get_fields(EntityType::Order)[0].label, "A");

        // Тот же id для другой сущности допустим
        registry.add_field(EntityType::Customer, dto("o1", "A")).unwrap();
        assert_eq!(registry.count(EntityType::Customer), 1);

        // После сброса id снова свободен
        registry.reset_fields(EntityType::Order);
        registry.add_field(EntityType::Order, dto("o1", "B")).unwrap();
    }

    #[test]
    fn test_concurrent_adds() {
        let registry = Arc::new(CustomFieldRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        registry
                            .add_field(EntityType::Inventory, dto(&format!("{t}-{i}"), "x"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.count(EntityType::Inventory), 400);
    }
}
