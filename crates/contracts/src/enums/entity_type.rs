use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Типы сущностей, которые можно расширять пользовательскими полями
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Inventory,
    Customer,
    Order,
}

impl EntityType {
    /// Получить код сущности (используется во внешних контрактах)
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::Inventory => "inventory",
            EntityType::Customer => "customer",
            EntityType::Order => "order",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityType::Inventory => "Склад",
            EntityType::Customer => "Клиенты",
            EntityType::Order => "Заказы",
        }
    }

    /// Получить все типы сущностей
    pub fn all() -> Vec<EntityType> {
        vec![EntityType::Inventory, EntityType::Customer, EntityType::Order]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inventory" => Some(EntityType::Inventory),
            "customer" => Some(EntityType::Customer),
            "order" => Some(EntityType::Order),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::from_code(s).ok_or_else(|| format!("Unknown entity type: {}", s))
    }
}
