pub mod entity_type;
pub mod field_data_type;

pub use entity_type::EntityType;
pub use field_data_type::FieldDataType;
