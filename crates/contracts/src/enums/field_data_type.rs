use serde::{Deserialize, Serialize};

/// Тип данных пользовательского поля (определяет валидацию и отрисовку)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDataType {
    Text,
    Number,
    Email,
    Phone,
    Select,
    Date,
    Checkbox,
}

impl FieldDataType {
    pub fn code(&self) -> &'static str {
        match self {
            FieldDataType::Text => "text",
            FieldDataType::Number => "number",
            FieldDataType::Email => "email",
            FieldDataType::Phone => "phone",
            FieldDataType::Select => "select",
            FieldDataType::Date => "date",
            FieldDataType::Checkbox => "checkbox",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldDataType::Text => "Текст",
            FieldDataType::Number => "Число",
            FieldDataType::Email => "Email",
            FieldDataType::Phone => "Телефон",
            FieldDataType::Select => "Список",
            FieldDataType::Date => "Дата",
            FieldDataType::Checkbox => "Флажок",
        }
    }

    pub fn all() -> Vec<FieldDataType> {
        vec![
            FieldDataType::Text,
            FieldDataType::Number,
            FieldDataType::Email,
            FieldDataType::Phone,
            FieldDataType::Select,
            FieldDataType::Date,
            FieldDataType::Checkbox,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    /// Поле имеет смысл только с набором вариантов
    pub fn uses_options(&self) -> bool {
        matches!(self, FieldDataType::Select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&FieldDataType::Checkbox).unwrap(),
            "\"checkbox\""
        );
        let parsed: FieldDataType = serde_json::from_str("\"phone\"").unwrap();
        assert_eq!(parsed, FieldDataType::Phone);
        for data_type in FieldDataType::all() {
            assert_eq!(FieldDataType::from_code(data_type.code()), Some(data_type));
        }
        assert_eq!(FieldDataType::from_code("textarea"), None);
        assert!(FieldDataType::Select.uses_options());
        assert!(!FieldDataType::Date.uses_options());
    }
}
