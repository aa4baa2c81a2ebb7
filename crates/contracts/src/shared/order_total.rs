use serde::{Deserialize, Serialize};

/// Строка заказа
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotal {
    pub total: f64,
}

/// Сумма заказа: количество * цена по всем строкам
pub fn calculate_order_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(|line| line.quantity * line.price).sum()
}
