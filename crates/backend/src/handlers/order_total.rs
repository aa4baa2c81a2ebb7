use axum::Json;
use contracts::shared::order_total::{calculate_order_total, OrderLine, OrderTotal};

/// POST /api/order/total
pub async fn calculate(Json(lines): Json<Vec<OrderLine>>) -> Json<OrderTotal> {
    let total = calculate_order_total(&lines);
    tracing::debug!("Order total for {} lines: {}", lines.len(), total);
    Json(OrderTotal { total })
}
