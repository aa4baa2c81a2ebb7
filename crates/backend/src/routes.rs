use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CUSTOM FIELDS
        // ========================================
        .route(
            "/api/custom_fields/meta/entity_types",
            get(handlers::a001_custom_field::entity_types),
        )
        .route(
            "/api/custom_fields/meta/data_types",
            get(handlers::a001_custom_field::data_types),
        )
        .route(
            "/api/custom_fields/:entity_type",
            get(handlers::a001_custom_field::list)
                .post(handlers::a001_custom_field::add)
                .delete(handlers::a001_custom_field::reset),
        )
        // ========================================
        // ORDERS
        // ========================================
        .route("/api/order/total", post(handlers::order_total::calculate))
}
