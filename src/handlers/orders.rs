use actix_web::{web, HttpResponse};
use bigdecimal::{BigDecimal, ToPrimitive};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::OrderId;
use crate::domain::summary::OrderSummary;
use crate::errors::AppError;
use crate::infrastructure::order_repo::JsonlOrderRepository;

pub type AppOrderService = OrderService<JsonlOrderRepository>;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryResponse {
    /// Identifier exactly as stored (string or number).
    #[schema(value_type = String)]
    pub order_id: OrderId,
    /// `DD/MM/YYYY`
    pub order_date: String,
    pub total_order_value: f64,
    pub average_unit_price: f64,
    pub unit_count: u64,
    pub customer_state: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(s: OrderSummary) -> Self {
        Self {
            order_id: s.order_id,
            order_date: s.order_date,
            total_order_value: money(&s.total_order_value),
            average_unit_price: money(&s.average_unit_price),
            unit_count: s.unit_count,
            customer_state: s.customer_state,
        }
    }
}

fn money(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns every record in the source file, as stored. Failures are returned
/// as an error payload with status 200.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders in file order, or an error payload"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.get_orders())
        .await
        .map_err(|e| blocking_failed(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /order/{id}
///
/// Returns the computed summary of the first order whose id equals `id`.
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order summary, or an error payload", body = OrderSummaryResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let summary = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| blocking_failed(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderSummaryResponse::from(summary)))
}

fn blocking_failed(msg: String) -> AppError {
    log::error!("blocking task failed: {}", msg);
    AppError::Internal(msg)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn summary_response_serializes_money_as_numbers() {
        let summary = OrderSummary {
            order_id: OrderId::Text("88948419".to_string()),
            order_date: "27/03/2022".to_string(),
            total_order_value: BigDecimal::from_str("120.55").unwrap(),
            average_unit_price: BigDecimal::from_str("93.99").unwrap(),
            unit_count: 12,
            customer_state: "New South Wales".to_string(),
        };

        let value = serde_json::to_value(OrderSummaryResponse::from(summary)).unwrap();

        assert_eq!(
            value,
            json!({
                "order_id": "88948419",
                "order_date": "27/03/2022",
                "total_order_value": 120.55,
                "average_unit_price": 93.99,
                "unit_count": 12,
                "customer_state": "New South Wales"
            })
        );
    }
}
