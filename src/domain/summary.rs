use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::errors::DomainError;
use super::order::{Discount, DiscountType, Item, Order, OrderId};

const ORDER_DATE_FORMAT: &str = "%d/%m/%Y";
const MONEY_SCALE: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub order_date: String,
    pub total_order_value: BigDecimal,
    pub average_unit_price: BigDecimal,
    pub unit_count: u64,
    pub customer_state: String,
}

/// Derives the summary view of a single order.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderSummaryCalculator;

impl OrderSummaryCalculator {
    pub fn summarize(&self, order: &Order) -> Result<OrderSummary, DomainError> {
        let items = match order.items.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => {
                log::warn!("order {} has no items", order.order_id);
                return Err(DomainError::NotFound);
            }
        };

        let total = total_order_value(items, order.discounts.as_deref().unwrap_or_default())?;
        let average = average_unit_price(items)?;
        let unit_count = items.iter().map(|i| u64::from(i.quantity)).sum();

        let Some(order_datetime) = order.order_datetime.as_deref() else {
            log::warn!("order {} has no order_datetime", order.order_id);
            return Err(DomainError::NotFound);
        };
        let order_date = format_order_date(order_datetime)?;

        let Some(state) = order.customer_state() else {
            log::warn!("order {} has no shipping state", order.order_id);
            return Err(DomainError::NotFound);
        };

        Ok(OrderSummary {
            order_id: order.order_id.clone(),
            order_date,
            total_order_value: round_money(&total),
            average_unit_price: round_money(&average),
            unit_count,
            customer_state: state.to_string(),
        })
    }
}

/// Sum of line totals, adjusted by the first discount only.
///
/// A `PERCENT` discount yields `raw * value / 100`, not `raw * (1 - value / 100)`.
/// Any other type is subtracted as a fixed amount.
fn total_order_value(items: &[Item], discounts: &[Discount]) -> Result<BigDecimal, DomainError> {
    let mut raw = BigDecimal::from(0);
    for item in items {
        raw += BigDecimal::from(item.quantity) * decimal(item.unit_price)?;
    }

    let Some(discount) = discounts.first() else {
        return Ok(raw);
    };
    let value = decimal(discount.value)?;
    Ok(match discount.kind {
        DiscountType::Percent => raw * value / BigDecimal::from(100),
        DiscountType::Dollar | DiscountType::Other(_) => raw - value,
    })
}

/// Mean of the unit prices, not weighted by quantity.
fn average_unit_price(items: &[Item]) -> Result<BigDecimal, DomainError> {
    let mut sum = BigDecimal::from(0);
    for item in items {
        sum += decimal(item.unit_price)?;
    }
    Ok(sum / BigDecimal::from(items.len() as u64))
}

/// Converts through the shortest decimal representation, so `118.27` stays
/// `118.27` instead of its binary expansion.
fn decimal(value: f64) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(&value.to_string())
        .map_err(|e| DomainError::MalformedData(format!("invalid amount {}: {}", value, e)))
}

fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
}

/// Reformats an ISO-8601 timestamp as `DD/MM/YYYY`, keeping the timestamp's
/// own offset.
pub fn format_order_date(raw: &str) -> Result<String, DomainError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.format(ORDER_DATE_FORMAT).to_string());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt.format(ORDER_DATE_FORMAT).to_string());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format(ORDER_DATE_FORMAT).to_string())
        .map_err(|e| DomainError::MalformedData(format!("invalid order_datetime '{}': {}", raw, e)))
}
