use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order identifier as it appears in the source file.
///
/// Feeds carry it either as a JSON string (`"88948419"`) or a number; lookups
/// always compare its integer value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl OrderId {
    /// Integer value of the id. Text ids are trimmed and must parse as a
    /// whole `i64`: `"0042"` is 42, but `"123abc"` has no value and matches
    /// nothing.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OrderId::Number(n) => Some(*n),
            OrderId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

/// Integer value of the `order_id` field of an undecoded record.
///
/// Same rules as [`OrderId::as_i64`]; a float id counts only when it is whole.
pub fn raw_order_id(record: &Value) -> Option<i64> {
    match record.get("order_id")? {
        Value::String(s) => OrderId::Text(s.clone()).as_i64(),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    }
}

/// The fields of a stored order that the summary reads. Anything else in the
/// record is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    #[serde(default)]
    pub order_datetime: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub discounts: Option<Vec<Discount>>,
}

impl Order {
    /// State of the shipping address, if the record carries one.
    pub fn customer_state(&self) -> Option<&str> {
        self.customer
            .as_ref()?
            .shipping_address
            .as_ref()?
            .state
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountType,
    pub value: f64,
}

/// Discount type. Unrecognised values are treated like a fixed amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DiscountType {
    Percent,
    Dollar,
    Other(String),
}

impl From<String> for DiscountType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PERCENT" => DiscountType::Percent,
            "DOLLAR" => DiscountType::Dollar,
            _ => DiscountType::Other(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_id_compares_as_integer() {
        assert_eq!(OrderId::Text("88948419".to_string()).as_i64(), Some(88948419));
        assert_eq!(OrderId::Text(" 0042 ".to_string()).as_i64(), Some(42));
        assert_eq!(OrderId::Number(7).as_i64(), Some(7));
        assert_eq!(OrderId::Text("abc".to_string()).as_i64(), None);
        assert_eq!(OrderId::Text("123abc".to_string()).as_i64(), None);
    }

    #[test]
    fn raw_order_id_reads_strings_and_numbers() {
        assert_eq!(raw_order_id(&json!({ "order_id": "88948419" })), Some(88948419));
        assert_eq!(raw_order_id(&json!({ "order_id": 42 })), Some(42));
        assert_eq!(raw_order_id(&json!({ "order_id": 42.0 })), Some(42));
        assert_eq!(raw_order_id(&json!({ "order_id": 42.5 })), None);
        assert_eq!(raw_order_id(&json!({ "order_id": null })), None);
        assert_eq!(raw_order_id(&json!({ "id": 42 })), None);
        assert_eq!(raw_order_id(&json!("42")), None);
    }

    #[test]
    fn decodes_the_fields_the_summary_reads() {
        let order: Order = serde_json::from_value(json!({
            "order_id": "1",
            "order_datetime": "2022-03-27T11:14:17Z",
            "customer": {
                "id": "07719092",
                "shipping_address": { "state": "Victoria", "postcode": "3000" }
            },
            "items": [{ "quantity": 1, "unit_price": 2.5, "product": { "title": "Tea" } }],
            "shipping_price": 0,
            "discounts": [{ "type": "COUPON", "value": 1, "priority": 1 }]
        }))
        .expect("valid order");

        assert_eq!(order.customer_state(), Some("Victoria"));
        assert_eq!(order.items.as_ref().expect("items")[0].unit_price, 2.5);
        assert_eq!(
            order.discounts.as_ref().expect("discounts")[0].kind,
            DiscountType::Other("COUPON".to_string())
        );
    }

    #[test]
    fn missing_optional_sections_decode_as_none() {
        let order: Order = serde_json::from_value(json!({ "order_id": 5 })).expect("valid order");
        assert!(order.items.is_none());
        assert!(order.discounts.is_none());
        assert_eq!(order.customer_state(), None);
    }
}
