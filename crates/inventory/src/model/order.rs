use crate::model::ProductId;
use crate::order::OrderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of the stock movement an order represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Sale,
    Buy,
    Return,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Maps the wire discriminants `0..=2` onto the declared statuses.
impl TryFrom<i32> for OrderStatus {
    type Error = OrderError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderStatus::Pending),
            1 => Ok(OrderStatus::Completed),
            2 => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::Validation(format!(
                "invalid order status: {other}"
            ))),
        }
    }
}

/// Accepts a status name in any case (`completed`, `CANCELLED`) or its numeric discriminant.
impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<i32>() {
            return OrderStatus::try_from(value);
        }
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(OrderError::Validation(format!("invalid order status: {s}"))),
        }
    }
}

/// A stock movement of one product.
///
/// Orders are never deleted. Only `status` and `updated_at` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: OrderId,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(rename = "customerID", default)]
    pub customer_id: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// A pending order not yet stored. The store assigns the ID and timestamps.
    pub fn new(product_id: ProductId, order_type: OrderType, quantity: i64, price: f64) -> Self {
        Self {
            id: OrderId::default(),
            product_id,
            quantity,
            price,
            order_type,
            customer_id: 0,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            status: OrderStatus::Pending,
        }
    }

    pub fn for_customer(mut self, customer_id: u32) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}
