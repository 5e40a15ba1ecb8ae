use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::de::string_or_number;
use super::sellers::Seller;

/// Customer who placed an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "string_or_number")]
    pub order_id: String,
    #[serde(default)]
    pub address: String,
    pub status: i32,
    pub price: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub user: OrderUser,
    /// ISO-8601 timestamp as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The slice of an order fulfilled by one seller (`/admin/get-all-orders`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrder {
    pub id: i64,
    pub seller: Seller,
    pub order: Order,
    #[serde(default)]
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub quantity: Vec<i64>,
}

/// Order lifecycle status, encoded as an integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Delivered,
    Canceled,
    Unknown,
}

impl OrderStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

impl From<i32> for OrderStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => OrderStatus::Pending,
            1 => OrderStatus::Processing,
            2 => OrderStatus::Shipping,
            3 => OrderStatus::Delivered,
            4 => OrderStatus::Canceled,
            _ => OrderStatus::Unknown,
        }
    }
}

impl Order {
    pub fn status(&self) -> OrderStatus {
        OrderStatus::from(self.status)
    }

    /// Parsed creation time, if the server sent one in a recognised format.
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.as_deref()?;

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// True when the order was created on `date`.
    ///
    /// Compares the calendar-day prefix of the raw timestamp, so it works even
    /// for timestamps chrono cannot parse.
    pub fn created_on(&self, date: NaiveDate) -> bool {
        let day = date.format("%Y-%m-%d").to_string();
        self.created_at
            .as_deref()
            .is_some_and(|raw| raw.starts_with(&day))
    }

    /// Human readable creation time, `—` when absent.
    pub fn created_display(&self) -> String {
        match (self.created_at_parsed(), self.created_at.as_deref()) {
            (Some(dt), _) => dt.format("%d %b %Y, %H:%M").to_string(),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => "—".to_string(),
        }
    }
}
