use crate::entities::product::required;
use crate::entities::Record;
use crate::traits::{Entity, FormError, FormModel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Refunded,
}

/// Chip colors as (text, background) hex strings.
pub type ChipColors = (&'static str, &'static str);

const CHIP_AMBER: ChipColors = ("#B54708", "#FFFAEB");
const CHIP_BLUE: ChipColors = ("#026AA2", "#F0F9FF");
const CHIP_GREEN: ChipColors = ("#027A48", "#ECFDF3");
const CHIP_RED: ChipColors = ("#B42318", "#FEF3F2");

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn chip_colors(self) -> ChipColors {
        match self {
            OrderStatus::Pending => CHIP_AMBER,
            OrderStatus::Processing => CHIP_BLUE,
            OrderStatus::Shipped | OrderStatus::Delivered => CHIP_GREEN,
            OrderStatus::Cancelled => CHIP_RED,
        }
    }
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] =
        [PaymentStatus::Paid, PaymentStatus::Unpaid, PaymentStatus::Refunded];

    pub fn key(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn chip_colors(self) -> ChipColors {
        match self {
            PaymentStatus::Paid => CHIP_GREEN,
            PaymentStatus::Unpaid => CHIP_AMBER,
            PaymentStatus::Refunded => CHIP_RED,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OrderStatus {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::InvalidChoice {
                field: "Order Status",
                value: s.to_string(),
            })
    }
}

impl FromStr for PaymentStatus {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::InvalidChoice {
                field: "Payment Status",
                value: s.to_string(),
            })
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub customer_name: String,
    pub total: f64,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: NaiveDate,
}

impl Order {
    /// Case-insensitive match on order number or customer name.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.order_number.to_lowercase().contains(&query)
            || self.customer_name.to_lowercase().contains(&query)
    }

    /// Checks the `orderStatus` and `paymentStatus` filter values.
    ///
    /// Filters on other fields are ignored.
    pub fn matches_filters(&self, filters: &BTreeMap<String, String>) -> bool {
        filters.iter().all(|(field, value)| match field.as_str() {
            "orderStatus" => self.order_status.key() == value.as_str(),
            "paymentStatus" => self.payment_status.key() == value.as_str(),
            _ => true,
        })
    }
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Order {
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Form buffers behind the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_number: String,
    pub customer_name: String,
    pub total: String,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            customer_name: String::new(),
            total: String::new(),
            order_status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
        }
    }
}

impl FormModel for Order {
    type Draft = OrderDraft;

    fn to_draft(item: Option<&Self>) -> OrderDraft {
        match item {
            Some(o) => OrderDraft {
                order_number: o.order_number.clone(),
                customer_name: o.customer_name.clone(),
                total: format!("{:.2}", o.total),
                order_status: o.order_status,
                payment_status: o.payment_status,
            },
            None => OrderDraft::default(),
        }
    }

    /// New orders are dated today; edits keep their original date.
    fn from_draft(draft: &OrderDraft, original: Option<&Self>) -> Result<Self, FormError> {
        let order_number = required("Order Number", &draft.order_number)?;
        let customer_name = required("Customer Name", &draft.customer_name)?;
        let total = required("Total", &draft.total)?;
        let total: f64 = total
            .parse()
            .ok()
            .filter(|t: &f64| t.is_finite() && *t >= 0.0)
            .ok_or_else(|| FormError::InvalidNumber {
                field: "Total",
                value: total.to_string(),
            })?;

        Ok(Order {
            id: original.map(|o| o.id).unwrap_or(0),
            order_number: order_number.to_string(),
            customer_name: customer_name.to_string(),
            total,
            order_status: draft.order_status,
            payment_status: draft.payment_status,
            order_date: original
                .map(|o| o.order_date)
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    }
}
