//! Seed records for the demo pages and a generator for larger order sets.

use crate::entities::order::{Order, OrderStatus, PaymentStatus};
use crate::entities::product::Product;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Bob", "Alice", "Charlie", "Eva", "Frank", "Grace", "Henry", "Ivy", "Liam",
    "Mia", "Noah", "Olivia", "Paul", "Quinn",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Wilson", "Brown", "Davis", "Green", "Miller", "Lee", "Ford", "Chen",
    "Garcia", "Martin", "Clark", "Lopez", "Young", "Hall",
];

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Product 1".to_string(),
            price: 99.99,
            category: "Electronics".to_string(),
            stock: 100,
        },
        Product {
            id: 2,
            name: "Product 2".to_string(),
            price: 149.99,
            category: "Clothing".to_string(),
            stock: 50,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn order(
    id: u32,
    customer_name: &str,
    total: f64,
    order_status: OrderStatus,
    payment_status: PaymentStatus,
    order_date: NaiveDate,
) -> Order {
    Order {
        id,
        order_number: format!("ORD-{:03}", id),
        customer_name: customer_name.to_string(),
        total,
        order_status,
        payment_status,
        order_date,
    }
}

pub fn seed_orders() -> Vec<Order> {
    use OrderStatus::*;
    use PaymentStatus::*;

    vec![
        order(1, "John Doe", 299.99, Delivered, Paid, date(2025, 4, 5)),
        order(2, "Jane Smith", 159.99, Processing, Paid, date(2025, 4, 5)),
        order(3, "Bob Wilson", 499.99, Pending, Unpaid, date(2025, 4, 4)),
        order(4, "Alice Brown", 89.99, Shipped, Paid, date(2025, 4, 4)),
        order(5, "Charlie Davis", 199.99, Cancelled, Refunded, date(2025, 4, 3)),
        order(6, "Eva Green", 399.99, Delivered, Paid, date(2025, 4, 3)),
        order(7, "Frank Miller", 749.99, Processing, Paid, date(2025, 4, 2)),
        order(8, "Grace Lee", 129.99, Pending, Unpaid, date(2025, 4, 2)),
        order(9, "Henry Ford", 899.99, Shipped, Paid, date(2025, 4, 1)),
        order(10, "Ivy Chen", 259.99, Cancelled, Refunded, date(2025, 4, 1)),
    ]
}

/// Payment status consistent with a fulfilment status.
fn payment_for(status: OrderStatus, rng: &mut StdRng) -> PaymentStatus {
    match status {
        OrderStatus::Cancelled => PaymentStatus::Refunded,
        OrderStatus::Pending if rng.gen_bool(0.7) => PaymentStatus::Unpaid,
        _ => PaymentStatus::Paid,
    }
}

/// Generates `count` orders numbered after `start_id`, dated backwards from
/// the last seed date. The same seed always yields the same orders.
pub fn generate_orders(count: usize, start_id: u32, seed: u64) -> Vec<Order> {
    let mut rng = StdRng::seed_from_u64(seed);
    let newest = date(2025, 4, 1);

    (0..count)
        .map(|i| {
            let id = start_id + i as u32 + 1;
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Guest");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Customer");
            let cents: u32 = rng.gen_range(999..=249_999);
            let status = OrderStatus::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(OrderStatus::Pending);
            let payment = payment_for(status, &mut rng);
            let days_back = rng.gen_range(0..=90);

            order(
                id,
                &format!("{} {}", first, last),
                f64::from(cents) / 100.0,
                status,
                payment,
                newest - Duration::days(days_back),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(seed_products().len(), 2);
        assert_eq!(seed_orders().len(), 10);
        assert_eq!(seed_orders()[9].order_number, "ORD-010");
    }

    #[test]
    fn test_generated_orders_are_deterministic() {
        let a = generate_orders(25, 10, 42);
        let b = generate_orders(25, 10, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        assert_eq!(a[0].id, 11);
        assert_eq!(a[0].order_number, "ORD-011");
        assert_eq!(a[24].id, 35);
    }

    #[test]
    fn test_generated_orders_are_consistent() {
        for order in generate_orders(200, 0, 7) {
            assert!(order.total >= 9.99 && order.total <= 2499.99);
            if order.order_status == OrderStatus::Cancelled {
                assert_eq!(order.payment_status, PaymentStatus::Refunded);
            }
            assert!(order.order_date <= date(2025, 4, 1));
        }
    }
}
