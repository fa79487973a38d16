//! Demo entity types and their in-memory data.

pub mod mock_data;
pub mod order;
pub mod product;
pub mod repository;

pub use order::{Order, OrderDraft, OrderStatus, PaymentStatus};
pub use product::{Product, ProductDraft};
pub use repository::MockRepository;

use crate::traits::Entity;

/// An entity with a numeric id the store assigns on insert.
pub trait Record: Entity<Id = u32> {
    fn set_id(&mut self, id: u32);
}
