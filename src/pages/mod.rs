//! Entity pages shown in the content area.

mod orders_page;
mod products_page;

pub use orders_page::OrdersPage;
pub use products_page::ProductsPage;
