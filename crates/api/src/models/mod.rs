//! Domain model types.
//!
//! Row types mapped straight from SQL results via `sqlx::FromRow`.
//! Request/response shapes live next to their handlers in `routes`.

pub mod catalog;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use catalog::{Category, Franchise};
pub use order::{Order, OrderItem};
pub use product::{Product, ProductDetail, SearchHit};
pub use review::Review;
pub use user::User;
