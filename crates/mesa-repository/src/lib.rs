//! # Mesa Repository
//!
//! Data access layer for Mesa using SQLx.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn RestaurantRepository>   (domain interface)
//! MySqlRestaurantRepository            (SQLx / MySQL)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::MySqlRestaurantRepository;
pub use pool::*;
pub use traits::*;
