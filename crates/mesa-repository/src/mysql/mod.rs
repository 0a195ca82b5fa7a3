//! MySQL-backed repository implementations.

mod restaurant_repository;

pub use restaurant_repository::MySqlRestaurantRepository;
