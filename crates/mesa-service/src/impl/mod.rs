//! Service implementations.

mod restaurant_service_impl;

pub use restaurant_service_impl::RestaurantServiceImpl;
