//! Data transfer objects for the service layer.

mod restaurant_dto;

pub use restaurant_dto::*;
