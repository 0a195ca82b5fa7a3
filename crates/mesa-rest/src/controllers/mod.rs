//! REST API controllers.

pub mod health_controller;
pub mod restaurant_controller;

pub use health_controller::*;
