//! # Mesa Service
//!
//! Business logic service layer for Mesa. Hosts the read-through cache and
//! the restaurant listing use case.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod restaurant_service;

pub use cache::*;
pub use dto::*;
pub use r#impl::*;
pub use restaurant_service::*;
