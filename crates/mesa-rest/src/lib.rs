//! # Mesa REST
//!
//! REST API layer using Axum for Mesa.
//! Provides the restaurant listing endpoint, health checks, and Swagger UI.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
