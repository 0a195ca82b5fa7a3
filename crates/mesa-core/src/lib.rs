//! # Mesa Core
//!
//! Core types, traits, and error definitions for Mesa.
//! This crate provides the foundational abstractions used across all layers
//! of the restaurant directory: the domain entity, the filter value object,
//! pagination types, and the unified error type.

pub mod error;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod restaurant;
pub mod result;
pub mod validation;

pub use error::*;
pub use filter::*;
pub use id::*;
pub use pagination::*;
pub use restaurant::*;
pub use result::*;
pub use validation::*;
