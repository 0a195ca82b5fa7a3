//! Result type aliases for Mesa.

use crate::MesaError;

/// A specialized `Result` type for Mesa operations.
pub type MesaResult<T> = Result<T, MesaError>;
