//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for restaurant IDs.
///
/// IDs are store-assigned (auto-increment); this type never generates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct RestaurantId(pub i64);

impl RestaurantId {
    /// Creates a restaurant ID from a raw database value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RestaurantId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RestaurantId> for i64 {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}
