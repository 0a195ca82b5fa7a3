//! Restaurant domain entity.

use crate::RestaurantId;
use serde::{Deserialize, Serialize};

/// A restaurant record.
///
/// Owned by the persistent store; this system only reads it. The `kind`
/// attribute (cuisine/establishment type) serializes as `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
}
