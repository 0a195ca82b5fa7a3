//! Restaurant-related DTOs.

use mesa_core::{PageRequest, PagedResult, Restaurant, RestaurantFilter, RestaurantId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to list restaurants with optional filters and pagination.
///
/// The `kind` filter is exposed as `type` on the wire. Missing pagination
/// fields fall back to page 1 with 10 items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ListRestaurantsRequest {
    #[validate(length(max = 255, message = "Name filter cannot exceed 255 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(max = 255, message = "Type filter cannot exceed 255 characters"))]
    pub kind: Option<String>,

    #[validate(length(max = 255, message = "City filter cannot exceed 255 characters"))]
    pub city: Option<String>,

    pub page_number: Option<u32>,

    pub page_size: Option<u32>,
}

impl ListRestaurantsRequest {
    /// Builds the filter specification from the request.
    #[must_use]
    pub fn filter(&self) -> RestaurantFilter {
        RestaurantFilter::new(self.name.clone(), self.kind.clone(), self.city.clone())
    }

    /// Builds the page request, applying defaults and clamping.
    #[must_use]
    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}

/// Restaurant response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: RestaurantId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            kind: restaurant.kind,
            address: restaurant.address,
            city: restaurant.city,
            region: restaurant.region,
            country: restaurant.country,
        }
    }
}

/// Restaurant listing response with pagination metadata.
pub type RestaurantListResponse = PagedResult<RestaurantResponse>;
