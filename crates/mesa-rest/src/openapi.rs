//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{HealthResponse, ReadinessResponse};
use mesa_core::{ErrorResponse, FieldError};
use mesa_service::{ListRestaurantsRequest, RestaurantResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Mesa API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mesa API",
        version = "1.0.0",
        description = "Filtered, paginated restaurant listings with a Redis-backed cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::restaurant_controller::list_restaurants,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            ListRestaurantsRequest,
            RestaurantResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant listing endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
