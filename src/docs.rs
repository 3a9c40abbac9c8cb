//! Generated OpenAPI document for the dorm API.

use utoipa::OpenApi;

use crate::handlers::dorm;
use crate::models::{Dorm, DormInput, DormWithRooms, Room};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dorm Management API",
        description = "REST API for managing dorms and their rooms"
    ),
    paths(
        dorm::create_dorm,
        dorm::list_dorms,
        dorm::list_dorms_with_rooms,
        dorm::get_dorm,
        dorm::update_dorm,
        dorm::delete_dorm,
    ),
    components(schemas(Dorm, Room, DormWithRooms, DormInput)),
    tags((name = "dorms", description = "Dorm management operations"))
)]
pub struct ApiDoc;
