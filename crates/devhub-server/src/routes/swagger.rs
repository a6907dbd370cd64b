//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateDeveloperRequest, DeveloperResponse, UpdateDeveloperRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::developer::list_developers,
        super::developer::create_developer,
        super::developer::get_developer,
        super::developer::update_developer,
        super::developer::delete_developer,
    ),
    components(schemas(CreateDeveloperRequest, UpdateDeveloperRequest, DeveloperResponse)),
    tags(
        (name = "Developer", description = "Developer registry")
    ),
    info(
        title = "Devhub API",
        description = "Developer registry CRUD API"
    )
)]
pub struct ApiDoc;
