//! Developer - Request/Response DTOs

use chrono::NaiveDate;
use devhub::{Developer, DeveloperChanges, NewDeveloper};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Create Developer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(example = "John Doe")]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[schema(example = "john.doe@example.com")]
    pub email: String,

    #[schema(example = "1990-01-01")]
    pub date_of_birth: NaiveDate,
}

/// Update Developer request (only supplied fields change)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeveloperRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

/// Developer response
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl From<CreateDeveloperRequest> for NewDeveloper {
    fn from(req: CreateDeveloperRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            date_of_birth: req.date_of_birth,
        }
    }
}

impl From<UpdateDeveloperRequest> for DeveloperChanges {
    fn from(req: UpdateDeveloperRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            date_of_birth: req.date_of_birth,
        }
    }
}

impl From<Developer> for DeveloperResponse {
    fn from(developer: Developer) -> Self {
        Self {
            id: developer.id,
            name: developer.name,
            email: developer.email,
            date_of_birth: developer.date_of_birth,
        }
    }
}
