use checkin_auth::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Identity resolved by the front end at login, to be bound into a credential.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    #[validate(
        length(min = 1, message = "firstName is required"),
        custom(function = "validate_name_segment", message = "firstName must not contain ':'")
    )]
    #[schema(example = "Ann")]
    pub first_name: String,

    #[validate(
        length(min = 1, message = "lastName is required"),
        custom(function = "validate_name_segment", message = "lastName must not contain ':'")
    )]
    #[schema(example = "Lee")]
    pub last_name: String,

    #[validate(custom(
        function = "validate_role",
        message = "role must be one of admin, teamlead, volunteer"
    ))]
    #[schema(example = "admin")]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueTokenResponse {
    pub token: String,
}

/// Body of the verify endpoint. A missing token is treated like an invalid one.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VerifyTokenRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// The credential payload is colon-delimited.
fn validate_name_segment(value: &str) -> Result<(), ValidationError> {
    if value.contains(':') {
        return Err(ValidationError::new("colon_in_name"));
    }
    Ok(())
}

fn validate_role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Role>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_role"))
}
