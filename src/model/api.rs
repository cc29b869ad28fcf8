use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Response body of every create endpoint.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct IdDto {
    pub id: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MessageDto {
    pub message: String,
}
