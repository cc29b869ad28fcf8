//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Conversion into a DTO is the single
//! place where a record's identifier becomes the public `id` string, so it is applied
//! through [`IntoDto`] to every record returned to a caller, nested ones included.

pub mod crew;
pub mod diagnostics;
pub mod event;
pub mod marine;
pub mod member;
pub mod seed;

/// Conversion of a domain model into its API representation.
///
/// Implemented for `Option<T>` and `Vec<T>` as well, so absent records and record
/// lists go through exactly the same conversion as single records.
pub trait IntoDto {
    type Dto;

    fn into_dto(self) -> Self::Dto;
}

impl<T: IntoDto> IntoDto for Option<T> {
    type Dto = Option<T::Dto>;

    fn into_dto(self) -> Self::Dto {
        self.map(IntoDto::into_dto)
    }
}

impl<T: IntoDto> IntoDto for Vec<T> {
    type Dto = Vec<T::Dto>;

    fn into_dto(self) -> Self::Dto {
        self.into_iter().map(IntoDto::into_dto).collect()
    }
}

/// Trims a required text field, rejecting it when nothing is left.
pub(crate) fn require_text(
    field: &'static str,
    value: String,
) -> Result<String, crate::server::error::validation::ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::server::error::validation::ValidationError::EmptyField(field));
    }

    Ok(trimmed.to_string())
}
