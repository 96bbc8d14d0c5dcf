use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Request payload for creating or updating a movement.
///
/// Every field is optional at the deserialization layer so that a missing
/// required field is reported by [`MovementPayload::validate`] with the
/// proper error class instead of a generic parse failure. The serde aliases
/// accept the field names used by the legacy frontend.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MovementPayload {
    #[serde(alias = "tipo")]
    pub kind: Option<String>,

    #[serde(alias = "data")]
    pub date: Option<String>,

    #[serde(alias = "produto")]
    pub product: Option<String>,

    #[serde(alias = "quantidade")]
    #[schema(value_type = Option<f64>)]
    pub quantity: Option<Value>,

    #[serde(alias = "destino")]
    pub destination: Option<String>,
}

/// A payload that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovement {
    pub kind: String,
    pub date: String,
    pub product: String,
    pub quantity: f64,
    pub destination: Option<String>,
}

/// Validation failure classes for a movement payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// A required field is absent or empty.
    MissingField,
    /// `quantity` is not a number or is not strictly positive.
    InvalidQuantity,
}

impl MovementPayload {
    /// Apply the validation rules in order: required fields first, then the
    /// quantity check. `destination` is the only nullable field.
    pub fn validate(&self) -> Result<NewMovement, PayloadError> {
        let kind = non_empty(&self.kind).ok_or(PayloadError::MissingField)?;
        let date = non_empty(&self.date).ok_or(PayloadError::MissingField)?;
        let product = non_empty(&self.product).ok_or(PayloadError::MissingField)?;
        let quantity = self.quantity.as_ref().ok_or(PayloadError::MissingField)?;

        let quantity = quantity
            .as_f64()
            .filter(|q| *q > 0.0)
            .ok_or(PayloadError::InvalidQuantity)?;

        Ok(NewMovement {
            kind,
            date,
            product,
            quantity,
            destination: self.destination.clone(),
        })
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(String::from)
}

/// Query parameters for the list endpoint: an inclusive date range, both
/// ends optional, compared as `YYYY-MM-DD` strings.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListMovementsQuery {
    #[serde(alias = "dataInicio")]
    pub start_date: Option<String>,

    #[serde(alias = "dataFim")]
    pub end_date: Option<String>,
}
