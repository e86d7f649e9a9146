//! Service (sellable prestation) data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: Uuid,
    /// Internal reference code.
    #[serde(rename = "ref")]
    #[sqlx(rename = "ref")]
    pub reference: String,
    pub label: String,
    /// Whether the service is offered.
    pub state: bool,
    pub description: Option<String>,
    pub duration: i32,
    pub duration_unit: String,
    pub note: Option<String>,
    pub tags: Option<String>,
    pub price: f64,
    /// VAT rate in percent.
    pub vat: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 255, message = "Reference is required"))]
    #[serde(rename = "ref")]
    pub reference: String,
    #[validate(length(min = 1, max = 255, message = "Label is required"))]
    pub label: String,
    #[serde(default = "default_state")]
    pub state: bool,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: i32,
    #[validate(length(min = 1, message = "Duration unit is required"))]
    pub duration_unit: String,
    pub note: Option<String>,
    pub tags: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 0, max = 100, message = "VAT must be between 0 and 100"))]
    pub vat: i32,
}

fn default_state() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 255, message = "Reference must not be empty"))]
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Label must not be empty"))]
    pub label: Option<String>,
    pub state: Option<bool>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i32>,
    pub duration_unit: Option<String>,
    pub note: Option<String>,
    pub tags: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, max = 100, message = "VAT must be between 0 and 100"))]
    pub vat: Option<i32>,
}
