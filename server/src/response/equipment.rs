use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{EquipmentDto, EquipmentInstanceDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CreatedEquipmentResponse {
    id: Uuid,
}

impl IntoResponse for CreatedEquipmentResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct EquipmentResponse {
    id: Uuid,
    name: String,
    quantity: i32,
    description: Option<String>,
    base_price: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<EquipmentDto> for EquipmentResponse {
    fn from(value: EquipmentDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            quantity: value.quantity,
            description: value.description,
            base_price: value.base_price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl IntoResponse for EquipmentResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct EquipmentInstanceResponse {
    equipment_id: Uuid,
    instance_number: i32,
    name: String,
}

impl From<EquipmentInstanceDto> for EquipmentInstanceResponse {
    fn from(value: EquipmentInstanceDto) -> Self {
        Self {
            equipment_id: value.equipment_id,
            instance_number: value.instance_number,
            name: value.name,
        }
    }
}

pub struct EquipmentPresenter;

impl Exhaust<Uuid> for EquipmentPresenter {
    type To = CreatedEquipmentResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedEquipmentResponse { id: input }
    }
}

impl Exhaust<Option<EquipmentDto>> for EquipmentPresenter {
    type To = Option<EquipmentResponse>;
    fn emit(&self, input: Option<EquipmentDto>) -> Self::To {
        input.map(EquipmentResponse::from)
    }
}

impl Exhaust<Vec<EquipmentDto>> for EquipmentPresenter {
    type To = axum::Json<Vec<EquipmentResponse>>;
    fn emit(&self, input: Vec<EquipmentDto>) -> Self::To {
        axum::Json(input.into_iter().map(EquipmentResponse::from).collect())
    }
}

impl Exhaust<Vec<EquipmentInstanceDto>> for EquipmentPresenter {
    type To = axum::Json<Vec<EquipmentInstanceResponse>>;
    fn emit(&self, input: Vec<EquipmentInstanceDto>) -> Self::To {
        axum::Json(
            input
                .into_iter()
                .map(EquipmentInstanceResponse::from)
                .collect(),
        )
    }
}

impl Exhaust<Option<()>> for EquipmentPresenter {
    type To = Option<axum::http::StatusCode>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input.map(|()| axum::http::StatusCode::NO_CONTENT)
    }
}
