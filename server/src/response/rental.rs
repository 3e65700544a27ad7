use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::RentalDto;
use kernel::prelude::entity::{RentalSource, RentalStatus};

use crate::controller::Exhaust;
use crate::response::EquipmentInstanceResponse;

#[derive(Debug, Serialize)]
pub struct CreatedRentalResponse {
    id: Uuid,
}

impl IntoResponse for CreatedRentalResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: Uuid,
    equipment_list: Vec<EquipmentInstanceResponse>,
    #[serde(with = "time::serde::rfc3339")]
    start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_date: OffsetDateTime,
    customer_name: String,
    customer_phone: String,
    needs_delivery: bool,
    delivery_address: Option<String>,
    rental_price: Decimal,
    delivery_price: Decimal,
    delivery_costs: Decimal,
    source: RentalSource,
    comment: Option<String>,
    status: RentalStatus,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            equipment_list: value
                .equipment_list
                .into_iter()
                .map(EquipmentInstanceResponse::from)
                .collect(),
            start_date: value.start_date,
            end_date: value.end_date,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            needs_delivery: value.needs_delivery,
            delivery_address: value.delivery_address,
            rental_price: value.rental_price,
            delivery_price: value.delivery_price,
            delivery_costs: value.delivery_costs,
            source: value.source,
            comment: value.comment,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct RentalPresenter;

impl Exhaust<Uuid> for RentalPresenter {
    type To = CreatedRentalResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedRentalResponse { id: input }
    }
}

impl Exhaust<Option<RentalDto>> for RentalPresenter {
    type To = Option<RentalResponse>;
    fn emit(&self, input: Option<RentalDto>) -> Self::To {
        input.map(RentalResponse::from)
    }
}

impl Exhaust<Vec<RentalDto>> for RentalPresenter {
    type To = axum::Json<Vec<RentalResponse>>;
    fn emit(&self, input: Vec<RentalDto>) -> Self::To {
        axum::Json(input.into_iter().map(RentalResponse::from).collect())
    }
}

impl Exhaust<Option<()>> for RentalPresenter {
    type To = Option<axum::http::StatusCode>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input.map(|()| axum::http::StatusCode::NO_CONTENT)
    }
}
