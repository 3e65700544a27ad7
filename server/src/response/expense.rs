use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use application::transfer::ExpenseDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CreatedExpenseResponse {
    id: Uuid,
}

impl IntoResponse for CreatedExpenseResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    id: Uuid,
    description: String,
    amount: Decimal,
    date: Date,
    category: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<ExpenseDto> for ExpenseResponse {
    fn from(value: ExpenseDto) -> Self {
        Self {
            id: value.id,
            description: value.description,
            amount: value.amount,
            date: value.date,
            category: value.category,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl IntoResponse for ExpenseResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct ExpensePresenter;

impl Exhaust<Uuid> for ExpensePresenter {
    type To = CreatedExpenseResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedExpenseResponse { id: input }
    }
}

impl Exhaust<Option<ExpenseDto>> for ExpensePresenter {
    type To = Option<ExpenseResponse>;
    fn emit(&self, input: Option<ExpenseDto>) -> Self::To {
        input.map(ExpenseResponse::from)
    }
}

impl Exhaust<Vec<ExpenseDto>> for ExpensePresenter {
    type To = axum::Json<Vec<ExpenseResponse>>;
    fn emit(&self, input: Vec<ExpenseDto>) -> Self::To {
        axum::Json(input.into_iter().map(ExpenseResponse::from).collect())
    }
}

impl Exhaust<Option<()>> for ExpensePresenter {
    type To = Option<axum::http::StatusCode>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input.map(|()| axum::http::StatusCode::NO_CONTENT)
    }
}
