use serde::Serialize;

use application::transfer::CustomerDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    customer_name: String,
    customer_phone: String,
    rental_count: i64,
}

impl From<CustomerDto> for CustomerResponse {
    fn from(value: CustomerDto) -> Self {
        Self {
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            rental_count: value.rental_count,
        }
    }
}

pub struct CustomerPresenter;

impl Exhaust<Vec<CustomerDto>> for CustomerPresenter {
    type To = axum::Json<Vec<CustomerResponse>>;
    fn emit(&self, input: Vec<CustomerDto>) -> Self::To {
        axum::Json(input.into_iter().map(CustomerResponse::from).collect())
    }
}
