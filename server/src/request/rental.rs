use rust_decimal::Decimal;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{
    CreateRentalDto, DeleteRentalDto, GetCustomerRentalsDto, GetRentalDto, NewRentalItemDto,
    RentalScheduleDto, UpdateRentalDto,
};
use kernel::prelude::entity::{RentalSource, StoredStatus};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct RentalItemRequest {
    equipment_id: Uuid,
    instance_number: i32,
}

impl From<RentalItemRequest> for NewRentalItemDto {
    fn from(value: RentalItemRequest) -> Self {
        NewRentalItemDto {
            equipment_id: value.equipment_id,
            instance_number: value.instance_number,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    equipment_list: Vec<RentalItemRequest>,
    #[serde(with = "time::serde::rfc3339")]
    start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_date: OffsetDateTime,
    customer_name: String,
    customer_phone: String,
    #[serde(default)]
    needs_delivery: bool,
    delivery_address: Option<String>,
    rental_price: Decimal,
    delivery_price: Option<Decimal>,
    delivery_costs: Option<Decimal>,
    source: RentalSource,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRentalRequest {
    equipment_list: Option<Vec<RentalItemRequest>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    end_date: Option<OffsetDateTime>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    needs_delivery: Option<bool>,
    delivery_address: Option<String>,
    rental_price: Option<Decimal>,
    delivery_price: Option<Decimal>,
    delivery_costs: Option<Decimal>,
    source: Option<RentalSource>,
    comment: Option<String>,
    status: Option<StoredStatus>,
}

/// Period filter of the occupancy chart. Values arrive as raw strings so
/// that an unparseable bound degrades to no filter instead of a 400.
#[derive(Debug, Deserialize)]
pub struct GetRentalScheduleRequest {
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug)]
pub struct GetRentalRequest {
    id: Uuid,
}

impl GetRentalRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteRentalRequest {
    id: Uuid,
}

impl DeleteRentalRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetCustomerRentalsRequest {
    phone: String,
}

impl GetCustomerRentalsRequest {
    pub fn new(phone: String) -> Self {
        Self { phone }
    }
}

pub struct RentalTransformer;

impl Intake<CreateRentalRequest> for RentalTransformer {
    type To = CreateRentalDto;
    fn emit(&self, input: CreateRentalRequest) -> Self::To {
        CreateRentalDto {
            items: input
                .equipment_list
                .into_iter()
                .map(NewRentalItemDto::from)
                .collect(),
            start_date: input.start_date,
            end_date: input.end_date,
            customer_name: input.customer_name,
            customer_phone: input.customer_phone,
            needs_delivery: input.needs_delivery,
            delivery_address: input.delivery_address,
            rental_price: input.rental_price,
            delivery_price: input.delivery_price,
            delivery_costs: input.delivery_costs,
            source: input.source,
            comment: input.comment,
        }
    }
}

impl Intake<(Uuid, UpdateRentalRequest)> for RentalTransformer {
    type To = UpdateRentalDto;
    fn emit(&self, input: (Uuid, UpdateRentalRequest)) -> Self::To {
        let (id, input) = input;
        UpdateRentalDto {
            id,
            items: input
                .equipment_list
                .map(|items| items.into_iter().map(NewRentalItemDto::from).collect()),
            start_date: input.start_date,
            end_date: input.end_date,
            customer_name: input.customer_name,
            customer_phone: input.customer_phone,
            needs_delivery: input.needs_delivery,
            delivery_address: input.delivery_address,
            rental_price: input.rental_price,
            delivery_price: input.delivery_price,
            delivery_costs: input.delivery_costs,
            source: input.source,
            comment: input.comment,
            status: input.status,
        }
    }
}

impl Intake<GetRentalScheduleRequest> for RentalTransformer {
    type To = RentalScheduleDto;
    fn emit(&self, input: GetRentalScheduleRequest) -> Self::To {
        let parse = |value: Option<String>| {
            value.and_then(|value| OffsetDateTime::parse(&value, &Rfc3339).ok())
        };
        RentalScheduleDto {
            start_date: parse(input.start_date),
            end_date: parse(input.end_date),
        }
    }
}

impl Intake<GetRentalRequest> for RentalTransformer {
    type To = GetRentalDto;
    fn emit(&self, input: GetRentalRequest) -> Self::To {
        GetRentalDto { id: input.id }
    }
}

impl Intake<DeleteRentalRequest> for RentalTransformer {
    type To = DeleteRentalDto;
    fn emit(&self, input: DeleteRentalRequest) -> Self::To {
        DeleteRentalDto { id: input.id }
    }
}

impl Intake<GetCustomerRentalsRequest> for RentalTransformer {
    type To = GetCustomerRentalsDto;
    fn emit(&self, input: GetCustomerRentalsRequest) -> Self::To {
        GetCustomerRentalsDto { phone: input.phone }
    }
}
