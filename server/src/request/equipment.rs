use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateEquipmentDto, DeleteEquipmentDto, GetEquipmentDto, UpdateEquipmentDto,
};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateEquipmentRequest {
    name: String,
    quantity: Option<i32>,
    description: Option<String>,
    base_price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEquipmentRequest {
    name: Option<String>,
    quantity: Option<i32>,
    description: Option<String>,
    base_price: Option<Decimal>,
}

#[derive(Debug)]
pub struct GetEquipmentRequest {
    id: Uuid,
}

impl GetEquipmentRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteEquipmentRequest {
    id: Uuid,
}

impl DeleteEquipmentRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct EquipmentTransformer;

impl Intake<CreateEquipmentRequest> for EquipmentTransformer {
    type To = CreateEquipmentDto;
    fn emit(&self, input: CreateEquipmentRequest) -> Self::To {
        CreateEquipmentDto {
            name: input.name,
            quantity: input.quantity.unwrap_or(1),
            description: input.description,
            base_price: input.base_price.unwrap_or_default(),
        }
    }
}

impl Intake<(Uuid, UpdateEquipmentRequest)> for EquipmentTransformer {
    type To = UpdateEquipmentDto;
    fn emit(&self, input: (Uuid, UpdateEquipmentRequest)) -> Self::To {
        let (id, input) = input;
        UpdateEquipmentDto {
            id,
            name: input.name,
            quantity: input.quantity,
            description: input.description,
            base_price: input.base_price,
        }
    }
}

impl Intake<GetEquipmentRequest> for EquipmentTransformer {
    type To = GetEquipmentDto;
    fn emit(&self, input: GetEquipmentRequest) -> Self::To {
        GetEquipmentDto { id: input.id }
    }
}

impl Intake<DeleteEquipmentRequest> for EquipmentTransformer {
    type To = DeleteEquipmentDto;
    fn emit(&self, input: DeleteEquipmentRequest) -> Self::To {
        DeleteEquipmentDto { id: input.id }
    }
}
