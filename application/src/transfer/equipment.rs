use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructEquipment, Equipment, EquipmentInstance};

#[derive(Debug, Clone)]
pub struct EquipmentDto {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Equipment> for EquipmentDto {
    fn from(value: Equipment) -> Self {
        let DestructEquipment {
            id,
            name,
            quantity,
            description,
            base_price,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: *id.as_ref(),
            name: name.as_ref().clone(),
            quantity: *quantity.as_ref(),
            description: description.map(|description| description.as_ref().clone()),
            base_price: base_price.amount(),
            created_at: *created_at.as_ref(),
            updated_at: *updated_at.as_ref(),
        }
    }
}

/// One virtually expanded copy of an equipment unit, with its display name.
#[derive(Debug, Clone)]
pub struct EquipmentInstanceDto {
    pub equipment_id: Uuid,
    pub instance_number: i32,
    pub name: String,
}

impl EquipmentInstanceDto {
    pub fn new(instance: &EquipmentInstance, name: String) -> Self {
        Self {
            equipment_id: *instance.equipment_id().as_ref(),
            instance_number: *instance.instance_number().as_ref(),
            name,
        }
    }
}

pub struct GetEquipmentDto {
    pub id: Uuid,
}

pub struct CreateEquipmentDto {
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub base_price: Decimal,
}

pub struct UpdateEquipmentDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub base_price: Option<Decimal>,
}

pub struct DeleteEquipmentDto {
    pub id: Uuid,
}
