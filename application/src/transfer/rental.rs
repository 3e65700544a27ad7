use std::collections::HashMap;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{
    DestructRental, Equipment, EquipmentInstance, EquipmentName, OwnedQuantity, Rental,
    RentalSource, RentalStatus, StoredStatus,
};

use crate::transfer::EquipmentInstanceDto;

/// Name shown when a rental references equipment that no longer exists.
static UNKNOWN_EQUIPMENT: &str = "Неизвестное оборудование";

/// Lookup of equipment names for rendering rental item lists.
pub struct EquipmentNames(HashMap<Uuid, (EquipmentName, OwnedQuantity)>);

impl EquipmentNames {
    pub fn index(equipment: &[Equipment]) -> Self {
        Self(
            equipment
                .iter()
                .map(|equipment| {
                    (
                        *equipment.id().as_ref(),
                        (equipment.name().clone(), equipment.quantity().clone()),
                    )
                })
                .collect(),
        )
    }

    pub fn display_name(&self, instance: &EquipmentInstance) -> String {
        match self.0.get(instance.equipment_id().as_ref()) {
            Some((name, quantity)) => instance.display_name(name, quantity),
            None => UNKNOWN_EQUIPMENT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: Uuid,
    pub equipment_list: Vec<EquipmentInstanceDto>,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub needs_delivery: bool,
    pub delivery_address: Option<String>,
    pub rental_price: Decimal,
    pub delivery_price: Decimal,
    pub delivery_costs: Decimal,
    pub source: RentalSource,
    pub comment: Option<String>,
    pub status: RentalStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl RentalDto {
    /// Builds the outward representation: item display names from the
    /// equipment index and the status resolved against `now`.
    pub fn resolve(rental: Rental, names: &EquipmentNames, now: OffsetDateTime) -> Self {
        let status = rental.status_at(now);
        let DestructRental {
            id,
            items,
            start_date,
            end_date,
            customer_name,
            customer_phone,
            needs_delivery,
            delivery_address,
            rental_price,
            delivery_price,
            delivery_costs,
            source,
            comment,
            created_at,
            updated_at,
            ..
        } = rental.into_destruct();
        Self {
            id: *id.as_ref(),
            equipment_list: items
                .iter()
                .map(|instance| {
                    EquipmentInstanceDto::new(instance, names.display_name(instance))
                })
                .collect(),
            start_date: *start_date.as_ref(),
            end_date: *end_date.as_ref(),
            customer_name: customer_name.as_ref().clone(),
            customer_phone: customer_phone.as_ref().clone(),
            needs_delivery: *needs_delivery.as_ref(),
            delivery_address: delivery_address.map(|address| address.as_ref().clone()),
            rental_price: rental_price.amount(),
            delivery_price: delivery_price.amount(),
            delivery_costs: delivery_costs.amount(),
            source,
            comment: comment.map(|comment| comment.as_ref().clone()),
            status,
            created_at: *created_at.as_ref(),
            updated_at: *updated_at.as_ref(),
        }
    }
}

pub struct NewRentalItemDto {
    pub equipment_id: Uuid,
    pub instance_number: i32,
}

pub struct GetRentalDto {
    pub id: Uuid,
}

pub struct GetCustomerRentalsDto {
    pub phone: String,
}

pub struct RentalScheduleDto {
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
}

pub struct CreateRentalDto {
    pub items: Vec<NewRentalItemDto>,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub needs_delivery: bool,
    pub delivery_address: Option<String>,
    pub rental_price: Decimal,
    pub delivery_price: Option<Decimal>,
    pub delivery_costs: Option<Decimal>,
    pub source: RentalSource,
    pub comment: Option<String>,
}

pub struct UpdateRentalDto {
    pub id: Uuid,
    pub items: Option<Vec<NewRentalItemDto>>,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub needs_delivery: Option<bool>,
    pub delivery_address: Option<String>,
    pub rental_price: Option<Decimal>,
    pub delivery_price: Option<Decimal>,
    pub delivery_costs: Option<Decimal>,
    pub source: Option<RentalSource>,
    pub comment: Option<String>,
    pub status: Option<StoredStatus>,
}

pub struct DeleteRentalDto {
    pub id: Uuid,
}
