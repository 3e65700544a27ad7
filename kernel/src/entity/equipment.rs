mod description;
mod id;
mod instance;
mod name;
mod quantity;

pub use self::{description::*, id::*, instance::*, name::*, quantity::*};
use crate::entity::common::{CreatedAt, Price, UpdatedAt};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Equipment {
    id: EquipmentId,
    name: EquipmentName,
    quantity: OwnedQuantity,
    description: Option<EquipmentDescription>,
    base_price: Price,
    created_at: CreatedAt<Equipment>,
    updated_at: UpdatedAt<Equipment>,
}

impl Equipment {
    pub fn new(
        id: EquipmentId,
        name: EquipmentName,
        quantity: OwnedQuantity,
        description: Option<EquipmentDescription>,
        base_price: Price,
        created_at: CreatedAt<Equipment>,
        updated_at: UpdatedAt<Equipment>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            description,
            base_price,
            created_at,
            updated_at,
        }
    }

    /// Virtually expands owned stock into individually rentable instances,
    /// numbered from 1. Instances are never persisted.
    pub fn instances(&self) -> Vec<EquipmentInstance> {
        (1..=*self.quantity.as_ref())
            .map(|number| EquipmentInstance::new(self.id.clone(), InstanceNumber::new(number)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn single_unit_expands_into_one_instance() {
        let equipment = equipment_with_quantity(1);
        let instances = equipment.instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(*instances[0].instance_number().as_ref(), 1);
    }

    #[test]
    fn stock_expands_into_numbered_instances() {
        let equipment = equipment_with_quantity(3);
        let numbers = equipment
            .instances()
            .iter()
            .map(|instance| *instance.instance_number().as_ref())
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    fn equipment_with_quantity(quantity: i32) -> Equipment {
        let now = datetime!(2024-01-15 12:00 UTC);
        Equipment::new(
            EquipmentId::new(uuid::Uuid::new_v4()),
            EquipmentName::new("GoPro 13".to_string()),
            OwnedQuantity::new(quantity),
            None,
            Price::new(1500),
            CreatedAt::new(now),
            UpdatedAt::new(now),
        )
    }
}
