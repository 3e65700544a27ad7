use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

use crate::entity::equipment::{EquipmentId, EquipmentName, OwnedQuantity};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct InstanceNumber(i32);

impl InstanceNumber {
    pub fn new(number: impl Into<i32>) -> Self {
        Self(number.into())
    }
}

/// Composite key of one rentable copy of an equipment unit.
#[derive(Debug, Clone, Eq, PartialEq, Hash, References, Serialize, Deserialize)]
pub struct EquipmentInstance {
    equipment_id: EquipmentId,
    instance_number: InstanceNumber,
}

impl EquipmentInstance {
    pub fn new(equipment_id: EquipmentId, instance_number: InstanceNumber) -> Self {
        Self {
            equipment_id,
            instance_number,
        }
    }

    /// Display name shown in rental lists. The instance number is only
    /// visible when there is more than one copy of the unit.
    pub fn display_name(&self, name: &EquipmentName, quantity: &OwnedQuantity) -> String {
        if *quantity.as_ref() > 1 {
            format!("{} №{}", name.as_ref(), self.instance_number.as_ref())
        } else {
            name.as_ref().clone()
        }
    }
}
