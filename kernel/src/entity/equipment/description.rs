use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EquipmentDescription(String);

impl EquipmentDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
