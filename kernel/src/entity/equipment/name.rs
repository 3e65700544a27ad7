use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EquipmentName(String);

impl EquipmentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
