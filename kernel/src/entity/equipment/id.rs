use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EquipmentId(Uuid);

impl EquipmentId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
