use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct OwnedQuantity(i32);

impl OwnedQuantity {
    pub fn new(quantity: impl Into<i32>) -> Self {
        Self(quantity.into())
    }
}

impl Default for OwnedQuantity {
    fn default() -> Self {
        Self::new(1)
    }
}
