use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct NeedsDelivery(bool);

impl NeedsDelivery {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DeliveryAddress(String);

impl DeliveryAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
