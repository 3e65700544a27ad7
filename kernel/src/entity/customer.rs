use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CustomerPhone(String);

impl CustomerPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentalCount(i64);

impl RentalCount {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into())
    }
}

/// Not a stored entity: customers are a projection of rentals grouped by
/// (name, phone).
#[derive(Debug, Clone, Eq, PartialEq, References, Serialize, Deserialize)]
pub struct Customer {
    name: CustomerName,
    phone: CustomerPhone,
    rental_count: RentalCount,
}

impl Customer {
    pub fn new(name: CustomerName, phone: CustomerPhone, rental_count: RentalCount) -> Self {
        Self {
            name,
            phone,
            rental_count,
        }
    }
}
