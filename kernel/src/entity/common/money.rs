use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Money amount with `NUMERIC(10, 2)` precision on the database side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Fromln, AsRefln, Serialize,
    Deserialize,
)]
pub struct Price(Decimal);

impl Price {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}
