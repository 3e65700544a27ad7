use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Fromln, AsRefln, Serialize,
    Deserialize,
)]
pub struct ExpenseDate(Date);

impl ExpenseDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
