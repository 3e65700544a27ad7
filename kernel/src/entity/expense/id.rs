use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
