use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ExpenseDescription(String);

impl ExpenseDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
