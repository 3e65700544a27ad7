use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ExpenseCategory(String);

impl ExpenseCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }
}
