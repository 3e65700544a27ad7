use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentalComment(String);

impl RentalComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self(comment.into())
    }
}
