pub use self::{common::*, customer::*, equipment::*, expense::*, rental::*};

mod common;
mod customer;
mod equipment;
mod expense;
mod rental;
