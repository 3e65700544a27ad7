pub use self::{customer::*, equipment::*, expense::*, rental::*};

mod customer;
mod equipment;
mod expense;
mod rental;
