pub use self::{customer::*, equipment::*, expense::*, rental::*, report::*};

mod customer;
mod equipment;
mod expense;
mod rental;
mod report;
