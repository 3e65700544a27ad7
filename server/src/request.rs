pub use self::{equipment::*, expense::*, rental::*, report::*};

mod equipment;
mod expense;
mod rental;
mod report;
