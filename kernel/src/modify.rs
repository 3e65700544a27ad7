pub use self::{equipment::*, expense::*, rental::*};

mod equipment;
mod expense;
mod rental;
