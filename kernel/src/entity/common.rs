pub use self::{money::*, time::*};

mod money;
mod time;
