pub mod constants;
mod evaluate;

pub use constants::*;
pub use evaluate::{evaluate, health_recovered, stamina_recovered};
