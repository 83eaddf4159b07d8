pub mod buffs;
pub mod cli;
pub mod config;
pub mod decision;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{QuickConsumeError, Result};
pub use models::{ConsumableItem, ConsumptionOutcome};
