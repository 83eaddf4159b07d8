mod item;
mod outcome;

pub use item::ConsumableItem;
pub use outcome::{ConsumptionOutcome, IneligibleReason};
