mod inventory;
mod player;

pub use inventory::{load_items, save_items, Inventory};
pub use player::{AppliedGains, PlayerState};
