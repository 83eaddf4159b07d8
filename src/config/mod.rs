mod persistence;
mod settings;

pub use persistence::{load_settings, load_settings_or_default, save_settings};
pub use settings::{ModifierKey, Settings};
