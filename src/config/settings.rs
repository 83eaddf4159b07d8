use serde::{Deserialize, Serialize};

/// The key a player can be required to hold for instant consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    LeftControl,
    RightControl,
    LeftShift,
    RightShift,
    LeftAlt,
    RightAlt,
}

impl ModifierKey {
    pub const ALL: [ModifierKey; 6] = [
        ModifierKey::LeftControl,
        ModifierKey::RightControl,
        ModifierKey::LeftShift,
        ModifierKey::RightShift,
        ModifierKey::LeftAlt,
        ModifierKey::RightAlt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModifierKey::LeftControl => "Left Control",
            ModifierKey::RightControl => "Right Control",
            ModifierKey::LeftShift => "Left Shift",
            ModifierKey::RightShift => "Right Shift",
            ModifierKey::LeftAlt => "Left Alt",
            ModifierKey::RightAlt => "Right Alt",
        }
    }
}

/// Player-editable settings, persisted as a flat JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hold a key to instant-eat, to avoid accidental consumption.
    #[serde(rename = "RequireModifier")]
    pub require_modifier: bool,

    #[serde(rename = "ModifierKey")]
    pub modifier_key: ModifierKey,

    /// Allow eating even when health and stamina are both full.
    #[serde(rename = "AllowWhenFull")]
    pub allow_when_full: bool,

    /// Play the eating sound effect on instant consumption.
    #[serde(rename = "PlayEatSound")]
    pub play_eat_sound: bool,

    /// Show how much health and stamina was restored.
    #[serde(rename = "ShowHealthGain")]
    pub show_health_gain: bool,

    /// Show the "Quickly consumed" message.
    #[serde(rename = "ShowQuickConsumeDialog")]
    pub show_quick_consume_dialog: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            require_modifier: false,
            modifier_key: ModifierKey::LeftControl,
            allow_when_full: true,
            play_eat_sound: true,
            show_health_gain: true,
            show_quick_consume_dialog: true,
        }
    }
}
