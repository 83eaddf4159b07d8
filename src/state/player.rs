use serde::{Deserialize, Serialize};

use crate::models::ConsumptionOutcome;

/// Amounts actually restored after clamping, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedGains {
    pub health: i32,
    pub stamina: i32,
}

/// Health and stamina state standing in for the host player.
///
/// Setters clamp to the maxima the way the host's do, so applying an outcome
/// reports the post-clamp deltas rather than the raw formula amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(rename = "Health")]
    pub health: i32,

    #[serde(rename = "MaxHealth")]
    pub max_health: i32,

    #[serde(rename = "Stamina")]
    pub stamina: i32,

    #[serde(rename = "MaxStamina")]
    pub max_stamina: i32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: 100,
            max_health: 100,
            stamina: 270,
            max_stamina: 270,
        }
    }
}

impl PlayerState {
    pub fn new(health: i32, max_health: i32, stamina: i32, max_stamina: i32) -> Self {
        Self {
            health: health.min(max_health),
            max_health,
            stamina: stamina.min(max_stamina),
            max_stamina,
        }
    }

    /// Both health and stamina at their maxima.
    pub fn is_full(&self) -> bool {
        self.health >= self.max_health && self.stamina >= self.max_stamina
    }

    /// Apply an `Applied` outcome, clamping to the maxima.
    ///
    /// Returns the amounts actually restored. Non-`Applied` outcomes change
    /// nothing and restore zero.
    pub fn apply(&mut self, outcome: &ConsumptionOutcome) -> AppliedGains {
        let ConsumptionOutcome::Applied {
            health_gain,
            stamina_gain,
        } = outcome
        else {
            return AppliedGains::default();
        };

        let previous_health = self.health;
        let previous_stamina = self.stamina;

        // Gains can be as large as the edibility rating drives them, so the
        // additions must not overflow before the clamp.
        self.health = self.health.saturating_add(*health_gain).min(self.max_health);
        self.stamina = self
            .stamina
            .saturating_add(*stamina_gain)
            .min(self.max_stamina);

        AppliedGains {
            health: self.health - previous_health,
            stamina: self.stamina - previous_stamina,
        }
    }
}
