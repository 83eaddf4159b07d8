/// Buff magnitudes and duration for one named food.
///
/// Reference data sourced from the game wiki's cooking page. Immutable once
/// the table is built; the decision path only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodBuffEntry {
    pub farming: i32,
    pub mining: i32,
    pub foraging: i32,
    pub fishing: i32,
    pub luck: i32,
    pub attack: i32,
    pub defense: i32,
    pub magnetism: i32,
    pub speed: i32,
    pub max_energy: i32,

    /// Squid Ink Ravioli's debuff protection, which has no magnitude field.
    pub has_special_buff: bool,

    pub duration_minutes: u32,
    pub duration_seconds: u32,
}

impl Default for FoodBuffEntry {
    fn default() -> Self {
        Self {
            farming: 0,
            mining: 0,
            foraging: 0,
            fishing: 0,
            luck: 0,
            attack: 0,
            defense: 0,
            magnetism: 0,
            speed: 0,
            max_energy: 0,
            has_special_buff: false,
            duration_minutes: 7,
            duration_seconds: 0,
        }
    }
}

impl FoodBuffEntry {
    /// Total buff duration in seconds.
    pub fn total_duration_seconds(&self) -> u32 {
        self.duration_minutes * 60 + self.duration_seconds
    }

    /// Formatted duration, e.g. "7m" or "11m 11s".
    pub fn duration_string(&self) -> String {
        if self.duration_seconds == 0 {
            format!("{}m", self.duration_minutes)
        } else {
            format!("{}m {}s", self.duration_minutes, self.duration_seconds)
        }
    }

    /// Human-readable list of the buffs this food grants.
    pub fn description(&self) -> String {
        let mut parts = Vec::new();

        let stats = [
            (self.farming, "Farming"),
            (self.mining, "Mining"),
            (self.foraging, "Foraging"),
            (self.fishing, "Fishing"),
            (self.luck, "Luck"),
            (self.attack, "Attack"),
            (self.defense, "Defense"),
            (self.speed, "Speed"),
            (self.magnetism, "Magnetism"),
            (self.max_energy, "Max Energy"),
        ];

        for (value, label) in stats {
            if value > 0 {
                parts.push(format!("+{} {}", value, label));
            }
        }

        if self.has_special_buff {
            parts.push("Debuff Protection".to_string());
        }

        if parts.is_empty() {
            "No buffs".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_string() {
        let entry = FoodBuffEntry {
            duration_minutes: 7,
            duration_seconds: 0,
            ..Default::default()
        };
        assert_eq!(entry.duration_string(), "7m");

        let entry = FoodBuffEntry {
            duration_minutes: 11,
            duration_seconds: 11,
            ..Default::default()
        };
        assert_eq!(entry.duration_string(), "11m 11s");
    }

    #[test]
    fn test_total_duration_seconds() {
        let entry = FoodBuffEntry {
            duration_minutes: 5,
            duration_seconds: 35,
            ..Default::default()
        };
        assert_eq!(entry.total_duration_seconds(), 335);
    }

    #[test]
    fn test_description_lists_positive_stats() {
        let entry = FoodBuffEntry {
            attack: 2,
            ..Default::default()
        };
        assert_eq!(entry.description(), "+2 Attack");

        let entry = FoodBuffEntry {
            mining: 1,
            has_special_buff: true,
            ..Default::default()
        };
        assert_eq!(entry.description(), "+1 Mining, Debuff Protection");
    }
}
