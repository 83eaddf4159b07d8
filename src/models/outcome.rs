/// Why an item was ruled out before the buff check even ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    /// Edibility rating is zero or negative.
    NotFood,
    /// Health and stamina are both full and eating-when-full is disabled.
    AlreadyFull,
}

/// The result of one instant-consumption decision.
///
/// Produced fresh per call and never stored; `Applied` carries the raw
/// restoration amounts before any clamping against the player's maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionOutcome {
    /// The item cannot be instantly consumed; the host's normal path applies.
    Ineligible(IneligibleReason),
    /// The item grants buffs, so bypassing the host's consumption flow would
    /// skip its buff bookkeeping. Never fast-consumed.
    BlockedHasBuffs,
    /// Safe to consume instantly with these restoration amounts.
    Applied { health_gain: i32, stamina_gain: i32 },
}

impl ConsumptionOutcome {
    /// Whether the decision allows instant consumption.
    pub fn is_applied(&self) -> bool {
        matches!(self, ConsumptionOutcome::Applied { .. })
    }
}
