use crate::buffs::BuffLookup;
use crate::decision::constants::{HEALTH_PER_STAMINA, STAMINA_PER_EDIBILITY};
use crate::models::{ConsumptionOutcome, IneligibleReason};

/// Stamina restored by consuming an item with the given edibility.
///
/// Matches the host's base-quality formula: `ceil(edibility * 2.5)`.
#[inline]
pub fn stamina_recovered(edibility: i32) -> i32 {
    if edibility <= 0 {
        return 0;
    }
    (edibility as f64 * STAMINA_PER_EDIBILITY).ceil() as i32
}

/// Health restored by consuming an item with the given edibility.
///
/// The host derives health from the stamina amount, truncating.
#[inline]
pub fn health_recovered(edibility: i32) -> i32 {
    if edibility <= 0 {
        return 0;
    }
    (stamina_recovered(edibility) as f64 * HEALTH_PER_STAMINA) as i32
}

/// Decide whether an item may be instantly consumed.
///
/// Stateless and idempotent; called once per triggering input event. The
/// checks run in the same order the input handler applies them:
///
/// 1. `edibility <= 0` is not food at all.
/// 2. A full player only proceeds when `allow_when_full` is set.
/// 3. Any name the buff source knows is blocked, so the host's own
///    consumption flow handles its buff bookkeeping. Names the source does
///    not know are treated as buff-free.
///
/// The returned gains are raw formula amounts; clamping against the player's
/// maxima happens at application time.
pub fn evaluate(
    name: &str,
    edibility: i32,
    is_full: bool,
    allow_when_full: bool,
    buffs: &dyn BuffLookup,
) -> ConsumptionOutcome {
    if edibility <= 0 {
        return ConsumptionOutcome::Ineligible(IneligibleReason::NotFood);
    }

    if is_full && !allow_when_full {
        return ConsumptionOutcome::Ineligible(IneligibleReason::AlreadyFull);
    }

    if buffs.has_buffs(name) {
        return ConsumptionOutcome::BlockedHasBuffs;
    }

    ConsumptionOutcome::Applied {
        health_gain: health_recovered(edibility),
        stamina_gain: stamina_recovered(edibility),
    }
}
