//! Restoration constants shared with the host game.
//!
//! These two multipliers are an external contract: they must match the host's
//! own base-quality consumption formula bit-for-bit, or instant consumption
//! restores different amounts than the normal eating path. Update them only
//! in lockstep with the host version.

/// Stamina restored per point of edibility, before rounding up.
pub const STAMINA_PER_EDIBILITY: f64 = 2.5;

/// Fraction of the stamina amount restored as health, truncated.
pub const HEALTH_PER_STAMINA: f64 = 0.45;
