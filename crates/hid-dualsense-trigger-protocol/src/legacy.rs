//! Simple and Limited effect encoders.
//!
//! These families predate the zone-based encoding and take raw byte
//! parameters directly in bytes 1–3. The Simple family is not validated at
//! all; the Limited family only validates what its firmware handler would
//! otherwise misbehave on.

#![deny(static_mut_refs)]

use tracing::trace;

use crate::block::EffectBlock;
use crate::error::{TriggerEffectResult, check_range, check_range_wide};
use crate::types::TriggerEffectType;

/// Highest Limited strength.
pub const LIMITED_MAX_STRENGTH: u8 = 10;
/// Lowest Limited Weapon start position.
pub const LIMITED_WEAPON_MIN_START: u8 = 0x10;
/// Widest Limited Weapon span (`end_position - start_position`).
pub const LIMITED_WEAPON_MAX_SPAN: u16 = 100;

/// Raw feedback: `[0x01, position, strength, 0…]`. Never fails.
pub fn simple_feedback(position: u8, strength: u8) -> EffectBlock {
    EffectBlock::raw_params(TriggerEffectType::SimpleFeedback, [position, strength, 0x00])
}

/// Raw weapon: `[0x02, start_position, end_position, strength, 0…]`. Never
/// fails.
pub fn simple_weapon(start_position: u8, end_position: u8, strength: u8) -> EffectBlock {
    EffectBlock::raw_params(
        TriggerEffectType::SimpleWeapon,
        [start_position, end_position, strength],
    )
}

/// Raw vibration: `[0x06, frequency, amplitude, position, 0…]`.
///
/// A zero `frequency` or `amplitude` encodes Off.
pub fn simple_vibration(position: u8, amplitude: u8, frequency: u8) -> EffectBlock {
    if frequency == 0 || amplitude == 0 {
        trace!(position, "simple vibration has no magnitude, encoding off");
        return EffectBlock::OFF;
    }
    EffectBlock::raw_params(
        TriggerEffectType::SimpleVibration,
        [frequency, amplitude, position],
    )
}

/// `[0x11, position, strength, 0…]` with `strength` 0–10, 0 encoding Off.
///
/// `position` is passed through unvalidated.
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when `strength`
/// exceeds 10.
pub fn limited_feedback(position: u8, strength: u8) -> TriggerEffectResult<EffectBlock> {
    check_range("strength", strength, 0, LIMITED_MAX_STRENGTH)?;
    if strength == 0 {
        trace!(position, "limited feedback strength is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::raw_params(
        TriggerEffectType::LimitedFeedback,
        [position, strength, 0x00],
    ))
}

/// `[0x12, start_position, end_position, strength, 0…]`.
///
/// - `start_position`: at least `0x10`
/// - `end_position`: `start_position`–`start_position + 100`
/// - `strength`: 0–10, 0 encodes Off
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when a parameter is
/// outside the range listed above.
pub fn limited_weapon(
    start_position: u8,
    end_position: u8,
    strength: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range("start_position", start_position, LIMITED_WEAPON_MIN_START, u8::MAX)?;
    // The span ceiling is computed without wrapping, so it can exceed 255.
    check_range_wide(
        "end_position",
        u16::from(end_position),
        u16::from(start_position),
        u16::from(start_position) + LIMITED_WEAPON_MAX_SPAN,
    )?;
    check_range("strength", strength, 0, LIMITED_MAX_STRENGTH)?;
    if strength == 0 {
        trace!(start_position, end_position, "limited weapon strength is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::raw_params(
        TriggerEffectType::LimitedWeapon,
        [start_position, end_position, strength],
    ))
}
