//! Official effect encoders.
//!
//! These are the four effects the firmware documents and protects
//! (Off, Feedback, Weapon, Vibration) plus the multi-zone and slope variants
//! that reuse the Feedback and Vibration codes.
//!
//! All functions are pure and allocation-free. Parameter sets that validate
//! but would produce no force (zero strength, zero amplitude, zero frequency)
//! encode as [`EffectBlock::OFF`].

#![deny(static_mut_refs)]

use tracing::trace;

use crate::block::EffectBlock;
use crate::error::{TriggerEffectError, TriggerEffectResult, check_range};
use crate::ids::{MAX_ZONE, ZONE_COUNT};
use crate::types::TriggerEffectType;
use crate::zones::{ZoneIntensities, two_zone_mask};

/// Highest one-based strength / amplitude level.
pub const MAX_STRENGTH: u8 = 8;

/// Weapon start zone bounds.
pub const WEAPON_MIN_START: u8 = 2;
/// Weapon start zone bounds.
pub const WEAPON_MAX_START: u8 = 7;
/// Weapon end zone ceiling.
pub const WEAPON_MAX_END: u8 = 8;

/// Turn the effect off and return the trigger stop to neutral.
pub fn off() -> EffectBlock {
    EffectBlock::OFF
}

/// Resist movement from `position` to full travel.
///
/// - `position`: starting zone, 0–9
/// - `strength`: 0–8, 0 encodes Off
///
/// Layout: code `0x21`, zone mask (bytes 1–2), packed `strength - 1` in every
/// zone from `position` through 9 (bytes 3–6), bytes 7–10 zero.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a parameter is outside
/// the range listed above.
pub fn feedback(position: u8, strength: u8) -> TriggerEffectResult<EffectBlock> {
    check_range("position", position, 0, MAX_ZONE)?;
    check_range("strength", strength, 0, MAX_STRENGTH)?;
    if strength == 0 {
        trace!(position, "feedback strength is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    let zones = ZoneIntensities::fill_from(position, strength - 1);
    Ok(EffectBlock::zoned(TriggerEffectType::Feedback, &zones, 0x00))
}

/// Resist movement between `start_position` and `end_position`, then release.
///
/// - `start_position`: 2–7
/// - `end_position`: `start_position + 1`–8
/// - `strength`: 0–8, 0 encodes Off
///
/// Layout: code `0x25`, mask with only the start and end bits (bytes 1–2),
/// `strength - 1` (byte 3), bytes 4–10 zero.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a parameter is outside
/// the range listed above.
pub fn weapon(
    start_position: u8,
    end_position: u8,
    strength: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range(
        "start_position",
        start_position,
        WEAPON_MIN_START,
        WEAPON_MAX_START,
    )?;
    check_range(
        "end_position",
        end_position,
        start_position + 1,
        WEAPON_MAX_END,
    )?;
    check_range("strength", strength, 0, MAX_STRENGTH)?;
    if strength == 0 {
        trace!(start_position, end_position, "weapon strength is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::ranged(
        TriggerEffectType::Weapon,
        two_zone_mask(start_position, end_position),
        [strength - 1, 0x00, 0x00],
    ))
}

/// Vibrate from `position` to full travel.
///
/// - `position`: starting zone, 0–9
/// - `amplitude`: 0–8, 0 encodes Off
/// - `frequency`: hertz, 0 encodes Off
///
/// Layout: as [`feedback`] with code `0x26` and `frequency` in byte 9.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a parameter is outside
/// the range listed above.
pub fn vibration(position: u8, amplitude: u8, frequency: u8) -> TriggerEffectResult<EffectBlock> {
    check_range("position", position, 0, MAX_ZONE)?;
    check_range("amplitude", amplitude, 0, MAX_STRENGTH)?;
    if amplitude == 0 || frequency == 0 {
        trace!(position, amplitude, frequency, "vibration has no magnitude, encoding off");
        return Ok(EffectBlock::OFF);
    }
    let zones = ZoneIntensities::fill_from(position, amplitude - 1);
    Ok(EffectBlock::zoned(
        TriggerEffectType::Vibration,
        &zones,
        frequency,
    ))
}

/// Resist movement with an independent strength per zone.
///
/// `strength` must hold exactly one level per zone. Each level is 0–8; 0
/// leaves the zone inactive. Levels above 8 are not rejected and wrap to
/// their low three bits after the one-based shift. All-zero encodes Off.
///
/// # Errors
///
/// Returns [`TriggerEffectError::InvalidZoneCount`] unless `strength` holds
/// exactly [`ZONE_COUNT`] levels.
pub fn multiple_position_feedback(strength: &[u8]) -> TriggerEffectResult<EffectBlock> {
    let levels = zone_levels(strength)?;
    let zones = ZoneIntensities::from_levels(&levels);
    if zones.is_empty() {
        trace!("multi-zone feedback has no active zone, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::zoned(TriggerEffectType::Feedback, &zones, 0x00))
}

/// Resist movement with strength interpolated linearly across zones.
///
/// - `start_position`: 0–8
/// - `end_position`: `start_position + 1`–9
/// - `start_strength`, `end_strength`: 1–8
///
/// Zones before `start_position` stay inactive, zones past `end_position`
/// hold `end_strength`. Interpolated levels round half away from zero.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a parameter is outside
/// the range listed above.
pub fn slope_feedback(
    start_position: u8,
    end_position: u8,
    start_strength: u8,
    end_strength: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range("start_position", start_position, 0, MAX_ZONE - 1)?;
    check_range("end_position", end_position, start_position + 1, MAX_ZONE)?;
    check_range("start_strength", start_strength, 1, MAX_STRENGTH)?;
    check_range("end_strength", end_strength, 1, MAX_STRENGTH)?;

    let levels = slope_levels(start_position, end_position, start_strength, end_strength);
    multiple_position_feedback(&levels)
}

/// Vibrate with one frequency and an independent amplitude per zone.
///
/// `amplitude` follows the [`multiple_position_feedback`] contract. A zero
/// `frequency` or all-zero amplitudes encode Off.
///
/// # Errors
///
/// Returns [`TriggerEffectError::InvalidZoneCount`] unless `amplitude` holds
/// exactly [`ZONE_COUNT`] levels.
pub fn multiple_position_vibration(
    frequency: u8,
    amplitude: &[u8],
) -> TriggerEffectResult<EffectBlock> {
    let levels = zone_levels(amplitude)?;
    let zones = ZoneIntensities::from_levels(&levels);
    if frequency == 0 || zones.is_empty() {
        trace!(frequency, "multi-zone vibration has no magnitude, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::zoned(
        TriggerEffectType::Vibration,
        &zones,
        frequency,
    ))
}

/// Per-zone levels for a slope between two validated zones.
pub(crate) fn slope_levels(
    start_position: u8,
    end_position: u8,
    start_strength: u8,
    end_strength: u8,
) -> [u8; ZONE_COUNT] {
    let rise = f32::from(end_strength) - f32::from(start_strength);
    let run = f32::from(end_position) - f32::from(start_position);
    let slope = rise / run;

    let mut levels = [0u8; ZONE_COUNT];
    for (zone, level) in levels.iter_mut().enumerate().skip(usize::from(start_position)) {
        *level = match u8::try_from(zone) {
            Ok(zone) if zone <= end_position => {
                let offset = f32::from(zone - start_position);
                round_to_level(f32::from(start_strength) + slope * offset)
            }
            _ => end_strength,
        };
    }
    levels
}

/// Round a non-negative interpolated level into `u8`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "interpolated levels lie between two validated strengths (1-8)"
)]
fn round_to_level(level: f32) -> u8 {
    level.round() as u8
}

fn zone_levels(values: &[u8]) -> TriggerEffectResult<[u8; ZONE_COUNT]> {
    let Ok(levels) = <[u8; ZONE_COUNT]>::try_from(values) else {
        return Err(TriggerEffectError::InvalidZoneCount {
            expected: ZONE_COUNT,
            actual: values.len(),
        });
    };
    Ok(levels)
}
