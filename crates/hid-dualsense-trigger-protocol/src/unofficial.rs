//! Unofficial effect encoders with no official counterpart.
//!
//! Bow, Galloping and Machine are stable in current firmware but are not
//! documented and get no firmware-side parameter protection. Every parameter
//! is validated here instead.
//!
//! Layout shared by all three:
//! - Byte 0: effect code
//! - Bytes 1–2: mask with only the start and end zone bits, little-endian
//! - Byte 3: two 3-bit values (bits 0–2 and 3–5)
//! - Bytes 4–5: effect specific, bytes 6–10 zero

#![deny(static_mut_refs)]

use tracing::trace;

use crate::block::EffectBlock;
use crate::error::{TriggerEffectResult, check_range};
use crate::ids::MAX_ZONE;
use crate::official::MAX_STRENGTH;
use crate::types::TriggerEffectType;
use crate::zones::{pack_pair, two_zone_mask};

/// Highest start zone for Bow, Galloping and Machine.
pub const MAX_START: u8 = 8;
/// Bow end zone ceiling. Galloping and Machine may end on zone 9.
pub const BOW_MAX_END: u8 = 8;

/// Highest Galloping second-foot value.
pub const MAX_SECOND_FOOT: u8 = 7;
/// Highest Galloping first-foot value.
pub const MAX_FIRST_FOOT: u8 = 6;
/// Highest Machine amplitude.
pub const MAX_MACHINE_AMPLITUDE: u8 = 7;

/// Resist like a bow string, then snap back once `end_position` is passed.
///
/// - `start_position`: 0–8
/// - `end_position`: `start_position + 1`–8
/// - `strength`: 0–8, 0 encodes Off
/// - `snap_force`: 0–8, 0 encodes Off
///
/// Byte 3 packs `strength - 1` (bits 0–2) and `snap_force - 1` (bits 3–5).
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when a parameter is
/// outside the range listed above.
pub fn bow(
    start_position: u8,
    end_position: u8,
    strength: u8,
    snap_force: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range("start_position", start_position, 0, MAX_START)?;
    check_range("end_position", end_position, start_position + 1, BOW_MAX_END)?;
    check_range("strength", strength, 0, MAX_STRENGTH)?;
    check_range("snap_force", snap_force, 0, MAX_STRENGTH)?;
    if end_position == 0 || strength == 0 || snap_force == 0 {
        trace!(strength, snap_force, "bow has no force, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::ranged(
        TriggerEffectType::Bow,
        two_zone_mask(start_position, end_position),
        [pack_pair(strength - 1, snap_force - 1), 0x00, 0x00],
    ))
}

/// Tap twice per cycle like a galloping horse.
///
/// - `start_position`: 0–8
/// - `end_position`: `start_position + 1`–9
/// - `first_foot`: 0–6, when the first tap lands within the cycle
/// - `second_foot`: `first_foot + 1`–7, when the second tap lands
/// - `frequency`: cycles per second, 0 encodes Off
///
/// Byte 3 packs `second_foot` (bits 0–2) and `first_foot` (bits 3–5); byte 4
/// carries `frequency`.
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when a parameter is
/// outside the range listed above.
pub fn galloping(
    start_position: u8,
    end_position: u8,
    first_foot: u8,
    second_foot: u8,
    frequency: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range("start_position", start_position, 0, MAX_START)?;
    check_range("end_position", end_position, start_position + 1, MAX_ZONE)?;
    check_range("first_foot", first_foot, 0, MAX_FIRST_FOOT)?;
    check_range("second_foot", second_foot, first_foot + 1, MAX_SECOND_FOOT)?;
    if frequency == 0 {
        trace!(start_position, end_position, "galloping frequency is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::ranged(
        TriggerEffectType::Galloping,
        two_zone_mask(start_position, end_position),
        [pack_pair(second_foot, first_foot), frequency, 0x00],
    ))
}

/// Vibrate alternating between two amplitudes.
///
/// - `start_position`: 0–8
/// - `end_position`: `start_position + 1`–9
/// - `amplitude_a`, `amplitude_b`: 0–7
/// - `frequency`: hertz, 0 encodes Off
/// - `period`: tenths of a second per amplitude swap, unvalidated
///
/// Byte 3 packs both amplitudes; bytes 4 and 5 carry `frequency` and `period`.
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when a parameter is
/// outside the range listed above.
pub fn machine(
    start_position: u8,
    end_position: u8,
    amplitude_a: u8,
    amplitude_b: u8,
    frequency: u8,
    period: u8,
) -> TriggerEffectResult<EffectBlock> {
    check_range("start_position", start_position, 0, MAX_START)?;
    check_range("end_position", end_position, start_position + 1, MAX_ZONE)?;
    check_range("amplitude_a", amplitude_a, 0, MAX_MACHINE_AMPLITUDE)?;
    check_range("amplitude_b", amplitude_b, 0, MAX_MACHINE_AMPLITUDE)?;
    if frequency == 0 {
        trace!(start_position, end_position, "machine frequency is zero, encoding off");
        return Ok(EffectBlock::OFF);
    }
    Ok(EffectBlock::ranged(
        TriggerEffectType::Machine,
        two_zone_mask(start_position, end_position),
        [pack_pair(amplitude_a, amplitude_b), frequency, period],
    ))
}
