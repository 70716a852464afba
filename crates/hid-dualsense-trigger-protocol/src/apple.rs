//! Normalized-parameter adapter modelled on Apple's
//! `GCDualSenseAdaptiveTrigger`.
//!
//! Every input is a float in `[0, 1]`, scaled and rounded to the native range
//! before delegating to [`crate::official`]:
//!
//! - positions: `× 9` (zones 0–9)
//! - strengths and amplitudes: `× 8` (levels 0–8)
//! - frequency: `× 255` (raw byte)
//!
//! Scaled values outside `u8` saturate (negative and NaN inputs become 0),
//! so out-of-range inputs are then rejected or normalized by the native
//! encoder exactly as an equivalent integer would be.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};

use crate::block::EffectBlock;
use crate::effect::{EncodeEffect, TriggerEffect};
use crate::error::{TriggerEffectError, TriggerEffectResult};
use crate::ids::ZONE_COUNT;
use crate::official;

const POSITION_SCALE: f32 = 9.0;
const STRENGTH_SCALE: f32 = 8.0;
const FREQUENCY_SCALE: f32 = 255.0;

/// Off.
pub fn set_mode_off() -> EffectBlock {
    official::off()
}

/// [`official::feedback`] from normalized start position and strength.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a scaled value falls
/// outside the native range.
pub fn set_mode_feedback_with_start_position(
    start_position: f32,
    resistive_strength: f32,
) -> TriggerEffectResult<EffectBlock> {
    official::feedback(position(start_position), strength(resistive_strength))
}

/// [`official::weapon`] from normalized start, end and strength.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a scaled value falls
/// outside the native range.
pub fn set_mode_weapon_with_start_position(
    start_position: f32,
    end_position: f32,
    resistive_strength: f32,
) -> TriggerEffectResult<EffectBlock> {
    official::weapon(
        position(start_position),
        position(end_position),
        strength(resistive_strength),
    )
}

/// [`official::vibration`] from normalized start, amplitude and frequency.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a scaled value falls
/// outside the native range.
pub fn set_mode_vibration_with_start_position(
    start_position: f32,
    amplitude: f32,
    frequency: f32,
) -> TriggerEffectResult<EffectBlock> {
    official::vibration(
        position(start_position),
        strength(amplitude),
        scaled_frequency(frequency),
    )
}

/// [`official::multiple_position_feedback`] from one normalized strength
/// per zone.
///
/// # Errors
///
/// Returns [`TriggerEffectError::InvalidZoneCount`] unless the slice holds
/// exactly one value per zone.
pub fn set_mode_feedback(
    positional_resistive_strengths: &[f32],
) -> TriggerEffectResult<EffectBlock> {
    let levels = scale_zones(positional_resistive_strengths)?;
    official::multiple_position_feedback(&levels)
}

/// [`official::slope_feedback`] from normalized positions and strengths.
///
/// # Errors
///
/// Returns [`TriggerEffectError::OutOfRange`] when a scaled value falls
/// outside the native range.
pub fn set_mode_slope_feedback(
    start_position: f32,
    end_position: f32,
    start_strength: f32,
    end_strength: f32,
) -> TriggerEffectResult<EffectBlock> {
    official::slope_feedback(
        position(start_position),
        position(end_position),
        strength(start_strength),
        strength(end_strength),
    )
}

/// [`official::multiple_position_vibration`] from one normalized amplitude
/// per zone and a normalized frequency.
///
/// # Errors
///
/// Returns [`TriggerEffectError::InvalidZoneCount`] unless the slice holds
/// exactly one value per zone.
pub fn set_mode_vibration(
    positional_amplitudes: &[f32],
    frequency: f32,
) -> TriggerEffectResult<EffectBlock> {
    let levels = scale_zones(positional_amplitudes)?;
    official::multiple_position_vibration(scaled_frequency(frequency), &levels)
}

/// One Apple-style trigger mode, storable in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppleTriggerMode {
    Off,
    FeedbackWithStartPosition {
        start_position: f32,
        resistive_strength: f32,
    },
    WeaponWithStartPosition {
        start_position: f32,
        end_position: f32,
        resistive_strength: f32,
    },
    VibrationWithStartPosition {
        start_position: f32,
        amplitude: f32,
        frequency: f32,
    },
    Feedback {
        positional_resistive_strengths: [f32; ZONE_COUNT],
    },
    SlopeFeedback {
        start_position: f32,
        end_position: f32,
        start_strength: f32,
        end_strength: f32,
    },
    Vibration {
        positional_amplitudes: [f32; ZONE_COUNT],
        frequency: f32,
    },
}

impl AppleTriggerMode {
    /// The native effect this mode scales to, before range validation.
    pub fn to_native(&self) -> TriggerEffect {
        match *self {
            Self::Off => TriggerEffect::Off,
            Self::FeedbackWithStartPosition {
                start_position,
                resistive_strength,
            } => TriggerEffect::Feedback {
                position: position(start_position),
                strength: strength(resistive_strength),
            },
            Self::WeaponWithStartPosition {
                start_position,
                end_position,
                resistive_strength,
            } => TriggerEffect::Weapon {
                start_position: position(start_position),
                end_position: position(end_position),
                strength: strength(resistive_strength),
            },
            Self::VibrationWithStartPosition {
                start_position,
                amplitude,
                frequency,
            } => TriggerEffect::Vibration {
                position: position(start_position),
                amplitude: strength(amplitude),
                frequency: scaled_frequency(frequency),
            },
            Self::Feedback {
                positional_resistive_strengths,
            } => TriggerEffect::MultiplePositionFeedback {
                strength: positional_resistive_strengths.map(strength),
            },
            Self::SlopeFeedback {
                start_position,
                end_position,
                start_strength,
                end_strength,
            } => TriggerEffect::SlopeFeedback {
                start_position: position(start_position),
                end_position: position(end_position),
                start_strength: strength(start_strength),
                end_strength: strength(end_strength),
            },
            Self::Vibration {
                positional_amplitudes,
                frequency,
            } => TriggerEffect::MultiplePositionVibration {
                frequency: scaled_frequency(frequency),
                amplitude: positional_amplitudes.map(strength),
            },
        }
    }
}

impl EncodeEffect for AppleTriggerMode {
    fn encode(&self) -> TriggerEffectResult<EffectBlock> {
        self.to_native().encode()
    }
}

fn position(value: f32) -> u8 {
    scale(value, POSITION_SCALE)
}

fn strength(value: f32) -> u8 {
    scale(value, STRENGTH_SCALE)
}

fn scaled_frequency(value: f32) -> u8 {
    scale(value, FREQUENCY_SCALE)
}

/// Round `value × factor` half away from zero and saturate into `u8`.
///
/// Exact halves go up: `0.5 × 9 = 4.5` lands on zone 5, not 4.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int `as` saturates, which is the intended clamp"
)]
fn scale(value: f32, factor: f32) -> u8 {
    (value * factor).round() as u8
}

fn scale_zones(values: &[f32]) -> TriggerEffectResult<[u8; ZONE_COUNT]> {
    let Ok(normalized) = <[f32; ZONE_COUNT]>::try_from(values) else {
        return Err(TriggerEffectError::InvalidZoneCount {
            expected: ZONE_COUNT,
            actual: values.len(),
        });
    };
    Ok(normalized.map(strength))
}
