//! Fixed presets reproducing the reWASD remapper's trigger effects.
//!
//! Most presets are Simple-family blocks with hard-coded parameters. Choppy,
//! Rifle and Vibration write literal bytes so the output matches what reWASD
//! sends, including values the firmware ignores. Presets never fall back to
//! Off.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};

use crate::block::EffectBlock;
use crate::effect::EncodeEffect;
use crate::error::{TriggerEffectResult, check_range};
use crate::legacy::{simple_feedback, simple_weapon};

/// Default Rifle frequency.
pub const RIFLE_DEFAULT_FREQUENCY: u8 = 10;
/// Rifle frequency bounds.
pub const RIFLE_MIN_FREQUENCY: u8 = 2;
/// Rifle frequency bounds.
pub const RIFLE_MAX_FREQUENCY: u8 = 20;

/// Default Vibration strength.
pub const VIBRATION_DEFAULT_STRENGTH: u8 = 220;
/// Default Vibration frequency.
pub const VIBRATION_DEFAULT_FREQUENCY: u8 = 30;

/// `simple_weapon(0x90, 0xA0, 0xFF)`.
pub fn full_press() -> EffectBlock {
    simple_weapon(0x90, 0xA0, 0xFF)
}

/// `simple_weapon(0x70, 0xA0, 0xFF)`.
pub fn soft_press() -> EffectBlock {
    simple_weapon(0x70, 0xA0, 0xFF)
}

/// `simple_weapon(0x45, 0xA0, 0xFF)`.
pub fn medium_press() -> EffectBlock {
    simple_weapon(0x45, 0xA0, 0xFF)
}

/// `simple_weapon(0x20, 0xA0, 0xFF)`.
pub fn hard_press() -> EffectBlock {
    simple_weapon(0x20, 0xA0, 0xFF)
}

/// `simple_weapon(0x00, 0x00, 0x00)`, sent as-is rather than as Off.
pub fn pulse() -> EffectBlock {
    simple_weapon(0x00, 0x00, 0x00)
}

/// Feedback block with reWASD's raw zone mask `0x2702`.
///
/// reWASD sends `0x1F` and `0x27` in bytes 3 and 5; the bits that only apply
/// to disabled zones are cleared here.
pub fn choppy() -> EffectBlock {
    EffectBlock::from_raw([
        0x21, 0x02, 0x27, 0x18, 0x00, 0x00, 0x26, 0x00, 0x00, 0x00, 0x00,
    ])
}

/// `simple_feedback(0x00, 0x00)`.
pub fn soft_rigidity() -> EffectBlock {
    simple_feedback(0x00, 0x00)
}

/// `simple_feedback(0x00, 0x64)`.
pub fn medium_rigidity() -> EffectBlock {
    simple_feedback(0x00, 0x64)
}

/// `simple_feedback(0x00, 0xDC)`.
pub fn max_rigidity() -> EffectBlock {
    simple_feedback(0x00, 0xDC)
}

/// `simple_feedback(0x55, 0x64)`.
pub fn half_press() -> EffectBlock {
    simple_feedback(0x55, 0x64)
}

/// Vibration across zones 8–9 at a fixed amplitude.
///
/// - `frequency`: 2–20
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when `frequency` is
/// outside 2–20.
pub fn rifle(frequency: u8) -> TriggerEffectResult<EffectBlock> {
    check_range("frequency", frequency, RIFLE_MIN_FREQUENCY, RIFLE_MAX_FREQUENCY)?;
    Ok(EffectBlock::from_raw([
        0x26, 0x00, 0x03, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, frequency, 0x00,
    ]))
}

/// Vibration across zones 8–9 with `strength` written raw into byte 6.
///
/// Only the low six bits of `strength` reach zones 8 and 9.
///
/// - `strength`: at least 1
/// - `frequency`: at least 1
///
/// # Errors
///
/// Returns [`crate::TriggerEffectError::OutOfRange`] when either parameter
/// is zero.
pub fn vibration(strength: u8, frequency: u8) -> TriggerEffectResult<EffectBlock> {
    check_range("strength", strength, 1, u8::MAX)?;
    check_range("frequency", frequency, 1, u8::MAX)?;
    Ok(EffectBlock::from_raw([
        0x26, 0x00, 0x03, 0x00, 0x00, 0x00, strength, 0x00, 0x00, frequency, 0x00,
    ]))
}

/// A reWASD preset, storable in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReWasdPreset {
    FullPress,
    SoftPress,
    MediumPress,
    HardPress,
    Pulse,
    Choppy,
    SoftRigidity,
    MediumRigidity,
    MaxRigidity,
    HalfPress,
    Rifle {
        #[serde(default = "default_rifle_frequency")]
        frequency: u8,
    },
    Vibration {
        #[serde(default = "default_vibration_strength")]
        strength: u8,
        #[serde(default = "default_vibration_frequency")]
        frequency: u8,
    },
}

fn default_rifle_frequency() -> u8 {
    RIFLE_DEFAULT_FREQUENCY
}

fn default_vibration_strength() -> u8 {
    VIBRATION_DEFAULT_STRENGTH
}

fn default_vibration_frequency() -> u8 {
    VIBRATION_DEFAULT_FREQUENCY
}

impl ReWasdPreset {
    /// Every preset that takes no parameters.
    pub const ALL_FIXED: [Self; 10] = [
        Self::FullPress,
        Self::SoftPress,
        Self::MediumPress,
        Self::HardPress,
        Self::Pulse,
        Self::Choppy,
        Self::SoftRigidity,
        Self::MediumRigidity,
        Self::MaxRigidity,
        Self::HalfPress,
    ];

    /// Rifle at its default frequency.
    pub const fn rifle_default() -> Self {
        Self::Rifle {
            frequency: RIFLE_DEFAULT_FREQUENCY,
        }
    }

    /// Vibration at its default strength and frequency.
    pub const fn vibration_default() -> Self {
        Self::Vibration {
            strength: VIBRATION_DEFAULT_STRENGTH,
            frequency: VIBRATION_DEFAULT_FREQUENCY,
        }
    }
}

impl EncodeEffect for ReWasdPreset {
    fn encode(&self) -> TriggerEffectResult<EffectBlock> {
        Ok(match *self {
            Self::FullPress => full_press(),
            Self::SoftPress => soft_press(),
            Self::MediumPress => medium_press(),
            Self::HardPress => hard_press(),
            Self::Pulse => pulse(),
            Self::Choppy => choppy(),
            Self::SoftRigidity => soft_rigidity(),
            Self::MediumRigidity => medium_rigidity(),
            Self::MaxRigidity => max_rigidity(),
            Self::HalfPress => half_press(),
            Self::Rifle { frequency } => rifle(frequency)?,
            Self::Vibration {
                strength,
                frequency,
            } => vibration(strength, frequency)?,
        })
    }
}
