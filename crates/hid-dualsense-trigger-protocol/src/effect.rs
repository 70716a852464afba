//! Effect values and the in-place write contract.
//!
//! [`TriggerEffect`] is the closed set of native effects as plain data, so
//! per-trigger effects can live in profile files. Anything implementing
//! [`EncodeEffect`] can be written into a caller-owned report buffer with the
//! boolean contract used by report builders:
//!
//! - `true`: the 11-byte window at `offset` now holds the effect
//! - `false`: a parameter was rejected or the window did not fit, and the
//!   buffer is unchanged

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::EffectBlock;
use crate::error::{TriggerEffectError, TriggerEffectResult};
use crate::ids::{ZONE_COUNT, set_state_offsets};
use crate::{legacy, official, unofficial};

/// Produces one effect block.
pub trait EncodeEffect {
    /// Validate parameters and build the block.
    ///
    /// # Errors
    ///
    /// Returns the encoder's validation error when a parameter is out of
    /// range.
    fn encode(&self) -> TriggerEffectResult<EffectBlock>;

    /// Encode into `dest[offset..offset + 11]`.
    ///
    /// Returns `false` and leaves `dest` untouched on any failure.
    fn write_into(&self, dest: &mut [u8], offset: usize) -> bool {
        match self.encode().and_then(|block| block.write_to(dest, offset)) {
            Ok(()) => true,
            Err(err) => {
                debug!(offset, dest_len = dest.len(), "trigger effect rejected: {err}");
                false
            }
        }
    }
}

impl EncodeEffect for EffectBlock {
    fn encode(&self) -> TriggerEffectResult<EffectBlock> {
        Ok(*self)
    }
}

/// A native trigger effect with its parameters.
///
/// Deserialization does not validate; out-of-range parameters are rejected
/// by [`EncodeEffect::encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerEffect {
    #[default]
    Off,
    Feedback {
        position: u8,
        strength: u8,
    },
    Weapon {
        start_position: u8,
        end_position: u8,
        strength: u8,
    },
    Vibration {
        position: u8,
        amplitude: u8,
        frequency: u8,
    },
    MultiplePositionFeedback {
        strength: [u8; ZONE_COUNT],
    },
    SlopeFeedback {
        start_position: u8,
        end_position: u8,
        start_strength: u8,
        end_strength: u8,
    },
    MultiplePositionVibration {
        frequency: u8,
        amplitude: [u8; ZONE_COUNT],
    },
    Bow {
        start_position: u8,
        end_position: u8,
        strength: u8,
        snap_force: u8,
    },
    Galloping {
        start_position: u8,
        end_position: u8,
        first_foot: u8,
        second_foot: u8,
        frequency: u8,
    },
    Machine {
        start_position: u8,
        end_position: u8,
        amplitude_a: u8,
        amplitude_b: u8,
        frequency: u8,
        period: u8,
    },
    SimpleFeedback {
        position: u8,
        strength: u8,
    },
    SimpleWeapon {
        start_position: u8,
        end_position: u8,
        strength: u8,
    },
    SimpleVibration {
        position: u8,
        amplitude: u8,
        frequency: u8,
    },
    LimitedFeedback {
        position: u8,
        strength: u8,
    },
    LimitedWeapon {
        start_position: u8,
        end_position: u8,
        strength: u8,
    },
}

impl EncodeEffect for TriggerEffect {
    fn encode(&self) -> TriggerEffectResult<EffectBlock> {
        match *self {
            Self::Off => Ok(official::off()),
            Self::Feedback { position, strength } => official::feedback(position, strength),
            Self::Weapon {
                start_position,
                end_position,
                strength,
            } => official::weapon(start_position, end_position, strength),
            Self::Vibration {
                position,
                amplitude,
                frequency,
            } => official::vibration(position, amplitude, frequency),
            Self::MultiplePositionFeedback { strength } => {
                official::multiple_position_feedback(&strength)
            }
            Self::SlopeFeedback {
                start_position,
                end_position,
                start_strength,
                end_strength,
            } => official::slope_feedback(
                start_position,
                end_position,
                start_strength,
                end_strength,
            ),
            Self::MultiplePositionVibration {
                frequency,
                amplitude,
            } => official::multiple_position_vibration(frequency, &amplitude),
            Self::Bow {
                start_position,
                end_position,
                strength,
                snap_force,
            } => unofficial::bow(start_position, end_position, strength, snap_force),
            Self::Galloping {
                start_position,
                end_position,
                first_foot,
                second_foot,
                frequency,
            } => unofficial::galloping(
                start_position,
                end_position,
                first_foot,
                second_foot,
                frequency,
            ),
            Self::Machine {
                start_position,
                end_position,
                amplitude_a,
                amplitude_b,
                frequency,
                period,
            } => unofficial::machine(
                start_position,
                end_position,
                amplitude_a,
                amplitude_b,
                frequency,
                period,
            ),
            Self::SimpleFeedback { position, strength } => {
                Ok(legacy::simple_feedback(position, strength))
            }
            Self::SimpleWeapon {
                start_position,
                end_position,
                strength,
            } => Ok(legacy::simple_weapon(start_position, end_position, strength)),
            Self::SimpleVibration {
                position,
                amplitude,
                frequency,
            } => Ok(legacy::simple_vibration(position, amplitude, frequency)),
            Self::LimitedFeedback { position, strength } => {
                legacy::limited_feedback(position, strength)
            }
            Self::LimitedWeapon {
                start_position,
                end_position,
                strength,
            } => legacy::limited_weapon(start_position, end_position, strength),
        }
    }
}

/// Effects for both adaptive triggers of one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerPair<E = TriggerEffect> {
    pub left: E,
    pub right: E,
}

impl<E: EncodeEffect> TriggerPair<E> {
    pub fn new(left: E, right: E) -> Self {
        Self { left, right }
    }

    /// Write both trigger blocks into a set-state payload.
    ///
    /// The right block lands at [`set_state_offsets::RIGHT_TRIGGER`] and the
    /// left at [`set_state_offsets::LEFT_TRIGGER`]. Both effects are encoded
    /// before anything is written, so on error the payload is unchanged.
    /// Valid-flag bits are left to the report builder.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerEffectError::BufferTooSmall`] when `payload` is
    /// shorter than [`set_state_offsets::MIN_PAYLOAD_LEN`], or the first
    /// encoding error of either effect.
    pub fn write_set_state_triggers(&self, payload: &mut [u8]) -> TriggerEffectResult<()> {
        if payload.len() < set_state_offsets::MIN_PAYLOAD_LEN {
            return Err(TriggerEffectError::BufferTooSmall {
                offset: set_state_offsets::LEFT_TRIGGER,
                len: payload.len(),
            });
        }
        let right = self.right.encode()?;
        let left = self.left.encode()?;
        right.write_to(payload, set_state_offsets::RIGHT_TRIGGER)?;
        left.write_to(payload, set_state_offsets::LEFT_TRIGGER)?;
        Ok(())
    }
}
