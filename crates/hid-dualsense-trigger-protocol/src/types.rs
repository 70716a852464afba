//! Trigger effect family classification.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};

use crate::error::TriggerEffectError;
use crate::ids::effect_codes;

/// Trust tier of an effect family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTier {
    /// Documented effects with firmware-side parameter protection.
    Official,
    /// Stable but undocumented effects without parameter protection.
    UnofficialUnique,
    /// Leftover effects with raw, unvalidated parameters.
    Simple,
    /// Leftover effects with partially validated parameters.
    Limited,
    /// Calibration routines that corrupt the trigger state until reset.
    Debug,
}

/// Raw effect code written to byte 0 of an effect block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TriggerEffectType {
    Off = effect_codes::OFF,
    Feedback = effect_codes::FEEDBACK,
    Weapon = effect_codes::WEAPON,
    Vibration = effect_codes::VIBRATION,

    Bow = effect_codes::BOW,
    Galloping = effect_codes::GALLOPING,
    Machine = effect_codes::MACHINE,

    SimpleFeedback = effect_codes::SIMPLE_FEEDBACK,
    SimpleWeapon = effect_codes::SIMPLE_WEAPON,
    SimpleVibration = effect_codes::SIMPLE_VIBRATION,

    LimitedFeedback = effect_codes::LIMITED_FEEDBACK,
    LimitedWeapon = effect_codes::LIMITED_WEAPON,

    DebugFc = effect_codes::DEBUG_FC,
    DebugFd = effect_codes::DEBUG_FD,
    DebugFe = effect_codes::DEBUG_FE,
}

impl TriggerEffectType {
    /// Every known code, in wire-value tier order.
    pub const ALL: [Self; 15] = [
        Self::Off,
        Self::Feedback,
        Self::Weapon,
        Self::Vibration,
        Self::Bow,
        Self::Galloping,
        Self::Machine,
        Self::SimpleFeedback,
        Self::SimpleWeapon,
        Self::SimpleVibration,
        Self::LimitedFeedback,
        Self::LimitedWeapon,
        Self::DebugFc,
        Self::DebugFd,
        Self::DebugFe,
    ];

    /// Wire byte for this effect.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Classify a wire byte. Returns `None` for codes with no known effect.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }

    /// Trust tier of this effect.
    pub fn tier(self) -> EffectTier {
        match self {
            Self::Off | Self::Feedback | Self::Weapon | Self::Vibration => EffectTier::Official,
            Self::Bow | Self::Galloping | Self::Machine => EffectTier::UnofficialUnique,
            Self::SimpleFeedback | Self::SimpleWeapon | Self::SimpleVibration => {
                EffectTier::Simple
            }
            Self::LimitedFeedback | Self::LimitedWeapon => EffectTier::Limited,
            Self::DebugFc | Self::DebugFd | Self::DebugFe => EffectTier::Debug,
        }
    }

    /// `false` for the debug tier, which no encoder may emit.
    pub fn is_emittable(self) -> bool {
        self.tier() != EffectTier::Debug
    }
}

impl TryFrom<u8> for TriggerEffectType {
    type Error = TriggerEffectError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(TriggerEffectError::UnknownEffectCode(code))
    }
}

impl From<TriggerEffectType> for u8 {
    fn from(ty: TriggerEffectType) -> Self {
        ty.code()
    }
}
