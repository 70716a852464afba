//! DualSense adaptive-trigger effect encoding.
//!
//! This crate is intentionally I/O-free and allocation-free. It turns effect
//! parameters into the 11-byte trigger effect block that a DualSense
//! set-state output report carries once per trigger, and nothing else: no
//! device access, no report framing, no effect sequencing.
//!
//! ## Verification sources
//!
//! Effect codes and parameter layouts follow the community reverse
//! engineering of the trigger firmware (Nielk1's `TriggerEffectGenerator`
//! notes), cross-checked against captured controller traffic. Set-state
//! offsets follow the 47-byte set-state payload: right trigger block at
//! bytes 10–20, left at 21–31.
//!
//! ## Effect tiers
//!
//! - **Official** ([`official`]): Off, Feedback, Weapon, Vibration and the
//!   multi-zone / slope variants. Firmware protects these parameters.
//! - **Unofficial** ([`unofficial`]): Bow, Galloping, Machine. Stable but
//!   undocumented; validated here only.
//! - **Simple / Limited** ([`legacy`]): raw-parameter leftovers.
//! - **Debug**: calibration codes `0xFC`–`0xFE`. Never emitted, rejected on
//!   parse.
//!
//! Two adapters sit on top: [`apple`] takes normalized `[0, 1]` floats and
//! [`rewasd`] reproduces a third-party remapper's fixed presets.
//!
//! ## Zero-magnitude inputs
//!
//! A validated parameter set that would produce no force encodes as
//! [`EffectBlock::OFF`] rather than failing. The Simple family and the
//! reWASD presets skip this normalization.

#![deny(static_mut_refs)]

pub mod apple;
pub mod block;
pub mod effect;
pub mod error;
pub mod ids;
pub mod legacy;
pub mod official;
pub mod rewasd;
pub mod types;
pub mod unofficial;
pub mod zones;

pub use apple::AppleTriggerMode;
pub use block::EffectBlock;
pub use effect::{EncodeEffect, TriggerEffect, TriggerPair};
pub use error::{TriggerEffectError, TriggerEffectResult};
pub use ids::{
    EFFECT_BLOCK_LEN, MAX_ZONE, SONY_VENDOR_ID, ZONE_COUNT, effect_codes, product_ids,
    set_state_offsets,
};
pub use legacy::{
    limited_feedback, limited_weapon, simple_feedback, simple_vibration, simple_weapon,
};
pub use official::{
    feedback, multiple_position_feedback, multiple_position_vibration, off, slope_feedback,
    vibration, weapon,
};
pub use rewasd::ReWasdPreset;
pub use types::{EffectTier, TriggerEffectType};
pub use unofficial::{bow, galloping, machine};
pub use zones::ZoneIntensities;
