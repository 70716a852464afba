//! DualSense USB identifiers and adaptive-trigger wire constants.
//!
//! Effect codes were captured from controller output reports and
//! cross-checked against the community effect-generator research notes
//! (`ExtendInput.DataTools.DualSense`). The bit pattern of each code is
//! listed next to it; the high nibble groups the codes by firmware path.
//!
//! | Tier | Codes |
//! |------|-------|
//! | Official | `0x05`, `0x21`, `0x25`, `0x26` |
//! | Unofficial | `0x22`, `0x23`, `0x27` |
//! | Simple | `0x01`, `0x02`, `0x06` |
//! | Limited | `0x11`, `0x12` |
//! | Debug | `0xFC`, `0xFD`, `0xFE` |

#![deny(static_mut_refs)]

/// Sony Interactive Entertainment USB vendor ID.
pub const SONY_VENDOR_ID: u16 = 0x054C;

/// DualSense product IDs.
pub mod product_ids {
    /// DualSense (CFI-ZCT1).
    pub const DUALSENSE: u16 = 0x0CE6;
    /// DualSense Edge (CFI-ZCP1).
    pub const DUALSENSE_EDGE: u16 = 0x0DF2;
}

/// Wire size of one adaptive-trigger effect block.
pub const EFFECT_BLOCK_LEN: usize = 11;

/// Number of discrete trigger travel zones.
pub const ZONE_COUNT: usize = 10;

/// Highest zone index (most depressed).
pub const MAX_ZONE: u8 = 9;

/// Effect code bytes carried in byte 0 of an effect block.
pub mod effect_codes {
    /// `00 00 0 101`: effect off, trigger stop returns to neutral.
    pub const OFF: u8 = 0x05;
    /// `00 10 0 001`: zone resistance.
    pub const FEEDBACK: u8 = 0x21;
    /// `00 10 0 101`: start/stop resistance (weapon).
    pub const WEAPON: u8 = 0x25;
    /// `00 10 0 110`: zone vibration.
    pub const VIBRATION: u8 = 0x26;

    /// `00 10 0 010`: weapon with snap-back force.
    pub const BOW: u8 = 0x22;
    /// `00 10 0 011`: two-foot rhythmic oscillation.
    pub const GALLOPING: u8 = 0x23;
    /// `00 10 0 111`: vibration oscillating between two amplitudes.
    pub const MACHINE: u8 = 0x27;

    /// `00 00 0 001`: legacy resistance, raw parameters.
    pub const SIMPLE_FEEDBACK: u8 = 0x01;
    /// `00 00 0 010`: legacy weapon, raw parameters.
    pub const SIMPLE_WEAPON: u8 = 0x02;
    /// `00 00 0 110`: legacy vibration, raw parameters.
    pub const SIMPLE_VIBRATION: u8 = 0x06;

    /// `00 01 0 001`: legacy resistance with strength capped at 10.
    pub const LIMITED_FEEDBACK: u8 = 0x11;
    /// `00 01 0 010`: legacy weapon with bounded positions.
    pub const LIMITED_WEAPON: u8 = 0x12;

    /// `11 11 1 100`: calibration. Corrupts trigger state until reset.
    pub const DEBUG_FC: u8 = 0xFC;
    /// `11 11 1 101`: calibration. Corrupts trigger state until reset.
    pub const DEBUG_FD: u8 = 0xFD;
    /// `11 11 1 110`: calibration. Corrupts trigger state until reset.
    pub const DEBUG_FE: u8 = 0xFE;
}

/// Byte offsets of the trigger effect blocks inside the set-state payload
/// (the output report body that follows the report ID).
///
/// The payload's first two bytes carry the valid-flag bits; bits 2 and 3 of
/// byte 0 enable the right and left trigger blocks respectively.
pub mod set_state_offsets {
    /// Right trigger (R2) effect block.
    pub const RIGHT_TRIGGER: usize = 10;
    /// Left trigger (L2) effect block.
    pub const LEFT_TRIGGER: usize = 21;
    /// Minimum payload length holding both blocks.
    pub const MIN_PAYLOAD_LEN: usize = LEFT_TRIGGER + super::EFFECT_BLOCK_LEN;
}
