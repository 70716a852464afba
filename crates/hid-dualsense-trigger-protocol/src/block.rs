//! The 11-byte adaptive-trigger effect block.
//!
//! Layout:
//! - Byte 0: effect code (see [`crate::ids::effect_codes`])
//! - Bytes 1–10: effect parameters, packed per effect family
//!
//! Blocks are only produced by the encoders in this crate or parsed from
//! captured reports with [`EffectBlock::read_from`], so a block never carries
//! a debug-tier code.

#![deny(static_mut_refs)]

use crate::error::{TriggerEffectError, TriggerEffectResult};
use crate::ids::{EFFECT_BLOCK_LEN, ZONE_COUNT};
use crate::types::TriggerEffectType;
use crate::zones::ZoneIntensities;

/// One encoded trigger effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectBlock([u8; EFFECT_BLOCK_LEN]);

impl EffectBlock {
    /// The off block: `[0x05, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]`.
    pub const OFF: Self = Self::header_only(TriggerEffectType::Off);

    pub(crate) const fn from_raw(bytes: [u8; EFFECT_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    const fn header_only(ty: TriggerEffectType) -> Self {
        let mut bytes = [0u8; EFFECT_BLOCK_LEN];
        bytes[0] = ty.code();
        Self(bytes)
    }

    /// Code, zone mask and packed intensity field; bytes 7–10 zero except
    /// `byte9`.
    pub(crate) fn zoned(ty: TriggerEffectType, zones: &ZoneIntensities, byte9: u8) -> Self {
        let mask = zones.active_zones().to_le_bytes();
        let values = zones.packed_values().to_le_bytes();
        Self([
            ty.code(),
            mask[0],
            mask[1],
            values[0],
            values[1],
            values[2],
            values[3],
            0x00,
            0x00,
            byte9,
            0x00,
        ])
    }

    /// Code, a two-zone mask and up to three parameter bytes at 3–5.
    pub(crate) fn ranged(ty: TriggerEffectType, mask: u16, params: [u8; 3]) -> Self {
        let mask = mask.to_le_bytes();
        Self([
            ty.code(),
            mask[0],
            mask[1],
            params[0],
            params[1],
            params[2],
            0x00,
            0x00,
            0x00,
            0x00,
            0x00,
        ])
    }

    /// Code followed by raw parameter bytes at 1–3.
    pub(crate) fn raw_params(ty: TriggerEffectType, params: [u8; 3]) -> Self {
        Self([
            ty.code(),
            params[0],
            params[1],
            params[2],
            0x00,
            0x00,
            0x00,
            0x00,
            0x00,
            0x00,
            0x00,
        ])
    }

    /// Wire bytes.
    pub const fn as_bytes(&self) -> &[u8; EFFECT_BLOCK_LEN] {
        &self.0
    }

    /// Consume into wire bytes.
    pub const fn into_bytes(self) -> [u8; EFFECT_BLOCK_LEN] {
        self.0
    }

    /// Effect code (byte 0).
    pub const fn code(&self) -> u8 {
        self.0[0]
    }

    /// Effect family of byte 0.
    pub fn effect_type(&self) -> Option<TriggerEffectType> {
        TriggerEffectType::from_code(self.code())
    }

    /// Zone activation mask (bytes 1–2, little-endian).
    ///
    /// Only meaningful for the zone-based official and unofficial families.
    pub fn active_zones(&self) -> u16 {
        u16::from_le_bytes([self.0[1], self.0[2]])
    }

    /// Per-zone 3-bit values unpacked from bytes 3–6.
    ///
    /// Only meaningful for Feedback and Vibration blocks.
    pub fn zone_values(&self) -> [u8; ZONE_COUNT] {
        ZoneIntensities::unpack(u32::from_le_bytes([
            self.0[3], self.0[4], self.0[5], self.0[6],
        ]))
    }

    /// Copy the block into `dest[offset..offset + 11]`.
    ///
    /// The destination is untouched when the window does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerEffectError::BufferTooSmall`] when the window runs
    /// past the end of `dest`.
    pub fn write_to(&self, dest: &mut [u8], offset: usize) -> TriggerEffectResult<()> {
        let len = dest.len();
        let window = offset
            .checked_add(EFFECT_BLOCK_LEN)
            .and_then(|end| dest.get_mut(offset..end))
            .ok_or(TriggerEffectError::BufferTooSmall { offset, len })?;
        window.copy_from_slice(&self.0);
        Ok(())
    }

    /// Parse the block at `src[offset..offset + 11]`.
    ///
    /// Unknown codes and debug-tier codes are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerEffectError::BufferTooSmall`] when the window runs
    /// past the end of `src`, [`TriggerEffectError::UnknownEffectCode`] or
    /// [`TriggerEffectError::DebugEffectCode`] for a code that is never
    /// emitted.
    pub fn read_from(src: &[u8], offset: usize) -> TriggerEffectResult<Self> {
        let window = offset
            .checked_add(EFFECT_BLOCK_LEN)
            .and_then(|end| src.get(offset..end))
            .ok_or(TriggerEffectError::BufferTooSmall {
                offset,
                len: src.len(),
            })?;
        let mut bytes = [0u8; EFFECT_BLOCK_LEN];
        bytes.copy_from_slice(window);
        let ty = TriggerEffectType::try_from(bytes[0])?;
        if !ty.is_emittable() {
            return Err(TriggerEffectError::DebugEffectCode(bytes[0]));
        }
        Ok(Self(bytes))
    }
}

impl Default for EffectBlock {
    fn default() -> Self {
        Self::OFF
    }
}

impl AsRef<[u8]> for EffectBlock {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EffectBlock> for [u8; EFFECT_BLOCK_LEN] {
    fn from(block: EffectBlock) -> Self {
        block.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_block_layout() {
        assert_eq!(
            EffectBlock::OFF.as_bytes(),
            &[0x05, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(EffectBlock::default(), EffectBlock::OFF);
    }

    #[test]
    fn test_write_to_offset_only_touches_window() -> Result<(), Box<dyn std::error::Error>> {
        let mut buf = [0xAAu8; 16];
        EffectBlock::OFF.write_to(&mut buf, 3)?;
        assert_eq!(&buf[..3], &[0xAA; 3]);
        assert_eq!(buf[3], 0x05);
        assert_eq!(&buf[4..14], &[0u8; 10]);
        assert_eq!(&buf[14..], &[0xAA; 2]);
        Ok(())
    }

    #[test]
    fn test_write_to_short_buffer_is_rejected_untouched() {
        let mut buf = [0xAAu8; 12];
        assert_eq!(
            EffectBlock::OFF.write_to(&mut buf, 2),
            Err(TriggerEffectError::BufferTooSmall { offset: 2, len: 12 })
        );
        assert_eq!(buf, [0xAA; 12]);
    }

    #[test]
    fn test_write_to_offset_overflow_is_rejected() {
        let mut buf = [0u8; 11];
        assert!(matches!(
            EffectBlock::OFF.write_to(&mut buf, usize::MAX),
            Err(TriggerEffectError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_read_from_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let zones = ZoneIntensities::fill_from(4, 5);
        let block = EffectBlock::zoned(TriggerEffectType::Vibration, &zones, 40);
        let mut buf = [0u8; 20];
        block.write_to(&mut buf, 5)?;
        let parsed = EffectBlock::read_from(&buf, 5)?;
        assert_eq!(parsed, block);
        assert_eq!(parsed.effect_type(), Some(TriggerEffectType::Vibration));
        assert_eq!(parsed.active_zones(), 0x03F0);
        assert_eq!(parsed.zone_values(), [0, 0, 0, 0, 5, 5, 5, 5, 5, 5]);
        assert_eq!(parsed.as_bytes()[9], 40);
        Ok(())
    }

    #[test]
    fn test_read_from_rejects_debug_and_unknown_codes() {
        let mut buf = [0u8; 11];
        buf[0] = 0xFD;
        assert_eq!(
            EffectBlock::read_from(&buf, 0),
            Err(TriggerEffectError::DebugEffectCode(0xFD))
        );
        buf[0] = 0x30;
        assert_eq!(
            EffectBlock::read_from(&buf, 0),
            Err(TriggerEffectError::UnknownEffectCode(0x30))
        );
    }

    #[test]
    fn test_ranged_layout() {
        let block = EffectBlock::ranged(TriggerEffectType::Machine, 0x0204, [0x11, 0x22, 0x33]);
        assert_eq!(
            block.as_bytes(),
            &[0x27, 0x04, 0x02, 0x11, 0x22, 0x33, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_raw_params_layout() {
        let block = EffectBlock::raw_params(TriggerEffectType::SimpleWeapon, [1, 2, 3]);
        assert_eq!(block.as_bytes(), &[0x02, 1, 2, 3, 0, 0, 0, 0, 0, 0, 0]);
    }
}
