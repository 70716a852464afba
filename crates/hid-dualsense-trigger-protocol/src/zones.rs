//! Zone mask and packed per-zone intensity field.
//!
//! Trigger travel is split into [`ZONE_COUNT`] zones. Zone-based effects
//! carry two fields after the effect code:
//!
//! - Bytes 1–2: 10-bit activation mask, little-endian (bit N = zone N)
//! - Bytes 3–6: 3-bit intensity per zone, zone 0 in the lowest bits,
//!   little-endian
//!
//! The firmware reserves 40 bits for the intensity field. Ten 3-bit slots
//! occupy bits 0–29, so the low 32 bits are written and bytes 7–8 stay zero.

#![deny(static_mut_refs)]

use crate::ids::ZONE_COUNT;

const VALUE_MASK: u8 = 0x07;
const BITS_PER_ZONE: usize = 3;

/// Activation mask plus packed 3-bit intensities for the ten zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneIntensities {
    active_zones: u16,
    packed_values: u32,
}

impl ZoneIntensities {
    /// Mark `zone` active with the given 3-bit value. Bits above the low three
    /// are discarded; zones past the last one are ignored.
    pub fn set(&mut self, zone: usize, value: u8) {
        if zone >= ZONE_COUNT {
            return;
        }
        self.packed_values |= u32::from(value & VALUE_MASK) << (BITS_PER_ZONE * zone);
        self.active_zones |= 1u16 << zone;
    }

    /// Zones `start..=9` all active with `value`.
    pub fn fill_from(start: u8, value: u8) -> Self {
        let mut zones = Self::default();
        for zone in usize::from(start)..ZONE_COUNT {
            zones.set(zone, value);
        }
        zones
    }

    /// Build from one-based per-zone levels: `0` leaves the zone inactive,
    /// `n > 0` stores `n - 1` (masked to 3 bits).
    pub fn from_levels(levels: &[u8; ZONE_COUNT]) -> Self {
        let mut zones = Self::default();
        for (zone, &level) in levels.iter().enumerate() {
            if level > 0 {
                zones.set(zone, level.wrapping_sub(1));
            }
        }
        zones
    }

    /// `true` when no zone is active.
    pub fn is_empty(&self) -> bool {
        self.active_zones == 0
    }

    /// 10-bit activation mask.
    pub fn active_zones(&self) -> u16 {
        self.active_zones
    }

    /// Packed intensity field.
    pub fn packed_values(&self) -> u32 {
        self.packed_values
    }

    /// Unpack a 32-bit intensity field into one 3-bit value per zone.
    pub fn unpack(packed_values: u32) -> [u8; ZONE_COUNT] {
        let mut values = [0u8; ZONE_COUNT];
        for (zone, value) in values.iter_mut().enumerate() {
            let bits = (packed_values >> (BITS_PER_ZONE * zone)) & u32::from(VALUE_MASK);
            *value = u8::try_from(bits).unwrap_or(0);
        }
        values
    }
}

/// Mask with only the `start` and `end` zone bits set.
///
/// Callers validate both zones first; out-of-range zones contribute no bit.
pub fn two_zone_mask(start: u8, end: u8) -> u16 {
    zone_bit(start) | zone_bit(end)
}

/// Two 3-bit values in one byte: `low` in bits 0–2, `high` in bits 3–5.
pub fn pack_pair(low: u8, high: u8) -> u8 {
    (low & VALUE_MASK) | ((high & VALUE_MASK) << BITS_PER_ZONE)
}

fn zone_bit(zone: u8) -> u16 {
    if usize::from(zone) < ZONE_COUNT {
        1u16 << zone
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_from_zone_seven() {
        let zones = ZoneIntensities::fill_from(7, 2);
        assert_eq!(zones.active_zones(), 0b11_1000_0000);
        let values = ZoneIntensities::unpack(zones.packed_values());
        assert_eq!(values, [0, 0, 0, 0, 0, 0, 0, 2, 2, 2]);
    }

    #[test]
    fn test_fill_from_zero_covers_all_zones() {
        let zones = ZoneIntensities::fill_from(0, 7);
        assert_eq!(zones.active_zones(), 0x03FF);
        assert_eq!(zones.packed_values(), 0x3FFF_FFFF);
    }

    #[test]
    fn test_fill_from_past_last_zone_is_empty() {
        assert!(ZoneIntensities::fill_from(10, 3).is_empty());
    }

    #[test]
    fn test_from_levels_skips_zero_zones() {
        let zones = ZoneIntensities::from_levels(&[0, 1, 0, 8, 0, 0, 0, 0, 0, 3]);
        assert_eq!(zones.active_zones(), (1 << 1) | (1 << 3) | (1 << 9));
        let values = ZoneIntensities::unpack(zones.packed_values());
        assert_eq!(values, [0, 0, 0, 7, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_from_levels_masks_oversized_levels() {
        // 9 - 1 = 8 = 0b1000, only the low three bits survive
        let zones = ZoneIntensities::from_levels(&[9, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(zones.active_zones(), 0x0001);
        assert_eq!(zones.packed_values(), 0);
    }

    #[test]
    fn test_set_ignores_zone_out_of_range() {
        let mut zones = ZoneIntensities::default();
        zones.set(10, 7);
        assert!(zones.is_empty());
        assert_eq!(zones.packed_values(), 0);
    }

    #[test]
    fn test_two_zone_mask() {
        assert_eq!(two_zone_mask(2, 8), 0x0104);
        assert_eq!(two_zone_mask(0, 9), 0x0201);
        assert_eq!(two_zone_mask(0, 12), 0x0001);
    }

    #[test]
    fn test_pack_pair() {
        assert_eq!(pack_pair(0, 0), 0x00);
        assert_eq!(pack_pair(7, 7), 0x3F);
        assert_eq!(pack_pair(2, 5), 0b10_1010);
        assert_eq!(pack_pair(0xFF, 0x08), 0x07);
    }
}
