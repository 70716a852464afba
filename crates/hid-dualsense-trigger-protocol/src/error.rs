//! Error types for trigger effect encoding.

use thiserror::Error;

/// Errors returned by trigger effect encoders.
///
/// Every variant is a local, pre-write failure: when an encoder returns one of
/// these the destination buffer has not been touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEffectError {
    /// A parameter fell outside its inclusive range.
    ///
    /// Ordering constraints (`end > start`) are reported as a range whose
    /// lower bound is derived from the other parameter, which may be empty.
    #[error("{parameter} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },

    /// A per-zone array did not have one entry per zone.
    #[error("Invalid zone count: expected {expected}, got {actual}")]
    InvalidZoneCount { expected: usize, actual: usize },

    /// The destination cannot hold a full effect block at the given offset.
    #[error("Destination of {len} bytes cannot hold an effect block at offset {offset}")]
    BufferTooSmall { offset: usize, len: usize },

    /// Byte 0 of a block is not a known effect code.
    #[error("Unknown trigger effect code: 0x{0:02X}")]
    UnknownEffectCode(u8),

    /// Byte 0 of a block is a debug/calibration code.
    #[error("Refusing debug trigger effect code: 0x{0:02X}")]
    DebugEffectCode(u8),
}

/// Convenience result alias for trigger effect operations.
pub type TriggerEffectResult<T> = Result<T, TriggerEffectError>;

/// Reject `value` unless `min <= value <= max`.
pub(crate) fn check_range(
    parameter: &'static str,
    value: u8,
    min: u8,
    max: u8,
) -> TriggerEffectResult<()> {
    check_range_wide(parameter, u16::from(value), u16::from(min), u16::from(max))
}

/// Wide variant for bounds derived from other parameters (e.g. `start + 100`).
pub(crate) fn check_range_wide(
    parameter: &'static str,
    value: u16,
    min: u16,
    max: u16,
) -> TriggerEffectResult<()> {
    if value < min || value > max {
        return Err(TriggerEffectError::OutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_inclusive_bounds() {
        assert_eq!(check_range("position", 0, 0, 9), Ok(()));
        assert_eq!(check_range("position", 9, 0, 9), Ok(()));
    }

    #[test]
    fn test_check_range_reports_bounds() {
        assert_eq!(
            check_range("strength", 9, 0, 8),
            Err(TriggerEffectError::OutOfRange {
                parameter: "strength",
                value: 9,
                min: 0,
                max: 8,
            })
        );
    }

    #[test]
    fn test_empty_range_always_fails() {
        // end_position when start_position == 8 and the ceiling is 8
        assert!(matches!(
            check_range_wide("end_position", 8, 9, 8),
            Err(TriggerEffectError::OutOfRange { min: 9, max: 8, .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = TriggerEffectError::OutOfRange {
            parameter: "position",
            value: 10,
            min: 0,
            max: 9,
        };
        assert_eq!(err.to_string(), "position value 10 is out of range [0, 9]");
        assert_eq!(
            TriggerEffectError::UnknownEffectCode(0x7A).to_string(),
            "Unknown trigger effect code: 0x7A"
        );
        assert_eq!(
            TriggerEffectError::BufferTooSmall { offset: 4, len: 12 }.to_string(),
            "Destination of 12 bytes cannot hold an effect block at offset 4"
        );
    }
}
