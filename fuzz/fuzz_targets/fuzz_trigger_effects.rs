//! Fuzzes every trigger effect encoder, the block parser and profile loading.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_trigger_effects
#![no_main]
use hid_dualsense_trigger_protocol::{
    AppleTriggerMode, EFFECT_BLOCK_LEN, EffectBlock, EncodeEffect, ReWasdPreset, TriggerEffect,
    TriggerEffectType, TriggerPair,
};
use libfuzzer_sys::fuzz_target;

fn param(data: &[u8], index: usize) -> u8 {
    data.get(index).copied().unwrap_or(0)
}

fn zones(data: &[u8], start: usize) -> [u8; 10] {
    std::array::from_fn(|zone| param(data, start + zone))
}

fn effect_from(data: &[u8]) -> TriggerEffect {
    let p = |i| param(data, i + 1);
    match param(data, 0) % 15 {
        0 => TriggerEffect::Off,
        1 => TriggerEffect::Feedback {
            position: p(0),
            strength: p(1),
        },
        2 => TriggerEffect::Weapon {
            start_position: p(0),
            end_position: p(1),
            strength: p(2),
        },
        3 => TriggerEffect::Vibration {
            position: p(0),
            amplitude: p(1),
            frequency: p(2),
        },
        4 => TriggerEffect::MultiplePositionFeedback {
            strength: zones(data, 1),
        },
        5 => TriggerEffect::SlopeFeedback {
            start_position: p(0),
            end_position: p(1),
            start_strength: p(2),
            end_strength: p(3),
        },
        6 => TriggerEffect::MultiplePositionVibration {
            frequency: p(0),
            amplitude: zones(data, 2),
        },
        7 => TriggerEffect::Bow {
            start_position: p(0),
            end_position: p(1),
            strength: p(2),
            snap_force: p(3),
        },
        8 => TriggerEffect::Galloping {
            start_position: p(0),
            end_position: p(1),
            first_foot: p(2),
            second_foot: p(3),
            frequency: p(4),
        },
        9 => TriggerEffect::Machine {
            start_position: p(0),
            end_position: p(1),
            amplitude_a: p(2),
            amplitude_b: p(3),
            frequency: p(4),
            period: p(5),
        },
        10 => TriggerEffect::SimpleFeedback {
            position: p(0),
            strength: p(1),
        },
        11 => TriggerEffect::SimpleWeapon {
            start_position: p(0),
            end_position: p(1),
            strength: p(2),
        },
        12 => TriggerEffect::SimpleVibration {
            position: p(0),
            amplitude: p(1),
            frequency: p(2),
        },
        13 => TriggerEffect::LimitedFeedback {
            position: p(0),
            strength: p(1),
        },
        _ => TriggerEffect::LimitedWeapon {
            start_position: p(0),
            end_position: p(1),
            strength: p(2),
        },
    }
}

fn assert_emittable(block: &EffectBlock) {
    let ty = TriggerEffectType::from_code(block.code());
    assert!(
        ty.is_some_and(TriggerEffectType::is_emittable),
        "emitted code 0x{:02X}",
        block.code()
    );
}

fuzz_target!(|data: &[u8]| {
    // Native effects: never panic, never a debug code, all-or-nothing writes.
    let effect = effect_from(data);
    if let Ok(block) = effect.encode() {
        assert_emittable(&block);
    }
    let offset = usize::from(param(data, 11) % 24);
    let mut buf = [0xA5u8; 32];
    if !effect.write_into(&mut buf, offset) {
        assert_eq!(buf, [0xA5u8; 32]);
    }

    // Normalized adapter with arbitrary float bit patterns (NaN, infinities).
    if data.len() >= 12 {
        let f = |i: usize| {
            f32::from_le_bytes([
                param(data, i),
                param(data, i + 1),
                param(data, i + 2),
                param(data, i + 3),
            ])
        };
        let mode = AppleTriggerMode::SlopeFeedback {
            start_position: f(0),
            end_position: f(4),
            start_strength: f(8),
            end_strength: f(0),
        };
        if let Ok(block) = mode.encode() {
            assert_emittable(&block);
        }
    }

    // Presets.
    let preset = ReWasdPreset::Vibration {
        strength: param(data, 0),
        frequency: param(data, 1),
    };
    if let Ok(block) = preset.encode() {
        assert_emittable(&block);
    }

    // Parsing captured blocks must reject debug codes.
    if let Ok(block) = EffectBlock::read_from(data, 0) {
        assert_emittable(&block);
        assert_eq!(block.as_bytes(), &data[..EFFECT_BLOCK_LEN]);
    }

    // Profile loading.
    if let Ok(pair) = serde_json::from_slice::<TriggerPair>(data) {
        let mut payload = [0u8; 48];
        let _ = pair.write_set_state_triggers(&mut payload);
    }
});
