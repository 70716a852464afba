//! Insta snapshot tests pinning the exact wire bytes of each effect family.
//!
//! One canonical parameter set per encoder. A changed snapshot means the
//! block layout changed; check it against controller captures before
//! accepting.

use hid_dualsense_trigger_protocol::rewasd;
use hid_dualsense_trigger_protocol::{
    EffectBlock, TriggerEffect, TriggerPair, apple, bow, feedback, galloping, limited_weapon,
    machine, set_state_offsets, simple_vibration, slope_feedback, vibration, weapon,
};
use insta::assert_snapshot;

fn wire(block: EffectBlock) -> String {
    format!("{:02X?}", block.as_bytes())
}

#[test]
fn test_snapshot_off() {
    assert_snapshot!("off", wire(EffectBlock::OFF));
}

#[test]
fn test_snapshot_feedback() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("feedback_zone7_strength3", wire(feedback(7, 3)?));
    Ok(())
}

#[test]
fn test_snapshot_weapon() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("weapon_2_8_full", wire(weapon(2, 8, 8)?));
    Ok(())
}

#[test]
fn test_snapshot_vibration() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("vibration_full_travel_30hz", wire(vibration(0, 8, 30)?));
    Ok(())
}

#[test]
fn test_snapshot_slope_feedback_rising() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("slope_feedback_0_9_1_8", wire(slope_feedback(0, 9, 1, 8)?));
    Ok(())
}

#[test]
fn test_snapshot_slope_feedback_falling() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("slope_feedback_falling", wire(slope_feedback(2, 5, 8, 2)?));
    Ok(())
}

#[test]
fn test_snapshot_apple_multiple_position_vibration() -> Result<(), Box<dyn std::error::Error>> {
    let amplitudes = [0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0];
    assert_snapshot!(
        "multiple_position_vibration",
        wire(apple::set_mode_vibration(&amplitudes, 0.2)?)
    );
    Ok(())
}

#[test]
fn test_snapshot_bow() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("bow", wire(bow(1, 4, 8, 2)?));
    Ok(())
}

#[test]
fn test_snapshot_galloping() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("galloping", wire(galloping(0, 9, 2, 5, 40)?));
    Ok(())
}

#[test]
fn test_snapshot_machine() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("machine", wire(machine(1, 9, 7, 3, 5, 15)?));
    Ok(())
}

#[test]
fn test_snapshot_simple_vibration() {
    assert_snapshot!("simple_vibration", wire(simple_vibration(3, 100, 40)));
}

#[test]
fn test_snapshot_limited_weapon() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!("limited_weapon", wire(limited_weapon(0x10, 0x74, 10)?));
    Ok(())
}

#[test]
fn test_snapshot_rewasd_full_press() {
    assert_snapshot!("rewasd_full_press", wire(rewasd::full_press()));
}

#[test]
fn test_snapshot_rewasd_choppy() {
    assert_snapshot!("rewasd_choppy", wire(rewasd::choppy()));
}

#[test]
fn test_snapshot_rewasd_rifle_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!(
        "rewasd_rifle_default",
        wire(rewasd::rifle(rewasd::RIFLE_DEFAULT_FREQUENCY)?)
    );
    Ok(())
}

#[test]
fn test_snapshot_rewasd_vibration_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_snapshot!(
        "rewasd_vibration_default",
        wire(rewasd::vibration(
            rewasd::VIBRATION_DEFAULT_STRENGTH,
            rewasd::VIBRATION_DEFAULT_FREQUENCY
        )?)
    );
    Ok(())
}

#[test]
fn test_snapshot_set_state_trigger_pair() -> Result<(), Box<dyn std::error::Error>> {
    let pair = TriggerPair::new(
        TriggerEffect::Feedback {
            position: 0,
            strength: 8,
        },
        TriggerEffect::Weapon {
            start_position: 2,
            end_position: 8,
            strength: 8,
        },
    );
    let mut payload = [0u8; set_state_offsets::MIN_PAYLOAD_LEN];
    pair.write_set_state_triggers(&mut payload)?;
    assert_snapshot!("set_state_trigger_pair", format!("{payload:02X?}"));
    Ok(())
}
