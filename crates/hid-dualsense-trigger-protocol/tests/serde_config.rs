//! Profile-format tests: effects loaded from JSON encode like their native
//! counterparts, and defaults fill in omitted preset parameters.

use hid_dualsense_trigger_protocol::{
    AppleTriggerMode, EffectBlock, EffectTier, EncodeEffect, ReWasdPreset, TriggerEffect,
    TriggerEffectType, TriggerPair, feedback, rewasd, weapon,
};

#[test]
fn test_trigger_effect_tagged_json() -> Result<(), Box<dyn std::error::Error>> {
    let effect: TriggerEffect =
        serde_json::from_str(r#"{ "type": "feedback", "position": 7, "strength": 3 }"#)?;
    assert_eq!(
        effect,
        TriggerEffect::Feedback {
            position: 7,
            strength: 3
        }
    );
    assert_eq!(effect.encode()?, feedback(7, 3)?);
    Ok(())
}

#[test]
fn test_trigger_effect_serializes_with_type_tag() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_value(TriggerEffect::Galloping {
        start_position: 0,
        end_position: 9,
        first_foot: 2,
        second_foot: 5,
        frequency: 40,
    })?;
    assert_eq!(json["type"], "galloping");
    assert_eq!(json["second_foot"], 5);
    Ok(())
}

#[test]
fn test_per_zone_arrays_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let effect = TriggerEffect::MultiplePositionVibration {
        frequency: 25,
        amplitude: [0, 0, 0, 0, 0, 4, 4, 4, 4, 4],
    };
    let json = serde_json::to_string(&effect)?;
    let back: TriggerEffect = serde_json::from_str(&json)?;
    assert_eq!(back, effect);
    Ok(())
}

#[test]
fn test_deserialization_does_not_validate() -> Result<(), Box<dyn std::error::Error>> {
    let effect: TriggerEffect = serde_json::from_str(
        r#"{ "type": "weapon", "start_position": 1, "end_position": 5, "strength": 4 }"#,
    )?;
    let mut buf = [0xEEu8; 11];
    assert!(!effect.write_into(&mut buf, 0));
    assert_eq!(buf, [0xEE; 11]);
    Ok(())
}

#[test]
fn test_wrong_zone_count_is_a_parse_error() {
    let parsed: Result<TriggerEffect, _> = serde_json::from_str(
        r#"{ "type": "multiple_position_feedback", "strength": [1, 2, 3] }"#,
    );
    assert!(matches!(parsed, Err(ref err) if err.is_data()));
}

#[test]
fn test_trigger_pair_profile() -> Result<(), Box<dyn std::error::Error>> {
    let pair: TriggerPair = serde_json::from_str(
        r#"{
            "left": { "type": "off" },
            "right": { "type": "weapon", "start_position": 2, "end_position": 8, "strength": 8 }
        }"#,
    )?;
    assert_eq!(pair.left, TriggerEffect::Off);
    let mut payload = [0u8; 32];
    pair.write_set_state_triggers(&mut payload)?;
    assert_eq!(&payload[10..21], weapon(2, 8, 8)?.as_bytes());
    assert_eq!(&payload[21..32], EffectBlock::OFF.as_bytes());
    Ok(())
}

#[test]
fn test_rewasd_preset_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let rifle: ReWasdPreset = serde_json::from_str(r#"{ "type": "rifle" }"#)?;
    assert_eq!(rifle, ReWasdPreset::rifle_default());

    let vibration: ReWasdPreset =
        serde_json::from_str(r#"{ "type": "vibration", "frequency": 12 }"#)?;
    assert_eq!(
        vibration,
        ReWasdPreset::Vibration {
            strength: rewasd::VIBRATION_DEFAULT_STRENGTH,
            frequency: 12,
        }
    );

    let choppy: ReWasdPreset = serde_json::from_str(r#"{ "type": "choppy" }"#)?;
    assert_eq!(choppy.encode()?, rewasd::choppy());
    Ok(())
}

#[test]
fn test_apple_mode_profile() -> Result<(), Box<dyn std::error::Error>> {
    let mode: AppleTriggerMode = serde_json::from_str(
        r#"{ "type": "feedback_with_start_position", "start_position": 0.0, "resistive_strength": 1.0 }"#,
    )?;
    assert_eq!(mode.encode()?, feedback(0, 8)?);
    Ok(())
}

#[test]
fn test_apple_pair_profile() -> Result<(), Box<dyn std::error::Error>> {
    let pair: TriggerPair<AppleTriggerMode> = serde_json::from_str(
        r#"{
            "left": { "type": "off" },
            "right": { "type": "vibration_with_start_position", "start_position": 0.0, "amplitude": 1.0, "frequency": 0.2 }
        }"#,
    )?;
    let mut payload = [0u8; 32];
    pair.write_set_state_triggers(&mut payload)?;
    assert_eq!(payload[10], 0x26);
    assert_eq!(payload[19], 51);
    Ok(())
}

#[test]
fn test_effect_type_and_tier_names() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        serde_json::to_string(&TriggerEffectType::SimpleVibration)?,
        r#""simple_vibration""#
    );
    assert_eq!(
        serde_json::to_string(&EffectTier::UnofficialUnique)?,
        r#""unofficial_unique""#
    );
    let ty: TriggerEffectType = serde_json::from_str(r#""limited_weapon""#)?;
    assert_eq!(ty.code(), 0x12);
    Ok(())
}
