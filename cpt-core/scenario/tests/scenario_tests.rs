//! 场景解析模块测试

use cpt_scenario::*;

#[test]
fn test_step_count_matches_timestamp_lines() {
    let text = "08:00:00\n(A,V1,T,7)\n09:00:00\n10:30:00\n(B,T1,O,0)\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].timestamp, "08:00:00");
    assert_eq!(steps[1].timestamp, "09:00:00");
    assert_eq!(steps[2].timestamp, "10:30:00");
}

#[test]
fn test_action_count_per_step() {
    let text = "08:00:00\n(A,V1,T,7)(B,T2,O,0)(B,T3,O,1)\n09:00:00\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(steps[0].actions.len(), 3);
    assert_eq!(steps[1].actions.len(), 0);
}

#[test]
fn test_timestamp_followed_by_timestamp_yields_empty_step() {
    let text = "08:00:00\n08:30:00\n(A,V1,T,7)\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(steps.len(), 2);
    assert!(steps[0].actions.is_empty());
    assert_eq!(steps[1].actions.len(), 1);
}

#[test]
fn test_trailing_timestamp_yields_empty_step() {
    let steps = parse_scenario("08:00:00\n(A,V1,T,7)\n09:00:00\n").unwrap();

    assert_eq!(steps.len(), 2);
    assert!(steps[1].actions.is_empty());
}

#[test]
fn test_actions_preserve_source_order() {
    let text = "08:00:00\n(B,T2,O,0)(A,V1,T,7)(B,T2,O,1)\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(
        steps[0].actions,
        vec![
            "(B,T2,O,0)".to_string(),
            "(A,V1,T,7)".to_string(),
            "(B,T2,O,1)".to_string(),
        ]
    );
}

#[test]
fn test_blank_lines_ignored() {
    let text = "\n08:00:00\n\n(A,V1,T,7)\n\n\n08:30:00\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].actions.len(), 1);
}

#[test]
fn test_decode_slow_charging_request() {
    let action = Action::decode("(A,V1,T,7)").unwrap();
    assert_eq!(
        action,
        Action::ChargingRequest {
            user: "V1".to_string(),
            mode: ChargingMode::Slow,
            capacity: 7.0,
        }
    );
}

#[test]
fn test_decode_fast_charging_request() {
    // 模式字段 T 之外的取值一律映射为快充
    let action = Action::decode("(A,V1,F,7)").unwrap();
    assert!(matches!(
        action,
        Action::ChargingRequest {
            mode: ChargingMode::Fast,
            ..
        }
    ));
}

#[test]
fn test_decode_pile_fault_and_recovery() {
    assert_eq!(
        Action::decode("(B,T2,O,0)").unwrap(),
        Action::PileFault {
            pile_id: "T2".to_string()
        }
    );
    assert_eq!(
        Action::decode("(B,T2,O,1)").unwrap(),
        Action::PileRecovery {
            pile_id: "T2".to_string()
        }
    );
}

#[test]
fn test_decode_wrong_field_count() {
    assert!(matches!(
        Action::decode("(A,V1,T)"),
        Err(ActionError::Format(_))
    ));
    assert!(matches!(
        Action::decode("(A,V1,T,7,8)"),
        Err(ActionError::Format(_))
    ));
}

#[test]
fn test_decode_unknown_command_type() {
    assert!(matches!(
        Action::decode("(C,V1,T,7)"),
        Err(ActionError::UnknownCommand(_))
    ));
}

#[test]
fn test_decode_unknown_pile_operation() {
    assert!(matches!(
        Action::decode("(B,T2,O,2)"),
        Err(ActionError::UnknownOperation(_))
    ));
}

#[test]
fn test_decode_invalid_capacity() {
    assert!(matches!(
        Action::decode("(A,V1,T,abc)"),
        Err(ActionError::Capacity(_))
    ));
    assert!(matches!(
        Action::decode("(A,V1,T,-7)"),
        Err(ActionError::Capacity(_))
    ));
}

#[test]
fn test_end_to_end_sample_scenario() {
    let text = "08:00:00\n(A,V1,T,7)(B,T2,O,0)\n08:30:00\n(B,T2,O,1)\n";
    let steps = parse_scenario(text).unwrap();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].timestamp, "08:00:00");
    assert_eq!(steps[0].actions.len(), 2);
    assert_eq!(steps[1].timestamp, "08:30:00");
    assert_eq!(steps[1].actions.len(), 1);

    let decoded: Vec<Action> = steps
        .iter()
        .flat_map(|step| step.actions.iter())
        .map(|token| Action::decode(token).unwrap())
        .collect();

    assert_eq!(
        decoded,
        vec![
            Action::ChargingRequest {
                user: "V1".to_string(),
                mode: ChargingMode::Slow,
                capacity: 7.0,
            },
            Action::PileFault {
                pile_id: "T2".to_string()
            },
            Action::PileRecovery {
                pile_id: "T2".to_string()
            },
        ]
    );
}
