// シングルトンと静的ファクトリーの統合テスト
use construction_patterns::{
    factories::{Flag, TRUE},
    singleton::{encore, roll_call, EnumElvis, LazyElvis, MockPerformer, SerialElvis, ELVIS},
};

#[test]
fn test_accessors_return_one_instance() {
    assert!(std::ptr::eq(&ELVIS, &ELVIS));
    assert!(std::ptr::eq(LazyElvis::instance(), LazyElvis::instance()));
    assert!(std::ptr::eq(SerialElvis::instance(), SerialElvis::instance()));
    assert_eq!(LazyElvis::initializations(), 1);
}

#[test]
fn test_serial_round_trip_keeps_identity() {
    let json = serde_json::to_string(SerialElvis::instance()).unwrap();
    let restored: &'static SerialElvis = serde_json::from_str(&json).unwrap();
    assert!(std::ptr::eq(restored, SerialElvis::instance()));

    let restored: EnumElvis = serde_json::from_str(r#""Instance""#).unwrap();
    assert_eq!(restored, EnumElvis::Instance);
}

#[test]
fn test_client_can_use_mock_instead_of_singleton() {
    let mut mock = MockPerformer::new();
    mock.expect_stage_name().return_const("Mock");
    mock.expect_leave_the_building()
        .times(1)
        .returning(|| "bye".to_string());

    assert_eq!(encore(&mock), "Mock: bye");
    assert_eq!(roll_call().len(), 4);
}

#[test]
fn test_flag_value_of_is_cached() {
    assert!(std::ptr::eq(Flag::value_of(true), &TRUE));
    assert!(std::ptr::eq(Flag::value_of(true), Flag::parse("true").unwrap()));
}
