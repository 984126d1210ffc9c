use primer_enums::EnumError;
use primer_enums::catalog::{from_name, from_value, members, name_table, stan};

#[test]
fn name_lookup_round_trips_canonical_names() -> Result<(), EnumError> {
    for member in members() {
        assert_eq!(from_name(member.name())?.name(), member.name());
    }
    Ok(())
}

#[test]
fn every_declared_name_resolves() -> Result<(), EnumError> {
    for (name, member) in name_table() {
        assert_eq!(from_name(name)?, member);
    }
    Ok(())
}

#[test]
fn aliased_value_returns_first_declared_member() -> Result<(), EnumError> {
    let member = from_value(2)?;
    assert_eq!(member.value(), 2);
    assert_eq!(member.name(), "JONATHAN");
    assert_eq!(from_name("JVN")?, member);
    Ok(())
}

#[test]
fn validate_type_accepts_members_and_rejects_everything_else() {
    assert!(members().all(|member| stan(&member).is_ok()));

    assert!(matches!(stan(&"Eminem"), Err(EnumError::TypeMismatch { .. })));
    assert!(matches!(stan(&String::from("KARAMO")), Err(EnumError::TypeMismatch { .. })));
    assert!(matches!(stan(&1_u8), Err(EnumError::TypeMismatch { .. })));
    assert!(matches!(stan(&Some(members().next())), Err(EnumError::TypeMismatch { .. })));
}

#[test]
fn missing_names_and_values_fail() {
    assert!(matches!(from_name("karamo"), Err(EnumError::KeyNotFound { ref name, .. }) if name == "karamo"));
    assert!(matches!(from_value(0), Err(EnumError::ValueNotFound { value: 0, .. })));
}
