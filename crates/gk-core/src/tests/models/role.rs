use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Normal.as_str(), "NORMAL");
    assert_eq!(Role::Vip.as_str(), "VIP");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
}

#[test]
fn test_role_from_str_persisted_forms() {
    assert_eq!(Role::from_str("NORMAL").unwrap(), Role::Normal);
    assert_eq!(Role::from_str("VIP").unwrap(), Role::Vip);
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
}

#[test]
fn test_role_from_str_normalizes_case_and_whitespace() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("  vip  ").unwrap(), Role::Vip);
    assert_eq!(Role::from_str("Normal").unwrap(), Role::Normal);
}

#[test]
fn test_role_from_str_rejects_unknown_value() {
    let err = Role::from_str("SUPERUSER").unwrap_err();
    match err {
        CoreError::InvalidRole { value, .. } => assert_eq!(value, "SUPERUSER"),
    }
}

#[test]
fn test_role_from_str_rejects_empty() {
    assert!(Role::from_str("").is_err());
    assert!(Role::from_str("   ").is_err());
}

#[test]
fn test_role_rank_is_strictly_increasing() {
    assert!(Role::Normal.rank() < Role::Vip.rank());
    assert!(Role::Vip.rank() < Role::Admin.rank());
}

#[test]
fn test_role_default_is_normal() {
    assert_eq!(Role::default(), Role::Normal);
}

#[test]
fn test_role_display_matches_persisted_form() {
    assert_eq!(Role::Admin.to_string(), "ADMIN");
    assert_eq!(Role::Normal.to_string(), "NORMAL");
}
