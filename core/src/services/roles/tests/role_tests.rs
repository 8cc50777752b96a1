use crate::errors::ValidationError;
use crate::services::roles::Role;

#[test]
fn test_role_parses_exact_names() {
    assert_eq!("SYSTEM".parse::<Role>().unwrap(), Role::System);
    assert_eq!("RECRUIT".parse::<Role>().unwrap(), Role::Recruit);
    assert_eq!("ACCOUNT".parse::<Role>().unwrap(), Role::Account);
    assert_eq!("HUNTER".parse::<Role>().unwrap(), Role::Hunter);
}

#[test]
fn test_role_names_are_case_sensitive() {
    for hint in ["recruit", "Account", " SYSTEM", "hunter "] {
        assert_eq!(hint.parse::<Role>().unwrap_err(), ValidationError::invalid("enforce"));
    }
}

#[test]
fn test_unknown_role_names_the_enforce_field() {
    assert_eq!("admin".parse::<Role>().unwrap_err(), ValidationError::invalid("enforce"));
    assert_eq!("".parse::<Role>().unwrap_err(), ValidationError::invalid("enforce"));
}

#[test]
fn test_role_display_round_trips() {
    for role in [Role::Account, Role::Recruit, Role::Hunter, Role::System] {
        assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
    }
}
