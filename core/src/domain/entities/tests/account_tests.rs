//! Unit tests for the account entity and its validators

use bson::oid::ObjectId;

use crate::domain::entities::account::{
    validate_email, validate_name, validate_password, Account, SYSTEM_ACCESS_LEVEL,
};
use crate::errors::ValidationError;
use crate::repositories::Entity;

fn hashed(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

#[test]
fn test_new_account_lowercases_email() {
    let account = Account::new("Ann.Lee@Example.COM", hashed("123456"), "Ann", "Lee");
    assert_eq!(account.email, "ann.lee@example.com");
    assert_eq!(account.access_level, 0);
    assert!(!account.is_recruit());
    assert!(!account.is_hunter());
    assert!(!account.is_system());
}

#[test]
fn test_system_threshold_is_exclusive() {
    let mut account = Account::new("a@b.com", hashed("123456"), "Ann", "Lee");
    account.access_level = SYSTEM_ACCESS_LEVEL;
    assert!(!account.is_system());
    account.access_level = SYSTEM_ACCESS_LEVEL + 1;
    assert!(account.is_system());
}

#[test]
fn test_check_password() {
    let account = Account::new("a@b.com", hashed("123456"), "Ann", "Lee");
    assert!(account.check_password("123456"));
    assert!(!account.check_password("654321"));

    let broken = Account {
        password: "not-a-bcrypt-hash".to_string(),
        ..account
    };
    assert!(!broken.check_password("123456"));
}

#[test]
fn test_missing_references_round_trip_as_null() {
    let account = Account::new("a@b.com", hashed("123456"), "Ann", "Lee");
    let document = account.to_document().unwrap();
    assert_eq!(document.get("recruit_id"), Some(&bson::Bson::Null));
    assert_eq!(document.get_object_id("_id").unwrap(), account.id);

    let restored = Account::from_document(document).unwrap();
    assert_eq!(restored, account);
}

#[test]
fn test_absent_reference_fields_deserialize_as_none() {
    let id = ObjectId::new();
    let document = bson::doc! {
        "_id": id,
        "email": "a@b.com",
        "password": "x",
        "name": "Ann",
        "surname": "Lee",
        "access_level": 9,
    };
    let account = Account::from_document(document).unwrap();
    assert_eq!(account.id, id);
    assert!(account.recruit_id.is_none());
    assert!(account.hunter_id.is_none());
    assert!(account.is_system());
}

#[test]
fn test_field_validators() {
    assert!(validate_email("a@b.com").is_ok());
    assert_eq!(validate_email("bad"), Err(ValidationError::invalid("Email")));

    assert!(validate_password("123456", 6).is_ok());
    assert_eq!(
        validate_password("12345", 6),
        Err(ValidationError::TooShort { field: "Password".into(), min: 6 })
    );

    assert!(validate_name("Name", "Ann").is_ok());
    assert_eq!(
        validate_name("Surname", "Li"),
        Err(ValidationError::TooShort { field: "Surname".into(), min: 3 })
    );
}
