//! Unit tests for recruit profiles

use bson::oid::ObjectId;
use chrono::{Datelike, Utc};

use crate::domain::entities::{Qa, Recruit};
use crate::errors::ValidationError;

fn recruit() -> Recruit {
    Recruit {
        id: ObjectId::new(),
        birth_year: 1995,
        province: "Gauteng".to_string(),
        city: "Johannesburg".to_string(),
        gender: "female".to_string(),
        disability: "none".to_string(),
        vid1_url: "/videos/1.mp4".to_string(),
        vid2_url: "/videos/2.mp4".to_string(),
        phone: "0820000000".to_string(),
        email: "ann@example.com".to_string(),
        qa1: Qa::new("Why mining?", "Because."),
        qa2: Qa::new("Where next?", "Underground."),
    }
}

#[test]
fn test_normalize_uppercases_gender() {
    let mut recruit = recruit();
    recruit.normalize().unwrap();
    assert_eq!(recruit.gender, "FEMALE");

    // Already normalized values stay valid
    recruit.normalize().unwrap();
    assert_eq!(recruit.gender, "FEMALE");
}

#[test]
fn test_normalize_rejects_unknown_gender() {
    let mut recruit = recruit();
    recruit.gender = "unknown".to_string();
    assert_eq!(recruit.normalize(), Err(ValidationError::invalid("gender")));
}

#[test]
fn test_normalize_reports_first_empty_field() {
    let mut recruit = recruit();
    recruit.city = "  ".to_string();
    recruit.phone = String::new();
    assert_eq!(recruit.normalize(), Err(ValidationError::invalid("city")));

    let mut recruit = self::recruit();
    recruit.qa2.answer = String::new();
    assert_eq!(recruit.normalize(), Err(ValidationError::invalid("qa2.answer")));
}

#[test]
fn test_birth_year_bounds() {
    let current_year = Utc::now().year();

    let mut recruit = recruit();
    recruit.birth_year = 1900;
    assert!(recruit.normalize().is_ok());

    recruit.birth_year = 1899;
    assert!(matches!(
        recruit.normalize(),
        Err(ValidationError::OutOfRange { ref field, .. }) if field == "birth_year"
    ));

    recruit.birth_year = current_year;
    assert!(recruit.normalize().is_err());

    recruit.birth_year = current_year - 1;
    assert!(recruit.normalize().is_ok());
}

#[test]
fn test_age_is_derived_from_birth_year() {
    let mut recruit = recruit();
    recruit.birth_year = Utc::now().year() - 30;
    assert_eq!(recruit.age(), 30);
}
