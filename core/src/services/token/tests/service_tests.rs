//! Unit tests for token service

use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::AuthError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }
}

fn create_test_service() -> TokenService {
    TokenService::new(test_config())
}

fn sign(claims: &Claims, secret: &str) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

#[test]
fn test_access_token_round_trip() {
    let service = create_test_service();
    let account_id = ObjectId::new();

    let token = service.issue_access_token(&account_id, "Mozilla/5.0").unwrap();
    let claims = service.parse(&token).unwrap();

    assert_eq!(claims.account_id, account_id.to_hex());
    assert_eq!(claims.user_agent, "Mozilla/5.0");
    assert!(!claims.refresh);
    let expected = (Utc::now() + Duration::hours(24)).timestamp();
    assert!((claims.exp - expected).abs() <= 5);
}

#[test]
fn test_refresh_token_round_trip() {
    let service = create_test_service();
    let account_id = ObjectId::new();

    let token = service.issue_refresh_token(&account_id).unwrap();
    let claims = service.parse(&token).unwrap();

    assert!(claims.refresh);
    assert_eq!(claims.account_id, account_id.to_hex());
    let expected = (Utc::now() + Duration::days(30)).timestamp();
    assert!((claims.exp - expected).abs() <= 5);
}

#[test]
fn test_issue_pair() {
    let service = create_test_service();
    let pair = service.issue_pair(&ObjectId::new(), "curl/8").unwrap();

    assert!(!service.parse(&pair.access_token).unwrap().refresh);
    assert!(service.parse(&pair.refresh_token).unwrap().refresh);
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = create_test_service();
    assert_eq!(service.parse("not.a.token"), Err(AuthError::InvalidToken));
    assert_eq!(service.parse(""), Err(AuthError::InvalidToken));
}

#[test]
fn test_wrong_signature_is_invalid() {
    let service = create_test_service();
    let claims = Claims::new_access_token("abc", "ua", Duration::hours(1), "mule");
    let token = sign(&claims, "some-other-secret");

    assert_eq!(service.parse(&token), Err(AuthError::InvalidToken));
}

#[test]
fn test_expired_token_is_invalid() {
    let service = create_test_service();
    // Well past the validation leeway
    let claims = Claims::new_access_token("abc", "ua", Duration::hours(-2), "mule");
    let token = sign(&claims, "test-secret");

    assert_eq!(service.parse(&token), Err(AuthError::InvalidToken));
}

#[test]
fn test_foreign_issuer_is_invalid() {
    let service = create_test_service();
    let claims = Claims::new_access_token("abc", "ua", Duration::hours(1), "someone-else");
    let token = sign(&claims, "test-secret");

    assert_eq!(service.parse(&token), Err(AuthError::InvalidToken));
}

#[test]
fn test_fresh_refresh_token_is_kept() {
    let service = create_test_service();
    let token = service.issue_refresh_token(&ObjectId::new()).unwrap();
    assert!(!service.needs_rotation(&token));
}

#[test]
fn test_refresh_token_near_expiry_is_rotated() {
    let service = TokenService::new(TokenServiceConfig {
        refresh_token_expiry: Duration::hours(12),
        ..test_config()
    });
    let token = service.issue_refresh_token(&ObjectId::new()).unwrap();
    assert!(service.needs_rotation(&token));
}

#[test]
fn test_unusable_refresh_token_is_rotated() {
    let service = create_test_service();
    assert!(service.needs_rotation("garbage"));

    let access = service.issue_access_token(&ObjectId::new(), "ua").unwrap();
    assert!(service.needs_rotation(&access));
}
