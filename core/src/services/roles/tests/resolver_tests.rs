//! Capability resolution: token checks, hints and the default priority

use bson::{doc, oid::ObjectId};
use chrono::Duration;

use crate::domain::entities::Recruit;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{delete_entity, Collection};
use crate::services::roles::{Editor, Viewer};
use crate::services::test_support::{ann, fixture, token_config};
use crate::services::token::{TokenService, TokenServiceConfig};

#[tokio::test]
async fn test_view_without_token_is_guest() {
    let fx = fixture();
    let roles = fx.roles();

    assert!(roles.view(None, None).await.unwrap().is_guest());
    assert!(roles.view(Some(""), None).await.unwrap().is_guest());
    // A hint is irrelevant when there is nobody to enforce it on
    assert!(roles.view(None, Some("SYSTEM")).await.unwrap().is_guest());
}

#[tokio::test]
async fn test_view_rejects_unusable_tokens() {
    let fx = fixture();
    let (account, access) = fx.create_account(ann()).await;
    let roles = fx.roles();

    let expired = TokenService::new(TokenServiceConfig {
        access_token_expiry: Duration::hours(-2),
        ..token_config()
    })
    .issue_access_token(&account.id, "ua")
    .unwrap();
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..token_config()
    })
    .issue_access_token(&account.id, "ua")
    .unwrap();
    let refresh = fx.tokens.issue_refresh_token(&account.id).unwrap();
    let orphan = fx.tokens.issue_access_token(&ObjectId::new(), "ua").unwrap();

    for token in ["garbage", expired.as_str(), foreign.as_str(), refresh.as_str(), orphan.as_str()] {
        let err = roles.view(Some(token), None).await.unwrap_err();
        assert_eq!(err, DomainError::invalid_token());
    }

    // The genuine access token still works
    assert!(!roles.view(Some(&access), None).await.unwrap().is_guest());
}

#[tokio::test]
async fn test_plain_account_resolves_to_account() {
    let fx = fixture();
    let (account, access) = fx.create_account(ann()).await;

    let viewer = fx.roles().view(Some(&access), None).await.unwrap();
    assert!(matches!(viewer, Viewer::Account(_)));
    assert_eq!(viewer.account().unwrap().id, account.id);

    let editor = fx.roles().edit(&access, None).await.unwrap();
    assert!(matches!(editor, Editor::Account(_)));
}

#[tokio::test]
async fn test_system_wins_over_recruit_without_hint() {
    let fx = fixture();
    let (account, access) = fx.create_account(ann()).await;
    fx.attach_recruit(&access).await;
    fx.promote(&account).await;
    let roles = fx.roles();

    assert!(matches!(roles.view(Some(&access), None).await.unwrap(), Viewer::System(_)));
    assert!(matches!(
        roles.view(Some(&access), Some("RECRUIT")).await.unwrap(),
        Viewer::Recruit(_)
    ));
    assert!(matches!(
        roles.view(Some(&access), Some("ACCOUNT")).await.unwrap(),
        Viewer::Account(_)
    ));

    assert!(matches!(roles.edit(&access, None).await.unwrap(), Editor::System(_)));
    assert!(matches!(
        roles.edit(&access, Some("RECRUIT")).await.unwrap(),
        Editor::Recruit(_)
    ));
}

#[tokio::test]
async fn test_recruit_resolves_before_account() {
    let fx = fixture();
    let (_, access) = fx.create_account(ann()).await;
    let recruit = fx.attach_recruit(&access).await;

    let viewer = fx.roles().view(Some(&access), None).await.unwrap();
    let Viewer::Recruit(recruit_viewer) = viewer else {
        panic!("expected a recruit viewer");
    };
    assert_eq!(recruit_viewer.id(), recruit.id.to_hex());
    assert!(matches!(fx.roles().edit(&access, None).await.unwrap(), Editor::Recruit(_)));
}

#[tokio::test]
async fn test_enforce_failures() {
    let fx = fixture();
    let (_, access) = fx.create_account(ann()).await;
    let roles = fx.roles();

    let cases = [
        ("SYSTEM", DomainError::input("Failed to enforce 'SYSTEM'.")),
        ("RECRUIT", DomainError::input("Failed to enforce 'RECRUIT'.")),
        ("HUNTER", DomainError::input("Unimplemented")),
        ("boss", DomainError::Validation(ValidationError::invalid("enforce"))),
        ("system", DomainError::Validation(ValidationError::invalid("enforce"))),
    ];
    for (hint, expected) in cases {
        assert_eq!(roles.view(Some(&access), Some(hint)).await.unwrap_err(), expected);
        assert_eq!(roles.edit(&access, Some(hint)).await.unwrap_err(), expected);
    }
}

#[tokio::test]
async fn test_token_is_checked_before_hint() {
    let fx = fixture();
    let err = fx.roles().view(Some("garbage"), Some("boss")).await.unwrap_err();
    assert_eq!(err, DomainError::invalid_token());

    let err = fx.roles().edit("garbage", Some("SYSTEM")).await.unwrap_err();
    assert_eq!(err, DomainError::invalid_token());
}

#[tokio::test]
async fn test_dangling_recruit_reference_falls_back_to_account() {
    let fx = fixture();
    let (_, access) = fx.create_account(ann()).await;
    let recruit = fx.attach_recruit(&access).await;
    delete_entity::<Recruit>(fx.store.as_ref(), &recruit.id).await.unwrap();

    let viewer = fx.roles().view(Some(&access), None).await.unwrap();
    assert!(matches!(viewer, Viewer::Account(_)));

    let err = fx.roles().view(Some(&access), Some("RECRUIT")).await.unwrap_err();
    assert_eq!(err, DomainError::Generic);
}

#[tokio::test]
async fn test_access_level_threshold() {
    let fx = fixture();
    let (account, access) = fx.create_account(ann()).await;

    // Exactly the threshold is not enough
    fx.store
        .update_by_id(Collection::Accounts, &account.id, doc! { "access_level": 5 })
        .await
        .unwrap();
    assert!(matches!(fx.roles().view(Some(&access), None).await.unwrap(), Viewer::Account(_)));

    fx.store
        .update_by_id(Collection::Accounts, &account.id, doc! { "access_level": 6 })
        .await
        .unwrap();
    assert!(matches!(fx.roles().view(Some(&access), None).await.unwrap(), Viewer::System(_)));
}
