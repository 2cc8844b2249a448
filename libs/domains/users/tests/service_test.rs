//! Directory service behavior against the in-memory store.
//!
//! These tests exercise the full policy layer — uniqueness, pagination,
//! login — without a real document store behind it.

use domain_users::{
    CreateUser, CredentialService, HashConfig, InMemoryUserStore, JwtConfig, TokenClaims,
    UserDirectoryService, UserError,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

const TEST_SECRET: &str = "service-test-secret-service-test-secret";
const TEST_TTL_SECONDS: i64 = 86_400;

fn service() -> UserDirectoryService<InMemoryUserStore> {
    let credentials = CredentialService::new(
        &HashConfig::default(),
        JwtConfig::new(TEST_SECRET, TEST_TTL_SECONDS),
    )
    .unwrap();
    UserDirectoryService::new(InMemoryUserStore::new(), credentials)
}

fn input(email: &str) -> CreateUser {
    CreateUser {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        company: "ACME Inc.".to_string(),
        email: email.to_string(),
        password: "securePassword123".to_string(),
    }
}

#[tokio::test]
async fn second_create_with_same_email_is_rejected() {
    let service = service();

    service.create_user(input("john@example.com")).await.unwrap();
    let err = service
        .create_user(input("john@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, UserError::DuplicateEmail));
    assert_eq!(err.to_string(), "User with this email already exists");
}

#[tokio::test]
async fn get_user_echoes_submitted_fields_without_password() {
    let service = service();
    let user_id = service.create_user(input("ada@example.com")).await.unwrap();

    let profile = service.get_user(user_id).await.unwrap();

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.first_name, "John");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.company, "ACME Inc.");
    assert_eq!(profile.email, "ada@example.com");

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn get_user_unknown_id_is_not_found() {
    let service = service();

    let err = service.get_user(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, UserError::NotFound));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn list_rejects_limits_outside_the_allow_list() {
    let service = service();
    service.create_user(input("one@example.com")).await.unwrap();

    for (offset, limit) in [(0, 7), (10, 7), (0, 0), (0, 26)] {
        let err = service.list_users(offset, limit).await.unwrap_err();
        assert!(matches!(err, UserError::InvalidLimit(l) if l == limit));
        assert_eq!(err.to_string(), "Limit must be 5, 10, or 25");
    }
}

#[tokio::test]
async fn list_pages_twelve_users_in_email_order() {
    let service = service();

    // Deliberately shuffled, with mixed case to exercise the collation.
    let emails = [
        "ivy@example.com",
        "Carol@example.com",
        "quinn@example.com",
        "bob@example.com",
        "Erin@example.com",
        "alice@example.com",
        "Mallory@example.com",
        "dave@example.com",
        "peggy@example.com",
        "Frank@example.com",
        "heidi@example.com",
        "Grace@example.com",
    ];
    for email in emails {
        service.create_user(input(email)).await.unwrap();
    }

    let first = service.list_users(0, 5).await.unwrap();
    assert_eq!(first.total, 12);
    assert_eq!(first.offset, 0);
    assert_eq!(first.limit, 5);
    let first_emails: Vec<&str> = first.users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        first_emails,
        vec![
            "alice@example.com",
            "bob@example.com",
            "Carol@example.com",
            "dave@example.com",
            "Erin@example.com",
        ]
    );

    let tail = service.list_users(10, 5).await.unwrap();
    assert_eq!(tail.total, 12);
    let tail_emails: Vec<&str> = tail.users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(tail_emails, vec!["peggy@example.com", "quinn@example.com"]);

    let past_the_end = service.list_users(20, 5).await.unwrap();
    assert!(past_the_end.users.is_empty());
    assert_eq!(past_the_end.total, 12);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let service = service();
    service.create_user(input("ada@example.com")).await.unwrap();

    let wrong_password = service
        .login_user("ada@example.com", "not-the-password")
        .await
        .unwrap_err();
    let unknown_email = service
        .login_user("nobody@example.com", "securePassword123")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn login_issues_a_token_bound_to_the_record() {
    let service = service();
    let user_id = service.create_user(input("ada@example.com")).await.unwrap();

    let token = service
        .login_user("ada@example.com", "securePassword123")
        .await
        .unwrap();

    let decoded = decode::<TokenClaims>(
        &token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap();

    assert_eq!(decoded.claims.sub, user_id.to_string());
    assert_eq!(decoded.claims.email, "ada@example.com");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, TEST_TTL_SECONDS);
}
