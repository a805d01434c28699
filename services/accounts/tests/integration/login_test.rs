use std::sync::atomic::Ordering;

use referral_accounts::domain::repository::TokenIssuer;
use referral_accounts::error::AccountsServiceError;
use referral_accounts::infra::token::JwtTokenIssuer;
use referral_accounts::usecase::login::{LoginInput, LoginUseCase};
use referral_accounts::usecase::user::GetUserUseCase;
use uuid::Uuid;

use crate::helpers::{
    FailingUserRepo, MockHasher, MockUserRepo, TEST_PASSWORD, expect_validation, test_tokens,
    test_user, verified_user,
};

fn usecase(users: MockUserRepo) -> LoginUseCase<MockUserRepo, MockHasher, JwtTokenIssuer> {
    LoginUseCase {
        users,
        hasher: MockHasher::default(),
        tokens: test_tokens(),
    }
}

fn credentials(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
        ..Default::default()
    }
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_verified_user() {
    let user = verified_user();

    let output = usecase(MockUserRepo::new(vec![user.clone()]))
        .execute(credentials(&user.email, TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);
    let token_user = test_tokens().validate(&output.token.token).unwrap();
    assert_eq!(token_user, user.id);
}

#[tokio::test]
async fn should_reject_unverified_user_with_correct_password() {
    let user = test_user();

    let result = usecase(MockUserRepo::new(vec![user.clone()]))
        .execute(credentials(&user.email, TEST_PASSWORD))
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::PhoneNotVerified)),
        "expected PhoneNotVerified, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_password_for_verified_user() {
    let user = verified_user();

    let result = usecase(MockUserRepo::new(vec![user.clone()]))
        .execute(credentials(&user.email, "wrong-password"))
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_password_before_checking_verification() {
    let user = test_user();

    let result = usecase(MockUserRepo::new(vec![user.clone()]))
        .execute(credentials(&user.email, "wrong-password"))
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let result = usecase(MockUserRepo::new(vec![verified_user()]))
        .execute(credentials("nobody@example.com", TEST_PASSWORD))
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_run_password_check_for_unknown_email() {
    let login = usecase(MockUserRepo::new(vec![verified_user()]));
    let verified = login.hasher.verified_handle();

    let unknown = login
        .execute(credentials("nobody@example.com", TEST_PASSWORD))
        .await;
    let wrong = login
        .execute(credentials("budi@example.com", "wrong-password"))
        .await;

    assert!(
        matches!(unknown, Err(AccountsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {unknown:?}"
    );
    assert!(
        matches!(wrong, Err(AccountsServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {wrong:?}"
    );
    assert_eq!(verified.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn should_surface_storage_failure_as_internal_error() {
    let login = LoginUseCase {
        users: FailingUserRepo,
        hasher: MockHasher::default(),
        tokens: test_tokens(),
    };

    let result = login.execute(credentials("budi@example.com", TEST_PASSWORD)).await;

    assert!(
        matches!(result, Err(AccountsServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_email_and_password() {
    let result = usecase(MockUserRepo::empty())
        .execute(LoginInput::default())
        .await;

    let errors = expect_validation(result);
    assert!(errors.contains("email"));
    assert!(errors.contains("password"));
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let result = usecase(MockUserRepo::empty())
        .execute(credentials("budi", TEST_PASSWORD))
        .await;

    let errors = expect_validation(result);
    assert!(errors.contains("email"));
    assert!(!errors.contains("password"));
}

// ── GetUserUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_existing_user() {
    let user = verified_user();
    let usecase = GetUserUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let found = usecase.execute(user.id).await.unwrap();
    assert_eq!(found.email, user.email);
}

#[tokio::test]
async fn should_return_not_found_for_missing_user() {
    let usecase = GetUserUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(AccountsServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
