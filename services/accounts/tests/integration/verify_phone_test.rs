use referral_accounts::error::AccountsServiceError;
use referral_accounts::usecase::verify_phone::{VerifyPhoneInput, VerifyPhoneUseCase};

use crate::helpers::{MockUserRepo, expect_validation, test_user, verified_user};

fn input(phone: &str, code: &str) -> VerifyPhoneInput {
    VerifyPhoneInput {
        phone: Some(phone.to_owned()),
        verification_code: Some(code.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn should_verify_phone_and_clear_code() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = VerifyPhoneUseCase { users };

    usecase.execute(input(&user.phone, "aB3dE9")).await.unwrap();

    let stored = handle.lock().unwrap()[0].clone();
    assert!(stored.is_phone_verified());
    assert_eq!(stored.verification_code, None);
    assert!(stored.updated_at >= user.updated_at);
}

#[tokio::test]
async fn should_reject_repeat_verification_with_same_code() {
    let user = test_user();
    let usecase = VerifyPhoneUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    usecase.execute(input(&user.phone, "aB3dE9")).await.unwrap();
    let result = usecase.execute(input(&user.phone, "aB3dE9")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidVerificationCode)),
        "expected InvalidVerificationCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let user = test_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = VerifyPhoneUseCase { users };

    let result = usecase.execute(input(&user.phone, "zzzzzz")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidVerificationCode)),
        "expected InvalidVerificationCode, got {result:?}"
    );
    assert!(!handle.lock().unwrap()[0].is_phone_verified());
}

#[tokio::test]
async fn should_match_code_case_sensitively() {
    let user = test_user();
    let usecase = VerifyPhoneUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase.execute(input(&user.phone, "AB3DE9")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidVerificationCode)),
        "expected InvalidVerificationCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_code_for_other_phone() {
    let user = test_user();
    let usecase = VerifyPhoneUseCase {
        users: MockUserRepo::new(vec![user]),
    };

    let result = usecase.execute(input("089999999999", "aB3dE9")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidVerificationCode)),
        "expected InvalidVerificationCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_already_verified_user() {
    let user = verified_user();
    let usecase = VerifyPhoneUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase.execute(input(&user.phone, "aB3dE9")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::InvalidVerificationCode)),
        "expected InvalidVerificationCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_phone_and_code() {
    let usecase = VerifyPhoneUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase
        .execute(VerifyPhoneInput {
            phone: Some("  ".to_owned()),
            verification_code: None,
            ..Default::default()
        })
        .await;

    let errors = expect_validation(result);
    assert!(errors.contains("phone"));
    assert!(errors.contains("verification_code"));
}
