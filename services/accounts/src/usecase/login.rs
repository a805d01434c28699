use validator::Validate;

use crate::domain::repository::{PasswordHasher, TokenIssuer, UserRepository};
use crate::domain::types::{DUMMY_PASSWORD_HASH, IssuedToken, User};
use crate::error::{AccountsServiceError, FieldErrors};
use crate::usecase::{non_empty, trimmed};

#[derive(Debug, Default, Validate)]
pub struct LoginInput {
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email must be a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(required(message = "The password field is required."))]
    pub password: Option<String>,
    /// Fields the client sent with a non-string JSON value.
    pub type_errors: FieldErrors,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: IssuedToken,
}

pub struct LoginUseCase<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub users: R,
    pub hasher: H,
    pub tokens: T,
}

impl<R, H, T> LoginUseCase<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountsServiceError> {
        let input = LoginInput {
            email: trimmed(input.email),
            password: non_empty(input.password),
            type_errors: input.type_errors,
        };
        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };
        errors.overlay(input.type_errors);
        errors.into_result()?;
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(anyhow::anyhow!("validated login is missing a field").into());
        };

        // 1. Unknown email and wrong password are indistinguishable → 401
        let Some(user) = self.users.find_by_email(&email).await? else {
            self.hasher.verify(&password, DUMMY_PASSWORD_HASH).await?;
            return Err(AccountsServiceError::InvalidCredentials);
        };
        if !self.hasher.verify(&password, &user.password_hash).await? {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        // 2. Credentials are right but the phone is still pending → 403
        if !user.is_phone_verified() {
            return Err(AccountsServiceError::PhoneNotVerified);
        }

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginOutput { user, token })
    }
}
