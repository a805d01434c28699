use chrono::Utc;
use validator::Validate;

use crate::domain::repository::UserRepository;
use crate::error::{AccountsServiceError, FieldErrors};
use crate::usecase::trimmed;

#[derive(Debug, Default, Validate)]
pub struct VerifyPhoneInput {
    #[validate(required(message = "The phone field is required."))]
    pub phone: Option<String>,
    #[validate(required(message = "The verification code field is required."))]
    pub verification_code: Option<String>,
    /// Fields the client sent with a non-string JSON value.
    pub type_errors: FieldErrors,
}

pub struct VerifyPhoneUseCase<R>
where
    R: UserRepository,
{
    pub users: R,
}

impl<R> VerifyPhoneUseCase<R>
where
    R: UserRepository,
{
    pub async fn execute(&self, input: VerifyPhoneInput) -> Result<(), AccountsServiceError> {
        let input = VerifyPhoneInput {
            phone: trimmed(input.phone),
            verification_code: trimmed(input.verification_code),
            type_errors: input.type_errors,
        };
        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };
        errors.overlay(input.type_errors);
        errors.into_result()?;
        let (Some(phone), Some(code)) = (input.phone, input.verification_code) else {
            return Err(anyhow::anyhow!("validated verification is missing a field").into());
        };

        // Match + mark in one write; a used code no longer matches anything.
        let verified = self.users.verify_phone(&phone, &code, Utc::now()).await?;
        if !verified {
            return Err(AccountsServiceError::InvalidVerificationCode);
        }

        tracing::info!(phone = %phone, "phone verified");
        Ok(())
    }
}
