use chrono::{DateTime, NaiveDate, Utc};
use rand::RngExt;
use uuid::Uuid;
use validator::Validate;

use referral_domain::device::device_label;
use referral_domain::user::Gender;

use crate::domain::repository::{
    PasswordHasher, SalesCodeAllocator, TokenIssuer, UserRepository, VerificationCodeSender,
};
use crate::domain::types::{
    BIRTHDATE_FORMAT, IssuedToken, UNIQUE_CODE_PREFIX, UNIQUE_CODE_SUFFIX_LEN, User,
    VERIFICATION_CODE_LEN,
};
use crate::error::{AccountsServiceError, FieldErrors};
use crate::usecase::{non_empty, trimmed};

/// Charset for verification codes and unique-code suffixes (mixed-case alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub(crate) fn random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// `SL` + unix seconds + random suffix, e.g. `SL1695833450aB3d`.
fn generate_unique_code(now: DateTime<Utc>) -> String {
    format!(
        "{UNIQUE_CODE_PREFIX}{}{}",
        now.timestamp(),
        random_code(UNIQUE_CODE_SUFFIX_LEN)
    )
}

#[derive(Debug, Default, Validate)]
pub struct RegisterInput {
    #[validate(required(message = "The name field is required."))]
    pub name: Option<String>,
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email must be a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "The password field is required."),
        length(min = 6, message = "The password must be at least 6 characters.")
    )]
    pub password: Option<String>,
    #[validate(required(message = "The phone field is required."))]
    pub phone: Option<String>,
    #[validate(required(message = "The birthdate field is required."))]
    pub birthdate: Option<String>,
    #[validate(required(message = "The gender field is required."))]
    pub gender: Option<String>,
    #[validate(required(message = "The address field is required."))]
    pub address: Option<String>,
    /// Raw `User-Agent` header, if the client sent one.
    pub user_agent: Option<String>,
    /// Fields the client sent with a non-string JSON value.
    pub type_errors: FieldErrors,
}

impl RegisterInput {
    fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
            email: trimmed(self.email),
            password: non_empty(self.password),
            phone: trimmed(self.phone),
            birthdate: trimmed(self.birthdate),
            gender: trimmed(self.gender),
            address: trimmed(self.address),
            user_agent: self.user_agent,
            type_errors: self.type_errors,
        }
    }
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: IssuedToken,
}

pub struct RegisterUseCase<R, S, H, T, V>
where
    R: UserRepository,
    S: SalesCodeAllocator,
    H: PasswordHasher,
    T: TokenIssuer,
    V: VerificationCodeSender,
{
    pub users: R,
    pub sales_codes: S,
    pub hasher: H,
    pub tokens: T,
    pub codes: V,
}

impl<R, S, H, T, V> RegisterUseCase<R, S, H, T, V>
where
    R: UserRepository,
    S: SalesCodeAllocator,
    H: PasswordHasher,
    T: TokenIssuer,
    V: VerificationCodeSender,
{
    pub async fn execute(
        &self,
        input: RegisterInput,
    ) -> Result<RegisterOutput, AccountsServiceError> {
        let input = input.normalized();

        // 1. Field rules, then uniqueness for the fields that passed → 400 with every failure
        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };
        errors.overlay(input.type_errors);
        let birthdate = match input.birthdate.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, BIRTHDATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("birthdate", "The birthdate is not a valid date.");
                    None
                }
            },
            None => None,
        };
        let gender = match input.gender.as_deref() {
            Some(raw) => match raw.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(_) => {
                    errors.add("gender", "The selected gender is invalid.");
                    None
                }
            },
            None => None,
        };
        if let Some(email) = input.email.as_deref() {
            if !errors.contains("email") && self.users.email_exists(email).await? {
                errors.add("email", "The email has already been taken.");
            }
        }
        if let Some(phone) = input.phone.as_deref() {
            if !errors.contains("phone") && self.users.phone_exists(phone).await? {
                errors.add("phone", "The phone has already been taken.");
            }
        }
        errors.into_result()?;

        let device_label = device_label(input.user_agent.as_deref());
        let (
            Some(name),
            Some(email),
            Some(password),
            Some(phone),
            Some(birthdate),
            Some(gender),
            Some(address),
        ) = (
            input.name,
            input.email,
            input.password,
            input.phone,
            birthdate,
            gender,
            input.address,
        )
        else {
            return Err(anyhow::anyhow!("validated registration is missing a field").into());
        };

        // 2. Hash, then draw the sales code right before the insert
        let password_hash = self.hasher.hash(&password).await?;
        let sales_code = self.sales_codes.next().await?;

        // 3. Persist
        let now = Utc::now();
        let verification_code = random_code(VERIFICATION_CODE_LEN);
        let user = User {
            id: Uuid::now_v7(),
            name,
            email,
            password_hash,
            phone,
            verification_code: Some(verification_code.clone()),
            phone_verified_at: None,
            birthdate,
            gender,
            address,
            unique_code: generate_unique_code(now),
            sales_code,
            device_label,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        self.codes.send(&user.phone, &verification_code).await?;

        // 4. Session
        let token = self.tokens.issue(user.id)?;

        tracing::info!(
            user_id = %user.id,
            sales_code = %user.sales_code,
            device = %user.device_label,
            "user registered"
        );
        Ok(RegisterOutput { user, token })
    }
}
