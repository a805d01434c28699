use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, SqlErr, Statement,
};
use uuid::Uuid;

use referral_accounts_schema::{SALES_CODE_SEQUENCE, users};
use referral_domain::sales_code::SalesCode;
use referral_domain::user::Gender;

use crate::domain::repository::{SalesCodeAllocator, UserRepository};
use crate::domain::types::User;
use crate::error::AccountsServiceError;

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AccountsServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count users by email")?;
        Ok(count > 0)
    }

    async fn phone_exists(&self, phone: &str) -> Result<bool, AccountsServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Phone.eq(phone))
            .count(&self.db)
            .await
            .context("count users by phone")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> Result<(), AccountsServiceError> {
        let sales_number =
            i64::try_from(user.sales_code.number()).context("sales number out of range")?;
        let result = users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            phone: Set(user.phone.clone()),
            verification_code: Set(user.verification_code.clone()),
            phone_verified_at: Set(user.phone_verified_at),
            birthdate: Set(user.birthdate),
            gender: Set(user.gender.as_str().to_owned()),
            address: Set(user.address.clone()),
            unique_code: Set(user.unique_code.clone()),
            sales_number: Set(sales_number),
            sales_code: Set(user.sales_code.to_string()),
            device_label: Set(user.device_label.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => Err(create_error(err)),
        }
    }

    async fn verify_phone(
        &self,
        phone: &str,
        code: &str,
        verified_at: DateTime<Utc>,
    ) -> Result<bool, AccountsServiceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::PhoneVerifiedAt, Expr::value(Some(verified_at)))
            .col_expr(
                users::Column::VerificationCode,
                Expr::value(Option::<String>::None),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(verified_at))
            .filter(users::Column::Phone.eq(phone))
            .filter(users::Column::VerificationCode.eq(code))
            .filter(users::Column::PhoneVerifiedAt.is_null())
            .exec(&self.db)
            .await
            .context("verify phone")?;
        Ok(result.rows_affected > 0)
    }
}

/// Request field guarded by the unique constraint named in a violation message.
fn unique_violation_field(message: &str) -> Option<&'static str> {
    if message.contains("users_email_key") {
        Some("email")
    } else if message.contains("users_phone_key") {
        Some("phone")
    } else {
        None
    }
}

/// Unique-index clashes lost to a concurrent registration surface as field errors.
fn create_error(err: DbErr) -> AccountsServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
        if let Some(field) = unique_violation_field(&message) {
            return AccountsServiceError::invalid_field(
                field,
                &format!("The {field} has already been taken."),
            );
        }
    }
    AccountsServiceError::Internal(anyhow::Error::new(err).context("create user"))
}

fn user_from_model(model: users::Model) -> anyhow::Result<User> {
    let gender = model
        .gender
        .parse::<Gender>()
        .with_context(|| format!("stored gender of user {}", model.id))?;
    let sales_number = u64::try_from(model.sales_number)
        .with_context(|| format!("stored sales number of user {}", model.id))?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        verification_code: model.verification_code,
        phone_verified_at: model.phone_verified_at,
        birthdate: model.birthdate,
        gender,
        address: model.address,
        unique_code: model.unique_code,
        sales_code: SalesCode(sales_number),
        device_label: model.device_label,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Sales code allocator ──────────────────────────────────────────────────────

/// Draws sales numbers from the `sales_code_seq` PostgreSQL sequence.
#[derive(Clone)]
pub struct DbSalesCodeAllocator {
    pub db: DatabaseConnection,
}

impl SalesCodeAllocator for DbSalesCodeAllocator {
    async fn next(&self) -> Result<SalesCode, AccountsServiceError> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            format!("SELECT nextval('{SALES_CODE_SEQUENCE}') AS next"),
        );
        let row = self
            .db
            .query_one(stmt)
            .await
            .context("draw sales number")?
            .context("nextval returned no row")?;
        let next: i64 = row.try_get("", "next").context("read sales number")?;
        let number = u64::try_from(next).context("sales number out of range")?;
        Ok(SalesCode(number))
    }
}
