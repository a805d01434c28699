use sea_orm::entity::prelude::*;

/// Registered account, including phone-verification state and referral codes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    #[sea_orm(unique)]
    pub phone: String,
    /// Set at registration, cleared once the phone is verified.
    pub verification_code: Option<String>,
    pub phone_verified_at: Option<chrono::DateTime<chrono::Utc>>,
    pub birthdate: chrono::NaiveDate,
    /// `male`, `female` or `other`.
    pub gender: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub unique_code: String,
    /// Counter value drawn from `sales_code_seq`.
    #[sea_orm(unique)]
    pub sales_number: i64,
    /// Display form of `sales_number`, e.g. `SL000001`.
    #[sea_orm(unique)]
    pub sales_code: String,
    pub device_label: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
