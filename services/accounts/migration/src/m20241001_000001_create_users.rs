use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::VerificationCode).string())
                    .col(ColumnDef::new(Users::PhoneVerifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Users::Birthdate).date().not_null())
                    .col(ColumnDef::new(Users::Gender).string_len(16).not_null())
                    .col(ColumnDef::new(Users::Address).text().not_null())
                    .col(ColumnDef::new(Users::UniqueCode).string().not_null())
                    .col(
                        ColumnDef::new(Users::SalesNumber)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::SalesCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::DeviceLabel).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Verify-phone looks users up by phone + code.
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::Phone)
                    .col(Users::VerificationCode)
                    .name("idx_users_phone_verification_code")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    VerificationCode,
    PhoneVerifiedAt,
    Birthdate,
    Gender,
    Address,
    UniqueCode,
    SalesNumber,
    SalesCode,
    DeviceLabel,
    CreatedAt,
    UpdatedAt,
}
