use sea_orm_migration::prelude::*;

use referral_accounts_schema::SALES_CODE_SEQUENCE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // nextval() never returns a value twice, even if the caller rolls back.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE SEQUENCE IF NOT EXISTS {SALES_CODE_SEQUENCE} \
                 AS BIGINT START WITH 1 INCREMENT BY 1 NO CYCLE"
            ))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP SEQUENCE IF EXISTS {SALES_CODE_SEQUENCE}"))
            .await?;
        Ok(())
    }
}
