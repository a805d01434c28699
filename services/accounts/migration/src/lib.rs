use sea_orm_migration::prelude::*;

mod m20241001_000001_create_users;
mod m20241001_000002_create_sales_code_sequence;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_users::Migration),
            Box::new(m20241001_000002_create_sales_code_sequence::Migration),
        ]
    }
}
