pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_admin_users_table;
mod m20250305_084945_create_user_roles_table;
mod m20260127_144214_create_content_records_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_admin_users_table::Migration),
            Box::new(m20250305_084945_create_user_roles_table::Migration),
            Box::new(m20260127_144214_create_content_records_table::Migration),
        ]
    }
}
