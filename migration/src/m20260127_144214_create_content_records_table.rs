use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create content_records table
        // One row per record; `kind` selects the content type
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContentRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ContentRecords::Kind)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContentRecords::Payload).json_binary().not_null())
                    .col(
                        ColumnDef::new(ContentRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContentRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing is always "all records of a kind, newest first"
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_content_records_kind_created_at
                ON content_records (kind, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_content_records_updated_at
                BEFORE UPDATE ON content_records
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_content_records_updated_at ON content_records;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_content_records_kind_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContentRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContentRecords {
    Table,
    Id,
    Kind,
    Payload,
    CreatedAt,
    UpdatedAt,
}
