use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create specializations table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Specializations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Specializations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Specializations::Title).text())
                    .col(ColumnDef::new(Specializations::Description).text())
                    .col(ColumnDef::new(Specializations::Bullets).json_binary())
                    .col(ColumnDef::new(Specializations::SortOrder).integer())
                    .col(
                        ColumnDef::new(Specializations::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Active rows are listed by sort_order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_specializations_active_order
                ON specializations (sort_order)
                WHERE is_active;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_specializations_active_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Specializations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Specializations {
    Table,
    Id,
    Title,
    Description,
    Bullets,
    SortOrder,
    IsActive,
}
