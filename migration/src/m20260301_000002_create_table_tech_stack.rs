use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create tech_stack table (skill catalogue)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TechStack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStack::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStack::Category).text())
                    .col(ColumnDef::new(TechStack::SkillName).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TechStack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
    Category,
    SkillName,
}
