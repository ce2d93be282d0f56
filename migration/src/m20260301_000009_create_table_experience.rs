use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experience table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experience::Role).text())
                    .col(ColumnDef::new(Experience::Company).text())
                    .col(ColumnDef::new(Experience::Location).text())
                    .col(ColumnDef::new(Experience::Period).text())
                    .col(ColumnDef::new(Experience::Description).text())
                    .col(ColumnDef::new(Experience::SortOrder).integer())
                    .col(ColumnDef::new(Experience::ProofUrl).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Role,
    Company,
    Location,
    Period,
    Description,
    SortOrder,
    ProofUrl,
}
