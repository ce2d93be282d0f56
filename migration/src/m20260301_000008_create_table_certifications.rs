use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create certifications table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Certifications::Name).text())
                    .col(ColumnDef::new(Certifications::Issuer).text())
                    .col(ColumnDef::new(Certifications::DateEarned).text())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Name,
    Issuer,
    DateEarned,
    CredentialUrl,
}
