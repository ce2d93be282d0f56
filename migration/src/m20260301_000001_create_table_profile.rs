use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profile table (single row, the site owner)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Profile::Name).text())
                    .col(ColumnDef::new(Profile::HeroTitle).text())
                    .col(ColumnDef::new(Profile::HeroSubHeadline).text())
                    .col(ColumnDef::new(Profile::ProfileImageUrl).text())
                    .col(ColumnDef::new(Profile::ResumeDownloadUrl).text())
                    .col(ColumnDef::new(Profile::AboutSummary).text())
                    .col(ColumnDef::new(Profile::Email).text())
                    .col(ColumnDef::new(Profile::PhoneNumber).text())
                    .col(ColumnDef::new(Profile::ViberNumber).text())
                    .col(ColumnDef::new(Profile::Location).text())
                    .col(ColumnDef::new(Profile::GithubUrl).text())
                    .col(ColumnDef::new(Profile::LinkedinUrl).text())
                    .col(ColumnDef::new(Profile::FacebookUrl).text())
                    .col(ColumnDef::new(Profile::InstagramUrl).text())
                    .col(ColumnDef::new(Profile::ContactTitle).text())
                    .col(ColumnDef::new(Profile::ContactSubtitle).text())
                    .col(ColumnDef::new(Profile::ContactIntro).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    HeroTitle,
    HeroSubHeadline,
    ProfileImageUrl,
    ResumeDownloadUrl,
    AboutSummary,
    Email,
    PhoneNumber,
    ViberNumber,
    Location,
    GithubUrl,
    LinkedinUrl,
    FacebookUrl,
    InstagramUrl,
    ContactTitle,
    ContactSubtitle,
    ContactIntro,
}
