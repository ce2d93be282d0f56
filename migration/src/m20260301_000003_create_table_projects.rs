use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).text())
                    .col(ColumnDef::new(Projects::Hook).text())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::ThumbnailUrl).text())
                    .col(ColumnDef::new(Projects::ProjectType).text())
                    // "Web, Mobile" or '["Web","Mobile"]'
                    .col(ColumnDef::new(Projects::Category).text())
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::Overview).text())
                    .col(ColumnDef::new(Projects::Goal).text())
                    .col(ColumnDef::new(Projects::MyRole).text())
                    .col(ColumnDef::new(Projects::Features).json_binary())
                    .col(ColumnDef::new(Projects::DesignPhilosophy).text())
                    .col(ColumnDef::new(Projects::ImpactReflection).text())
                    .col(ColumnDef::new(Projects::LiveDemoUrl).text())
                    .col(ColumnDef::new(Projects::GithubRepoUrl).text())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
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

        // Works grid and featured list are both newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_created_at
                ON projects (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured
                ON projects (created_at DESC)
                WHERE is_featured;
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
                DROP INDEX IF EXISTS idx_projects_created_at;
                DROP INDEX IF EXISTS idx_projects_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Hook,
    Description,
    ThumbnailUrl,
    ProjectType,
    Category,
    IsFeatured,
    Overview,
    Goal,
    MyRole,
    Features,
    DesignPhilosophy,
    ImpactReflection,
    LiveDemoUrl,
    GithubRepoUrl,
    CreatedAt,
}
