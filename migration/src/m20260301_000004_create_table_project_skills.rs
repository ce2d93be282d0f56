use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create project_skills (many-to-many projects <-> tech_stack)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectSkills::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectSkills::SkillId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_project_skills")
                            .col(ProjectSkills::ProjectId)
                            .col(ProjectSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skills_project_id")
                            .from(ProjectSkills::Table, ProjectSkills::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skills_skill_id")
                            .from(ProjectSkills::Table, ProjectSkills::SkillId)
                            .to(TechStack::Table, TechStack::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup: which projects rows use a skill
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_skills_skill_id
                ON project_skills (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_project_skills_skill_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectSkills {
    Table,
    ProjectId,
    SkillId,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
}
