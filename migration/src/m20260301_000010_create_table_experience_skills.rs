use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experience_skills (many-to-many experience <-> tech_stack)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ExperienceSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ExperienceSkills::ExperienceId).uuid().not_null())
                    .col(ColumnDef::new(ExperienceSkills::SkillId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_experience_skills")
                            .col(ExperienceSkills::ExperienceId)
                            .col(ExperienceSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_skills_experience_id")
                            .from(ExperienceSkills::Table, ExperienceSkills::ExperienceId)
                            .to(Experience::Table, Experience::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_skills_skill_id")
                            .from(ExperienceSkills::Table, ExperienceSkills::SkillId)
                            .to(TechStack::Table, TechStack::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup: which experience rows use a skill
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experience_skills_skill_id
                ON experience_skills (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experience_skills_skill_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(ExperienceSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceSkills {
    Table,
    ExperienceId,
    SkillId,
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
}
