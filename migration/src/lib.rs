pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_profile;
mod m20260301_000002_create_table_tech_stack;
mod m20260301_000003_create_table_projects;
mod m20260301_000004_create_table_project_skills;
mod m20260301_000005_create_table_milestones;
mod m20260301_000006_create_table_specializations;
mod m20260301_000007_create_table_education;
mod m20260301_000008_create_table_certifications;
mod m20260301_000009_create_table_experience;
mod m20260301_000010_create_table_experience_skills;
mod m20260301_000011_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_profile::Migration),
            Box::new(m20260301_000002_create_table_tech_stack::Migration),
            Box::new(m20260301_000003_create_table_projects::Migration),
            Box::new(m20260301_000004_create_table_project_skills::Migration),
            Box::new(m20260301_000005_create_table_milestones::Migration),
            Box::new(m20260301_000006_create_table_specializations::Migration),
            Box::new(m20260301_000007_create_table_education::Migration),
            Box::new(m20260301_000008_create_table_certifications::Migration),
            Box::new(m20260301_000009_create_table_experience::Migration),
            Box::new(m20260301_000010_create_table_experience_skills::Migration),
            Box::new(m20260301_000011_create_table_contact_messages::Migration),
        ]
    }
}
