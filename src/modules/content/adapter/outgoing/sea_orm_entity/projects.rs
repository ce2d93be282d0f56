use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hook: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub project_type: Option<String>,

    // Comma-separated or JSON-array text; parsed leniently on read
    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,

    pub is_featured: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub overview: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub goal: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub my_role: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub features: Option<Json>,

    #[sea_orm(column_type = "Text", nullable)]
    pub design_philosophy: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub impact_reflection: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub live_demo_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_repo_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_skills::Entity")]
    ProjectSkills,
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

// Many-to-many: projects <-> tech_stack via project_skills
impl Related<super::tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_skills::Relation::TechStack.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_skills::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
