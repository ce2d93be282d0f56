use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tech_stack")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,
    /// Free text; bucketed into display groups on read.
    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skill_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_skills::Entity")]
    ProjectSkills,
    #[sea_orm(has_many = "super::experience_skills::Entity")]
    ExperienceSkills,
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

impl Related<super::experience_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
