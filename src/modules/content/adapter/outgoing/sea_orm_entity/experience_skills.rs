use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub experience_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub skill_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experience::Entity",
        from = "Column::ExperienceId",
        to = "super::experience::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Experience,

    #[sea_orm(
        belongs_to = "super::tech_stack::Entity",
        from = "Column::SkillId",
        to = "super::tech_stack::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TechStack,
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl Related<super::tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechStack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
