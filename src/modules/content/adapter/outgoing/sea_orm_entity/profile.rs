use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton row holding the site owner's public details.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_sub_headline: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub resume_download_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about_summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub viber_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub facebook_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub instagram_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_subtitle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_intro: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
