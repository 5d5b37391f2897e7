use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employer_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employers::Entity",
        from = "Column::EmployerId",
        to = "super::employers::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Employer,
    #[sea_orm(has_many = "super::resumes::Entity")]
    Resume,
}

impl Related<super::employers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
}

impl Related<super::resumes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resume.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
