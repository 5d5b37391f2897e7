use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Uploaded resume. `job_id` only exists once the resume schema patch has run;
/// selecting through this entity before that fails with an unknown column.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub applicant_id: i32,
    pub filename: String,
    pub job_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applicants::Entity",
        from = "Column::ApplicantId",
        to = "super::applicants::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Applicant,
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
}

impl Related<super::applicants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
