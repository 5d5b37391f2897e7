use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_applicants_table::Applicant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resume::Table)
                    .if_not_exists()
                    .col(pk_auto(Resume::Id))
                    .col(integer(Resume::ApplicantId))
                    .col(string_len(Resume::Filename, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resume-applicant_id")
                            .from(Resume::Table, Resume::ApplicantId)
                            .to(Applicant::Table, Applicant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resume::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resume {
    Table,
    Id,
    ApplicantId,
    Filename,
}
