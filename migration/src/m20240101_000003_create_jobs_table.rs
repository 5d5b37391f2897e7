use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_employers_table::Employer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::EmployerId))
                    .col(string_len(Job::Title, 200))
                    .col(text_null(Job::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-employer_id")
                            .from(Job::Table, Job::EmployerId)
                            .to(Employer::Table, Employer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
}
