use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000000_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(pk_auto(Applicant::Id))
                    .col(integer(Applicant::UserId).unique_key())
                    .col(string_len(Applicant::Fullname, 150))
                    .col(string_len(Applicant::Email, 150))
                    .col(string_len(Applicant::ContactNumber, 50))
                    .col(text(Applicant::Skills))
                    .col(integer(Applicant::Experience).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-applicant-user_id")
                            .from(Applicant::Table, Applicant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applicant {
    Table,
    Id,
    UserId,
    Fullname,
    Email,
    ContactNumber,
    Skills,
    Experience,
}
