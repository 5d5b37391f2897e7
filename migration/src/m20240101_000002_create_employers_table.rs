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
                    .table(Employer::Table)
                    .if_not_exists()
                    .col(pk_auto(Employer::Id))
                    .col(integer(Employer::UserId).unique_key())
                    .col(string_len(Employer::Fullname, 150))
                    .col(string_len(Employer::Email, 150))
                    .col(string_len(Employer::Company, 150))
                    .col(string_len(Employer::Phone, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employer-user_id")
                            .from(Employer::Table, Employer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employer {
    Table,
    Id,
    UserId,
    Fullname,
    Email,
    Company,
    Phone,
}
