//! Migration: Create the employee table.

use sea_orm_migration::prelude::*;

use crate::config::{EMAIL_COLUMN_LENGTH, TEXT_COLUMN_LENGTH};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employee::FirstName)
                            .string_len(TEXT_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employee::LastName)
                            .string_len(TEXT_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employee::Email)
                            .string_len(EMAIL_COLUMN_LENGTH)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employee::BirthDate).date())
                    .col(ColumnDef::new(Employee::Salary).integer().not_null())
                    .col(
                        ColumnDef::new(Employee::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    BirthDate,
    Salary,
    Created,
}
