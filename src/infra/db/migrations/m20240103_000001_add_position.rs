//! Migration: Add the position column to the employee table.
//!
//! Introduced by a later service revision; existing rows keep NULL.

use sea_orm_migration::prelude::*;

use crate::config::TEXT_COLUMN_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Employee::Table)
                    .add_column(
                        ColumnDef::new(Employee::Position)
                            .string_len(TEXT_COLUMN_LENGTH)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Employee::Table)
                    .drop_column(Employee::Position)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Employee {
    Table,
    Position,
}
