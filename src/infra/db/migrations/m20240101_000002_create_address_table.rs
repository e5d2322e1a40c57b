//! Migration: Create the address table.
//!
//! `employee_id` carries both the foreign key and a UNIQUE index: the
//! relation is one-to-one at the storage layer, not just by convention.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_employee_table::Employee;
use crate::config::{POST_CODE_MAX_LENGTH, TEXT_COLUMN_LENGTH};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Address::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Address::City)
                            .string_len(TEXT_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Address::PostCode)
                            .string_len(POST_CODE_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Address::Street)
                            .string_len(TEXT_COLUMN_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Address::Number).integer().not_null())
                    .col(ColumnDef::new(Address::EmployeeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_employee")
                            .from(Address::Table, Address::EmployeeId)
                            .to(Employee::Table, Employee::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_address_employee_id")
                    .table(Address::Table)
                    .col(Address::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_address_employee_id")
                    .table(Address::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Address {
    Table,
    Id,
    City,
    PostCode,
    Street,
    Number,
    EmployeeId,
}
