//! Create `birds` table.
//!
//! Two text columns; the auto-increment id stays internal to the table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Birds::Table)
                    .if_not_exists()
                    .col(pk_auto(Birds::Id))
                    .col(text(Birds::Species).not_null())
                    .col(text(Birds::Description).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Birds::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Birds { Table, Id, Species, Description }
