use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Procesos::Table)
                    .if_not_exists()
                    .col(pk_auto(Procesos::Id))
                    .col(string_uniq(Procesos::Nombre))
                    .col(timestamp(Procesos::FechaCreacion))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Procesos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Procesos {
    Table,
    Id,
    Nombre,
    FechaCreacion,
}
