use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aseguradoras::Table)
                    .if_not_exists()
                    .col(pk_auto(Aseguradoras::Id))
                    .col(string_uniq(Aseguradoras::Nombre))
                    .col(string(Aseguradoras::Nit))
                    .col(string(Aseguradoras::Contacto))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aseguradoras::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aseguradoras {
    Table,
    Id,
    Nombre,
    Nit,
    Contacto,
}
