use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000005_aseguradoras::Aseguradoras;

static IDX_CONTRATOS_ASEGURADORA_ID: &str = "idx-contratos-aseguradora_id";
static IDX_CONTRATOS_FECHA_FIN: &str = "idx-contratos-fecha_fin";
static FK_CONTRATOS_ASEGURADORA_ID: &str = "fk-contratos-aseguradora_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contratos::Table)
                    .if_not_exists()
                    .col(pk_auto(Contratos::Id))
                    .col(string(Contratos::Nombre))
                    .col(date(Contratos::FechaInicio))
                    .col(date(Contratos::FechaFin))
                    .col(string(Contratos::TipoTarifa))
                    .col(double(Contratos::TechoMensual))
                    .col(text_null(Contratos::Condiciones))
                    .col(integer(Contratos::AseguradoraId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTRATOS_ASEGURADORA_ID)
                            .from(Contratos::Table, Contratos::AseguradoraId)
                            .to(Aseguradoras::Table, Aseguradoras::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRATOS_ASEGURADORA_ID)
                    .table(Contratos::Table)
                    .col(Contratos::AseguradoraId)
                    .to_owned(),
            )
            .await?;

        // Upcoming-expiry reports filter on the end date
        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRATOS_FECHA_FIN)
                    .table(Contratos::Table)
                    .col(Contratos::FechaFin)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRATOS_FECHA_FIN)
                    .table(Contratos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRATOS_ASEGURADORA_ID)
                    .table(Contratos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contratos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contratos {
    Table,
    Id,
    Nombre,
    FechaInicio,
    FechaFin,
    TipoTarifa,
    TechoMensual,
    Condiciones,
    AseguradoraId,
}
