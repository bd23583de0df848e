use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_procesos::Procesos, m20250601_000002_subprocesos::Subprocesos};

static IDX_PROYECTOS_PROCESO_ID: &str = "idx-proyectos-proceso_id";
static IDX_PROYECTOS_SUBPROCESO_ID: &str = "idx-proyectos-subproceso_id";
static FK_PROYECTOS_PROCESO_ID: &str = "fk-proyectos-proceso_id";
static FK_PROYECTOS_SUBPROCESO_ID: &str = "fk-proyectos-subproceso_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Proyectos::Table)
                    .if_not_exists()
                    .col(pk_auto(Proyectos::Id))
                    .col(string(Proyectos::Nombre))
                    .col(string(Proyectos::Responsable))
                    .col(string(Proyectos::Estado))
                    .col(integer(Proyectos::ProcesoId))
                    .col(integer(Proyectos::SubprocesoId))
                    .col(timestamp(Proyectos::FechaCreacion))
                    .col(date(Proyectos::FechaProyectada))
                    .col(date_null(Proyectos::FechaCumplimiento))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROYECTOS_PROCESO_ID)
                            .from(Proyectos::Table, Proyectos::ProcesoId)
                            .to(Procesos::Table, Procesos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROYECTOS_SUBPROCESO_ID)
                            .from(Proyectos::Table, Proyectos::SubprocesoId)
                            .to(Subprocesos::Table, Subprocesos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROYECTOS_PROCESO_ID)
                    .table(Proyectos::Table)
                    .col(Proyectos::ProcesoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROYECTOS_SUBPROCESO_ID)
                    .table(Proyectos::Table)
                    .col(Proyectos::SubprocesoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROYECTOS_SUBPROCESO_ID)
                    .table(Proyectos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROYECTOS_PROCESO_ID)
                    .table(Proyectos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Proyectos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Proyectos {
    Table,
    Id,
    Nombre,
    Responsable,
    Estado,
    ProcesoId,
    SubprocesoId,
    FechaCreacion,
    FechaProyectada,
    FechaCumplimiento,
}
