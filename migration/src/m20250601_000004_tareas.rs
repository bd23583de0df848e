use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000003_proyectos::Proyectos;

static IDX_TAREAS_PROYECTO_ID: &str = "idx-tareas-proyecto_id";
static FK_TAREAS_PROYECTO_ID: &str = "fk-tareas-proyecto_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tareas::Table)
                    .if_not_exists()
                    .col(pk_auto(Tareas::Id))
                    .col(integer(Tareas::ProyectoId))
                    .col(string(Tareas::Descripcion))
                    .col(string(Tareas::Responsable))
                    .col(date(Tareas::FechaInicio))
                    .col(date(Tareas::FechaFin))
                    .col(string(Tareas::Estado))
                    .col(timestamp(Tareas::FechaCreacion))
                    .col(date(Tareas::FechaProyectada))
                    .col(date_null(Tareas::FechaCumplimiento))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TAREAS_PROYECTO_ID)
                            .from(Tareas::Table, Tareas::ProyectoId)
                            .to(Proyectos::Table, Proyectos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAREAS_PROYECTO_ID)
                    .table(Tareas::Table)
                    .col(Tareas::ProyectoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAREAS_PROYECTO_ID)
                    .table(Tareas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tareas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tareas {
    Table,
    Id,
    ProyectoId,
    Descripcion,
    Responsable,
    FechaInicio,
    FechaFin,
    Estado,
    FechaCreacion,
    FechaProyectada,
    FechaCumplimiento,
}
