use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_procesos::Procesos;

static IDX_SUBPROCESOS_PROCESO_ID: &str = "idx-subprocesos-proceso_id";
static FK_SUBPROCESOS_PROCESO_ID: &str = "fk-subprocesos-proceso_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subprocesos::Table)
                    .if_not_exists()
                    .col(pk_auto(Subprocesos::Id))
                    .col(string(Subprocesos::Nombre))
                    .col(integer(Subprocesos::ProcesoId))
                    .col(timestamp(Subprocesos::FechaCreacion))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBPROCESOS_PROCESO_ID)
                            .from(Subprocesos::Table, Subprocesos::ProcesoId)
                            .to(Procesos::Table, Procesos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBPROCESOS_PROCESO_ID)
                    .table(Subprocesos::Table)
                    .col(Subprocesos::ProcesoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBPROCESOS_PROCESO_ID)
                    .table(Subprocesos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subprocesos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subprocesos {
    Table,
    Id,
    Nombre,
    ProcesoId,
    FechaCreacion,
}
