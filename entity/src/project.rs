use sea_orm::entity::prelude::*;

/// Unit of work under a subprocess, tracked to completion.
///
/// `status` is stored as its label (`Pendiente`, `En curso`, `Finalizada`); rows written
/// by older tooling may hold other values, which readers must tolerate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "proyectos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "responsable")]
    pub responsible: String,
    #[sea_orm(column_name = "estado")]
    pub status: String,
    #[sea_orm(column_name = "proceso_id")]
    pub process_id: i32,
    #[sea_orm(column_name = "subproceso_id")]
    pub subprocess_id: i32,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "fecha_proyectada")]
    pub projected_date: Date,
    #[sea_orm(column_name = "fecha_cumplimiento")]
    pub completion_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::process::Entity",
        from = "Column::ProcessId",
        to = "super::process::Column::Id",
        on_delete = "Cascade"
    )]
    Process,
    #[sea_orm(
        belongs_to = "super::subprocess::Entity",
        from = "Column::SubprocessId",
        to = "super::subprocess::Column::Id",
        on_delete = "Cascade"
    )]
    Subprocess,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Process.def()
    }
}

impl Related<super::subprocess::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subprocess.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
