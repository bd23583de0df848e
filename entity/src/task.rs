use sea_orm::entity::prelude::*;

/// Atomic unit of work under a project; its `status` drives progress computation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tareas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "proyecto_id")]
    pub project_id: i32,
    #[sea_orm(column_name = "descripcion")]
    pub description: String,
    #[sea_orm(column_name = "responsable")]
    pub responsible: String,
    #[sea_orm(column_name = "fecha_inicio")]
    pub start_date: Date,
    #[sea_orm(column_name = "fecha_fin")]
    pub end_date: Date,
    #[sea_orm(column_name = "estado")]
    pub status: String,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "fecha_proyectada")]
    pub projected_date: Date,
    #[sea_orm(column_name = "fecha_cumplimiento")]
    pub fulfillment_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
