use sea_orm::entity::prelude::*;

/// Top-level organizational grouping.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "procesos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre", unique)]
    pub name: String,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subprocess::Entity")]
    Subprocess,
    #[sea_orm(has_many = "super::project::Entity")]
    Project,
}

impl Related<super::subprocess::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subprocess.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
