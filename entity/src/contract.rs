use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contratos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "fecha_inicio")]
    pub start_date: Date,
    #[sea_orm(column_name = "fecha_fin")]
    pub end_date: Date,
    #[sea_orm(column_name = "tipo_tarifa")]
    pub rate_type: String,
    #[sea_orm(column_name = "techo_mensual")]
    pub monthly_cap: f64,
    #[sea_orm(column_name = "condiciones", column_type = "Text", nullable)]
    pub conditions: Option<String>,
    #[sea_orm(column_name = "aseguradora_id")]
    pub insurer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::insurer::Entity",
        from = "Column::InsurerId",
        to = "super::insurer::Column::Id",
        on_delete = "Cascade"
    )]
    Insurer,
}

impl Related<super::insurer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Insurer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
