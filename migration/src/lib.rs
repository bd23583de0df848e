pub use sea_orm_migration::prelude::*;

mod m20250601_000001_procesos;
mod m20250601_000002_subprocesos;
mod m20250601_000003_proyectos;
mod m20250601_000004_tareas;
mod m20250601_000005_aseguradoras;
mod m20250601_000006_contratos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_procesos::Migration),
            Box::new(m20250601_000002_subprocesos::Migration),
            Box::new(m20250601_000003_proyectos::Migration),
            Box::new(m20250601_000004_tareas::Migration),
            Box::new(m20250601_000005_aseguradoras::Migration),
            Box::new(m20250601_000006_contratos::Migration),
        ]
    }
}
