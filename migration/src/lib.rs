pub use sea_orm_migration::prelude::*;

mod m20250301_000001_institution;
mod m20250301_000002_app_user;
mod m20250301_000003_admin;
mod m20250301_000004_hostel;
mod m20250301_000005_room;
mod m20250301_000006_warden;
mod m20250301_000007_student;
mod m20250301_000008_maintenance_request;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_institution::Migration),
            Box::new(m20250301_000002_app_user::Migration),
            Box::new(m20250301_000003_admin::Migration),
            Box::new(m20250301_000004_hostel::Migration),
            Box::new(m20250301_000005_room::Migration),
            Box::new(m20250301_000006_warden::Migration),
            Box::new(m20250301_000007_student::Migration),
            Box::new(m20250301_000008_maintenance_request::Migration),
        ]
    }
}
