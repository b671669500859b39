use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        dashboard::{DashboardDto, HostelOccupancyDto, MaintenanceSummaryDto},
        maintenance::MaintenanceStatus,
    },
    server::{
        data::{
            hostel::HostelRepository, maintenance::MaintenanceRequestRepository,
            room::RoomRepository, student::StudentRepository, warden::WardenRepository,
        },
        error::Error,
    },
};

/// Aggregates the figures shown on the administrator dashboard.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, institution_id: i32) -> Result<DashboardDto, Error> {
        let hostels = HostelRepository::new(self.db).list(institution_id).await?;
        let rooms = RoomRepository::new(self.db)
            .list(institution_id, None)
            .await?;
        let students = StudentRepository::new(self.db).count(institution_id).await?;
        let wardens = WardenRepository::new(self.db).count(institution_id).await?;

        let request_repo = MaintenanceRequestRepository::new(self.db);
        let maintenance = MaintenanceSummaryDto {
            pending: request_repo
                .count_by_status(institution_id, MaintenanceStatus::Pending)
                .await?,
            in_progress: request_repo
                .count_by_status(institution_id, MaintenanceStatus::InProgress)
                .await?,
            resolved: request_repo
                .count_by_status(institution_id, MaintenanceStatus::Resolved)
                .await?,
        };

        let mut per_hostel: HashMap<i32, (u64, i64, i64)> = HashMap::new();
        for room in &rooms {
            let entry = per_hostel.entry(room.hostel_id).or_default();
            entry.0 += 1;
            entry.1 += i64::from(room.capacity);
            entry.2 += i64::from(room.occupancy);
        }

        let hostel_occupancy = hostels
            .iter()
            .map(|hostel| {
                let (rooms, capacity, occupancy) =
                    per_hostel.get(&hostel.id).copied().unwrap_or_default();

                HostelOccupancyDto {
                    hostel_id: hostel.id,
                    name: hostel.name.clone(),
                    rooms,
                    capacity,
                    occupancy,
                }
            })
            .collect();

        Ok(DashboardDto {
            hostels: hostels.len() as u64,
            rooms: rooms.len() as u64,
            students,
            wardens,
            total_capacity: rooms.iter().map(|r| i64::from(r.capacity)).sum(),
            total_occupancy: rooms.iter().map(|r| i64::from(r.occupancy)).sum(),
            maintenance,
            hostel_occupancy,
        })
    }
}
