use serde::{Deserialize, Serialize};

/// Figures behind the administrator dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    pub hostels: u64,
    pub rooms: u64,
    pub students: u64,
    pub wardens: u64,
    pub total_capacity: i64,
    pub total_occupancy: i64,
    pub maintenance: MaintenanceSummaryDto,
    pub hostel_occupancy: Vec<HostelOccupancyDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceSummaryDto {
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HostelOccupancyDto {
    pub hostel_id: i32,
    pub name: String,
    pub rooms: u64,
    pub capacity: i64,
    pub occupancy: i64,
}
