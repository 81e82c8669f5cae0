use crate::model::dashboard::DashboardStatsDto;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub unavailable_rooms: u64,
    pub registered_users: u64,
    pub pending_queue: u64,
    pub unpaid_bills: u64,
    pub outstanding_amount: i64,
    pub pending_review_bills: u64,
    pub open_tasks: u64,
    pub waiting_parcels: u64,
}

impl DashboardStats {
    pub fn vacant_rooms(&self) -> u64 {
        self.total_rooms.saturating_sub(self.occupied_rooms)
    }

    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_rooms: self.total_rooms,
            occupied_rooms: self.occupied_rooms,
            vacant_rooms: self.vacant_rooms(),
            unavailable_rooms: self.unavailable_rooms,
            tenants: self.occupied_rooms,
            registered_users: self.registered_users,
            pending_queue: self.pending_queue,
            unpaid_bills: self.unpaid_bills,
            outstanding_amount: self.outstanding_amount,
            pending_review_bills: self.pending_review_bills,
            open_tasks: self.open_tasks,
            waiting_parcels: self.waiting_parcels,
        }
    }
}
