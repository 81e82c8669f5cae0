use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct DashboardStatsDto {
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub vacant_rooms: u64,
    /// Vacant rooms taken out of service.
    pub unavailable_rooms: u64,
    /// Occupied rooms, one tenant per room.
    pub tenants: u64,
    /// Self-registered accounts without a room.
    pub registered_users: u64,
    pub pending_queue: u64,
    pub unpaid_bills: u64,
    /// Sum of `unpaid` and `pending_review` bill totals.
    pub outstanding_amount: i64,
    pub pending_review_bills: u64,
    pub open_tasks: u64,
    pub waiting_parcels: u64,
}
