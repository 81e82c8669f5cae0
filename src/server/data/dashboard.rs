use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::{
    model::{bill::BillStatus, queue::QueueStatus, task::TaskStatus},
    server::model::dashboard::DashboardStats,
};

pub struct DashboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts every figure shown on the admin dashboard.
    pub async fn stats(&self) -> Result<DashboardStats, DbErr> {
        let total_rooms = entity::prelude::Room::find().count(self.db).await?;
        let occupied_rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::RenterId.is_not_null())
            .count(self.db)
            .await?;
        let unavailable_rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::RenterId.is_null())
            .filter(entity::room::Column::Available.eq(false))
            .count(self.db)
            .await?;

        let registered_users = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(false))
            .filter(entity::user::Column::RoomId.is_null())
            .count(self.db)
            .await?;

        let pending_queue = entity::prelude::Queue::find()
            .filter(entity::queue::Column::Status.eq(QueueStatus::Pending.as_str()))
            .count(self.db)
            .await?;

        // Summed here rather than with SUM() since MySQL returns DECIMAL for integer sums.
        let unpaid_totals: Vec<i32> = entity::prelude::Bill::find()
            .select_only()
            .column(entity::bill::Column::Total)
            .filter(entity::bill::Column::Status.ne(BillStatus::Paid.as_str()))
            .into_tuple()
            .all(self.db)
            .await?;
        let outstanding_amount = unpaid_totals.iter().map(|t| i64::from(*t)).sum();

        let unpaid_bills = entity::prelude::Bill::find()
            .filter(entity::bill::Column::Status.eq(BillStatus::Unpaid.as_str()))
            .count(self.db)
            .await?;
        let pending_review_bills = entity::prelude::Bill::find()
            .filter(entity::bill::Column::Status.eq(BillStatus::PendingReview.as_str()))
            .count(self.db)
            .await?;

        let open_tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::Status.ne(TaskStatus::Completed.as_str()))
            .count(self.db)
            .await?;

        let waiting_parcels = entity::prelude::Parcel::find()
            .filter(entity::parcel::Column::PickedUp.eq(false))
            .count(self.db)
            .await?;

        Ok(DashboardStats {
            total_rooms,
            occupied_rooms,
            unavailable_rooms,
            registered_users,
            pending_queue,
            unpaid_bills,
            outstanding_amount,
            pending_review_bills,
            open_tasks,
            waiting_parcels,
        })
    }
}
