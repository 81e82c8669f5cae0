//! Bill data repository.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::bill::BillStatus,
    server::model::bill::{Bill, BillFilter, CreateBillParams},
};

pub struct BillRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unpaid bill. The total is computed from the line items.
    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, DbErr> {
        let total = params
            .total()
            .ok_or_else(|| DbErr::Custom("Bill total overflows".to_string()))?;
        let entity = entity::bill::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            billing_month: ActiveValue::Set(params.billing_month),
            rent: ActiveValue::Set(params.rent),
            water: ActiveValue::Set(params.water),
            electricity: ActiveValue::Set(params.electricity),
            other: ActiveValue::Set(params.other),
            total: ActiveValue::Set(total),
            due_date: ActiveValue::Set(params.due_date),
            status: ActiveValue::Set(BillStatus::Unpaid.as_str().to_string()),
            proof_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            paid_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let room = entity::prelude::Room::find_by_id(entity.room_id)
            .one(self.db)
            .await?;

        Bill::from_entity(entity, room)
    }

    pub async fn exists_for_month(
        &self,
        room_id: i32,
        billing_month: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Bill::find()
            .filter(entity::bill::Column::RoomId.eq(room_id))
            .filter(entity::bill::Column::BillingMonth.eq(billing_month))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bill>, DbErr> {
        let Some((bill, room)) = entity::prelude::Bill::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(Bill::from_entity(bill, room)?))
    }

    /// Gets bills, latest billing month first.
    ///
    /// # Returns
    /// - `Ok((bills, total))` - Bills of the requested page and the total matching
    /// - `Err(DbErr)` - Database error or unparseable status column
    pub async fn get_paginated(
        &self,
        filter: BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Bill>, u64), DbErr> {
        let mut query = entity::prelude::Bill::find();
        if let Some(status) = filter.status {
            query = query.filter(entity::bill::Column::Status.eq(status.as_str()));
        }
        if let Some(month) = filter.month {
            query = query.filter(entity::bill::Column::BillingMonth.eq(month));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::bill::Column::RoomId.eq(room_id));
        }

        let paginator = query
            .order_by_desc(entity::bill::Column::BillingMonth)
            .order_by_desc(entity::bill::Column::Id)
            .find_also_related(entity::prelude::Room)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bills = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(bill, room)| Bill::from_entity(bill, room))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bills, total))
    }

    /// Stores the payment proof and moves the bill to pending review.
    pub async fn set_proof(&self, id: i32, proof_image_url: String) -> Result<u64, DbErr> {
        let result = entity::prelude::Bill::update_many()
            .col_expr(
                entity::bill::Column::ProofImageUrl,
                Expr::value(Some(proof_image_url)),
            )
            .col_expr(
                entity::bill::Column::Status,
                Expr::value(BillStatus::PendingReview.as_str().to_string()),
            )
            .filter(entity::bill::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: BillStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Bill::update_many()
            .col_expr(
                entity::bill::Column::Status,
                Expr::value(status.as_str().to_string()),
            )
            .col_expr(entity::bill::Column::PaidAt, Expr::value(paid_at))
            .filter(entity::bill::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Bill::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Unpaid bills whose due date is before `today`.
    pub async fn find_overdue(&self, today: NaiveDate) -> Result<Vec<Bill>, DbErr> {
        let rows = entity::prelude::Bill::find()
            .filter(entity::bill::Column::Status.eq(BillStatus::Unpaid.as_str()))
            .filter(entity::bill::Column::DueDate.lt(today))
            .order_by_asc(entity::bill::Column::DueDate)
            .find_also_related(entity::prelude::Room)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(bill, room)| Bill::from_entity(bill, room))
            .collect()
    }
}
