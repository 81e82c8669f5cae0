use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::parcel::{CreateParcelParams, Parcel, ParcelFilter};

pub struct ParcelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParcelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateParcelParams) -> Result<Parcel, DbErr> {
        let entity = entity::parcel::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            recipient_name: ActiveValue::Set(params.recipient_name),
            carrier: ActiveValue::Set(params.carrier),
            tracking_number: ActiveValue::Set(params.tracking_number),
            picked_up: ActiveValue::Set(false),
            received_at: ActiveValue::Set(Utc::now()),
            picked_up_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let room = entity::prelude::Room::find_by_id(entity.room_id)
            .one(self.db)
            .await?;

        Ok(Parcel::from_entity(entity, room))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Parcel>, DbErr> {
        let entity = entity::prelude::Parcel::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        Ok(entity.map(|(parcel, room)| Parcel::from_entity(parcel, room)))
    }

    /// Gets parcels, most recently received first.
    pub async fn get_paginated(
        &self,
        filter: ParcelFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Parcel>, u64), DbErr> {
        let mut query = entity::prelude::Parcel::find();
        if let Some(picked_up) = filter.picked_up {
            query = query.filter(entity::parcel::Column::PickedUp.eq(picked_up));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::parcel::Column::RoomId.eq(room_id));
        }

        let paginator = query
            .order_by_desc(entity::parcel::Column::ReceivedAt)
            .order_by_desc(entity::parcel::Column::Id)
            .find_also_related(entity::prelude::Room)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let parcels = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(parcel, room)| Parcel::from_entity(parcel, room))
            .collect();

        Ok((parcels, total))
    }

    pub async fn mark_picked_up(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::update_many()
            .col_expr(entity::parcel::Column::PickedUp, Expr::value(true))
            .col_expr(
                entity::parcel::Column::PickedUpAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::parcel::Column::Id.eq(id))
            .filter(entity::parcel::Column::PickedUp.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
