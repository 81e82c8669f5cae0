//! Bill domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::bill::{BillDto, BillStatus, CreateBillDto},
    server::{
        error::AppError,
        model::parse_column,
        util::date::{format_billing_month, parse_billing_month},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    /// First day of the billed month.
    pub billing_month: NaiveDate,
    pub rent: i32,
    pub water: i32,
    pub electricity: i32,
    pub other: i32,
    pub total: i32,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub proof_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Bill {
    pub fn from_entity(
        entity: entity::bill::Model,
        room: Option<entity::room::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            room_number: room.map(|r| r.room_number).unwrap_or_default(),
            billing_month: entity.billing_month,
            rent: entity.rent,
            water: entity.water,
            electricity: entity.electricity,
            other: entity.other,
            total: entity.total,
            due_date: entity.due_date,
            status: parse_column("bill status", &entity.status)?,
            proof_image_url: entity.proof_image_url,
            created_at: entity.created_at,
            paid_at: entity.paid_at,
        })
    }

    pub fn into_dto(self) -> BillDto {
        BillDto {
            id: self.id,
            room_id: self.room_id,
            room_number: self.room_number,
            billing_month: format_billing_month(self.billing_month),
            rent: self.rent,
            water: self.water,
            electricity: self.electricity,
            other: self.other,
            total: self.total,
            due_date: self.due_date,
            status: self.status,
            proof_image_url: self.proof_image_url,
            created_at: self.created_at,
            paid_at: self.paid_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBillParams {
    pub room_id: i32,
    pub billing_month: NaiveDate,
    pub rent: i32,
    pub water: i32,
    pub electricity: i32,
    pub other: i32,
    pub due_date: NaiveDate,
}

impl CreateBillParams {
    /// Parses the `YYYY-MM` month; fails with 400 on a malformed month.
    /// Fails with 400 when the line items do not add up to an `i32`.
    pub fn from_dto(dto: CreateBillDto) -> Result<Self, AppError> {
        let params = Self {
            room_id: dto.room_id,
            billing_month: parse_billing_month(&dto.billing_month)?,
            rent: dto.rent,
            water: dto.water,
            electricity: dto.electricity,
            other: dto.other,
            due_date: dto.due_date,
        };
        if params.total().is_none() {
            return Err(AppError::BadRequest("ยอดรวมของบิลสูงเกินไป".to_string()));
        }

        Ok(params)
    }

    /// Sum of the line items, `None` on overflow.
    pub fn total(&self) -> Option<i32> {
        self.rent
            .checked_add(self.water)?
            .checked_add(self.electricity)?
            .checked_add(self.other)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BillFilter {
    pub status: Option<BillStatus>,
    pub month: Option<NaiveDate>,
    pub room_id: Option<i32>,
}
