use sea_orm::DatabaseConnection;

use crate::server::{
    data::dashboard::DashboardRepository, error::AppError, model::dashboard::DashboardStats,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        Ok(DashboardRepository::new(self.db).stats().await?)
    }
}
