use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::bill::BillService, state::AppState, util::date::local_today};

/// Every day at 02:00 UTC (09:00 Bangkok).
const SCHEDULE: &str = "0 0 2 * * *";

/// Starts the daily overdue bill reminder.
///
/// Each run emails the renter of every unpaid bill whose due date has passed.
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            let service = BillService::new(
                &state.db,
                state.storage.as_ref(),
                state.mailer.as_ref(),
                &state.app_url,
            );

            match service.remind_overdue(local_today()).await {
                Ok(sent) => tracing::info!("Sent {} overdue bill reminders", sent),
                Err(e) => tracing::error!("Error sending overdue bill reminders: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Bill reminder scheduler started");

    Ok(())
}
