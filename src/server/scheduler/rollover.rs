use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, model::visit::RolloverOutcome, service::visit_counter::VisitCounterService,
};

/// Midnight UTC on the first day of every month (sec min hour day-of-month month day-of-week).
pub const ROLLOVER_SCHEDULE: &str = "0 0 0 1 * *";

/// Starts the monthly rollover scheduler
///
/// Registers a job that archives the completed month and resets the counter at the start
/// of every calendar month. The returned scheduler must be kept alive for the job to keep
/// firing.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(ROLLOVER_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = run_rollover(&db, Utc::now()).await {
                tracing::error!("Error rolling over visit counter: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Monthly rollover scheduler started ({})", ROLLOVER_SCHEDULE);

    Ok(scheduler)
}

/// Runs one rollover and logs its outcome
pub async fn run_rollover(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<RolloverOutcome, AppError> {
    let outcome = VisitCounterService::new(db).rollover(now).await?;

    match &outcome {
        RolloverOutcome::Archived { period, views } => {
            tracing::info!("Archived {} with {} views", period, views);
        }
        RolloverOutcome::Skipped(reason) => {
            tracing::info!("Rollover skipped: {:?}", reason);
        }
    }

    Ok(outcome)
}
