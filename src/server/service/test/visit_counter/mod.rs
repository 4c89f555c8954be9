use crate::server::{
    error::AppError,
    model::{
        period::Period,
        visit::{RolloverOutcome, SkipReason, VisitCounter, VisitOutcome},
    },
    service::visit_counter::VisitCounterService,
};
use chrono::{DateTime, Month, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod history;
mod record_visit;
mod rollover;

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

async fn archive_rows(db: &sea_orm::DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::ArchivedPeriod::find().count(db).await?)
}
