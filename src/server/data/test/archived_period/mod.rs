use crate::server::{
    data::archived_period::ArchivedPeriodRepository,
    error::AppError,
    model::{period::Period, visit::ArchivePeriodParam},
};
use chrono::{Month, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};
