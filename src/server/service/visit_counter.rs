//! Visitor counting and monthly rollover.
//!
//! `VisitCounterService` owns the rules around the singleton counter:
//!
//! - A visit without a marker increments the counter atomically and issues a marker that
//!   expires at month end. A visit with a marker changes nothing.
//! - Rollover archives the stored month and resets the counter for the current month. It
//!   runs from the month-start cron job, once at startup, and inline before every counted
//!   visit, so a trigger missed during downtime is healed by the next visit.
//! - Repeated rollovers for the same transition are no-ops: once the counter is reset it
//!   already tracks the current month.

pub mod marker;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{archived_period::ArchivedPeriodRepository, visit_counter::VisitCounterRepository},
    error::AppError,
    model::{
        period::Period,
        visit::{
            ArchivePeriodParam, ArchivedPeriod, RolloverOutcome, SkipReason, VisitCounter,
            VisitOutcome,
        },
    },
};

/// Compare-and-set retries before a rollover gives up under sustained concurrent writes.
const MAX_ROLLOVER_ATTEMPTS: usize = 5;

pub struct VisitCounterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitCounterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a visit at the current time.
    ///
    /// # Arguments
    /// - `has_valid_marker` - Whether the client presented an unexpired marker
    ///
    /// # Returns
    /// - `Ok(VisitOutcome::New(marker))` - Visit counted; marker must be handed to the client
    /// - `Ok(VisitOutcome::Existing)` - Visit already counted this month
    /// - `Err(AppError)` - Store unavailable
    pub async fn record_visit(&self, has_valid_marker: bool) -> Result<VisitOutcome, AppError> {
        self.record_visit_at(has_valid_marker, Utc::now()).await
    }

    /// Records a visit as if it happened at `now`.
    ///
    /// The marker expires at the end of the month the view was counted in, which is the
    /// stored month when it lies ahead of `now`.
    pub async fn record_visit_at(
        &self,
        has_valid_marker: bool,
        now: DateTime<Utc>,
    ) -> Result<VisitOutcome, AppError> {
        if has_valid_marker {
            return Ok(VisitOutcome::Existing);
        }

        let period = Period::containing(now);

        if let RolloverOutcome::Archived { period, views } = self.rollover(now).await? {
            tracing::info!(
                "Caught up missed rollover: archived {} with {} views",
                period,
                views
            );
        }

        let counter = VisitCounterRepository::new(self.db)
            .increment(period, now)
            .await?;

        tracing::debug!("Counted visit {} for {}", counter.views, counter.period);

        // Later than `period` when the clock reads behind the stored month.
        Ok(VisitOutcome::New(marker::issue(counter.period)?))
    }

    /// Gets the counter for the current month.
    ///
    /// # Returns
    /// - `Ok(VisitCounter)` - Stored counter verbatim, or zero views for the current month
    ///   when nothing was ever counted (not persisted)
    /// - `Err(AppError)` - Store unavailable
    pub async fn current_count(&self) -> Result<VisitCounter, AppError> {
        self.current_count_at(Utc::now()).await
    }

    /// Gets the counter, defaulting to an empty counter for the month containing `now`.
    pub async fn current_count_at(&self, now: DateTime<Utc>) -> Result<VisitCounter, AppError> {
        let counter = VisitCounterRepository::new(self.db).find().await?;

        Ok(counter.unwrap_or_else(|| VisitCounter::empty(Period::containing(now))))
    }

    /// Archives the stored month and resets the counter if the calendar month has advanced.
    ///
    /// The archive insert and counter reset run in one transaction. The reset is a
    /// compare-and-set on the counter as read, so a visit counted after the read or a
    /// concurrent rollover makes this attempt roll back and re-read.
    ///
    /// # Arguments
    /// - `now` - The instant the rollover is evaluated for
    ///
    /// # Returns
    /// - `Ok(RolloverOutcome::Archived)` - Stored month archived, counter reset to zero
    /// - `Ok(RolloverOutcome::Skipped(NoRecord))` - Nothing was ever counted
    /// - `Ok(RolloverOutcome::Skipped(AlreadyCurrent))` - Counter already tracks `now`'s month
    /// - `Err(AppError)` - Store unavailable, or compare-and-set never settled
    pub async fn rollover(&self, now: DateTime<Utc>) -> Result<RolloverOutcome, AppError> {
        let current = Period::containing(now);

        for _ in 0..MAX_ROLLOVER_ATTEMPTS {
            let Some(counter) = VisitCounterRepository::new(self.db).find().await? else {
                return Ok(RolloverOutcome::Skipped(SkipReason::NoRecord));
            };

            if counter.period >= current {
                return Ok(RolloverOutcome::Skipped(SkipReason::AlreadyCurrent));
            }

            let txn = self.db.begin().await?;

            let reset = VisitCounterRepository::new(&txn)
                .reset_if_unchanged(&counter, current, now)
                .await?;

            if !reset {
                txn.rollback().await?;
                continue;
            }

            ArchivedPeriodRepository::new(&txn)
                .create(ArchivePeriodParam {
                    period: counter.period,
                    views: counter.views,
                    archived_at: now,
                })
                .await?;

            txn.commit().await?;

            if counter.period < current.previous() {
                tracing::warn!(
                    "Counter was stale for more than one month; archived {} under its own label",
                    counter.period
                );
            }

            return Ok(RolloverOutcome::Archived {
                period: counter.period,
                views: counter.views,
            });
        }

        Err(AppError::InternalError(format!(
            "Rollover to {} did not settle after {} attempts",
            current, MAX_ROLLOVER_ATTEMPTS
        )))
    }

    /// Gets every archived month, oldest first.
    pub async fn history(&self) -> Result<Vec<ArchivedPeriod>, AppError> {
        let archived = ArchivedPeriodRepository::new(self.db).get_all().await?;

        Ok(archived)
    }
}
