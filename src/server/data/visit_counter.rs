//! Visit counter repository for the singleton counter row.
//!
//! The counter lives in a single row whose primary key is pinned to `COUNTER_ID`, so the
//! table can never hold more than one current-period record. Increments are a single
//! `INSERT … ON CONFLICT DO UPDATE` statement evaluated by the database, leaving no
//! read-modify-write window between concurrent visits.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::server::model::{period::Period, visit::VisitCounter};

/// Primary key of the singleton counter row.
pub const COUNTER_ID: i32 = 1;

/// Repository providing database operations for the visit counter.
pub struct VisitCounterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VisitCounterRepository<'a, C> {
    /// Creates a new VisitCounterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the counter row.
    ///
    /// # Returns
    /// - `Ok(Some(VisitCounter))` - Counter exists
    /// - `Ok(None)` - No visit has been counted yet
    /// - `Err(DbErr)` - Database error or unparsable stored month
    pub async fn find(&self) -> Result<Option<VisitCounter>, DbErr> {
        let entity = entity::prelude::VisitCounter::find_by_id(COUNTER_ID)
            .one(self.db)
            .await?;

        entity.map(VisitCounter::from_entity).transpose()
    }

    /// Atomically adds one view.
    ///
    /// Creates the counter for `period` with one view when absent. When present, only the
    /// view count and `updated_at` change; moving the counter to a new month is left to
    /// rollover so a visit never relabels a month that has not been archived.
    ///
    /// # Arguments
    /// - `period` - Month to label a freshly created counter with
    /// - `now` - Timestamp written to `updated_at`
    ///
    /// # Returns
    /// - `Ok(VisitCounter)` - Counter after the increment
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn increment(
        &self,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<VisitCounter, DbErr> {
        let entity = entity::prelude::VisitCounter::insert(entity::visit_counter::ActiveModel {
            id: ActiveValue::Set(COUNTER_ID),
            month: ActiveValue::Set(period.name().to_string()),
            year: ActiveValue::Set(period.year()),
            views: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::visit_counter::Column::Id)
                .value(
                    entity::visit_counter::Column::Views,
                    Expr::col((
                        entity::prelude::VisitCounter,
                        entity::visit_counter::Column::Views,
                    ))
                    .add(1),
                )
                .update_column(entity::visit_counter::Column::UpdatedAt)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        VisitCounter::from_entity(entity)
    }

    /// Resets the counter to zero views for `next`, provided it still matches `expected`.
    ///
    /// Compare-and-set on period and view count: if another visit or rollover changed the
    /// row since `expected` was read, nothing is written.
    ///
    /// # Arguments
    /// - `expected` - Counter state the caller read and intends to archive
    /// - `next` - Month the counter moves to
    /// - `now` - Timestamp written to `updated_at`
    ///
    /// # Returns
    /// - `Ok(true)` - Counter reset
    /// - `Ok(false)` - Row changed concurrently; nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_if_unchanged(
        &self,
        expected: &VisitCounter,
        next: Period,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::VisitCounter::update_many()
            .col_expr(entity::visit_counter::Column::Month, Expr::value(next.name()))
            .col_expr(entity::visit_counter::Column::Year, Expr::value(next.year()))
            .col_expr(entity::visit_counter::Column::Views, Expr::value(0i64))
            .col_expr(entity::visit_counter::Column::UpdatedAt, Expr::value(now))
            .filter(entity::visit_counter::Column::Id.eq(COUNTER_ID))
            .filter(entity::visit_counter::Column::Month.eq(expected.period.name()))
            .filter(entity::visit_counter::Column::Year.eq(expected.period.year()))
            .filter(entity::visit_counter::Column::Views.eq(expected.views))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
