//! Archived period repository for the append-only month history.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::visit::{ArchivePeriodParam, ArchivedPeriod};

/// Repository providing database operations for archived months.
///
/// Only appends and reads; archived rows are never updated or deleted.
pub struct ArchivedPeriodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArchivedPeriodRepository<'a, C> {
    /// Creates a new ArchivedPeriodRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a completed month.
    ///
    /// # Arguments
    /// - `param` - Month, final view count, and archive time
    ///
    /// # Returns
    /// - `Ok(ArchivedPeriod)` - The created archive record
    /// - `Err(DbErr)` - Database error, including a duplicate month where the unique
    ///   `(year, month)` index exists
    pub async fn create(&self, param: ArchivePeriodParam) -> Result<ArchivedPeriod, DbErr> {
        let entity = entity::archived_period::ActiveModel {
            id: ActiveValue::NotSet,
            month: ActiveValue::Set(param.period.name().to_string()),
            year: ActiveValue::Set(param.period.year()),
            views: ActiveValue::Set(param.views),
            archived_at: ActiveValue::Set(param.archived_at),
        }
        .insert(self.db)
        .await?;

        ArchivedPeriod::from_entity(entity)
    }

    /// Gets every archived month in insertion (chronological) order.
    ///
    /// # Returns
    /// - `Ok(Vec<ArchivedPeriod>)` - All archived months, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<ArchivedPeriod>, DbErr> {
        let entities = entity::prelude::ArchivedPeriod::find()
            .order_by_asc(entity::archived_period::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ArchivedPeriod::from_entity)
            .collect()
    }
}
