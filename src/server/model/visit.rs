//! Domain models for visitor counting.
//!
//! Defines the running counter for the active month, archived month totals, the
//! marker handed to clients, and the outcomes of counting and rollover operations.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::visit::{ArchivedPeriodDto, VisitCountDto},
    server::model::period::Period,
};

/// Running visit count for the active calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitCounter {
    /// Calendar month the views are being counted for.
    pub period: Period,
    /// Accepted new visits in `period`.
    pub views: i64,
}

impl VisitCounter {
    /// Counter for `period` that has not seen a visit yet. Never persisted by itself.
    pub fn empty(period: Period) -> Self {
        Self { period, views: 0 }
    }

    /// Converts an entity model to a counter domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(VisitCounter)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored month name is not a month
    pub fn from_entity(entity: entity::visit_counter::Model) -> Result<Self, DbErr> {
        let period = Period::parse(entity.year, &entity.month).ok_or_else(|| {
            DbErr::Custom(format!("Failed to parse stored month: {}", entity.month))
        })?;

        Ok(Self {
            period,
            views: entity.views,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> VisitCountDto {
        VisitCountDto {
            month: self.period.name().to_string(),
            views: self.views,
        }
    }
}

/// Final visit count of a completed calendar month. Never mutated once written.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedPeriod {
    pub id: i32,
    pub period: Period,
    pub views: i64,
    /// When the rollover that produced this record ran.
    pub archived_at: DateTime<Utc>,
}

impl ArchivedPeriod {
    /// Converts an entity model to an archive domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ArchivedPeriod)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored month name is not a month
    pub fn from_entity(entity: entity::archived_period::Model) -> Result<Self, DbErr> {
        let period = Period::parse(entity.year, &entity.month).ok_or_else(|| {
            DbErr::Custom(format!("Failed to parse archived month: {}", entity.month))
        })?;

        Ok(Self {
            id: entity.id,
            period,
            views: entity.views,
            archived_at: entity.archived_at,
        })
    }

    pub fn into_dto(self) -> ArchivedPeriodDto {
        ArchivedPeriodDto {
            month: self.period.name().to_string(),
            year: self.period.year(),
            views: self.views,
        }
    }
}

/// Parameters for appending a completed month to the archive.
#[derive(Debug, Clone)]
pub struct ArchivePeriodParam {
    /// The completed month.
    pub period: Period,
    /// Final view count of that month.
    pub views: i64,
    /// Time the rollover ran.
    pub archived_at: DateTime<Utc>,
}

/// Opaque token handed to a client so repeat visits within the month are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitMarker {
    pub token: String,
    /// Last millisecond of the month the marker was issued in.
    pub expires_at: DateTime<Utc>,
}

/// Result of recording a visit.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitOutcome {
    /// First visit this month; counter incremented and a marker issued.
    New(VisitMarker),
    /// Client already holds a valid marker; nothing changed.
    Existing,
}

impl VisitOutcome {
    /// Response body text for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New(_) => "New",
            Self::Existing => "Existing",
        }
    }
}

/// Result of a rollover attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RolloverOutcome {
    /// `period` was archived with `views` and the counter reset for the new month.
    Archived { period: Period, views: i64 },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No visit has ever been counted.
    NoRecord,
    /// The counter already tracks the current month (or a later one).
    AlreadyCurrent,
}
