//! Archived period fixtures for in-memory test data.

use chrono::{DateTime, TimeZone, Utc};

/// Creates an archive entity model with default values.
///
/// Defaults: February 2025 with 17 views.
pub fn entity() -> entity::archived_period::Model {
    entity_builder().build()
}

/// Creates an archive entity builder for customization.
pub fn entity_builder() -> ArchivedPeriodEntityBuilder {
    ArchivedPeriodEntityBuilder::default()
}

/// Builder for archive entity models.
pub struct ArchivedPeriodEntityBuilder {
    id: i32,
    month: String,
    year: i32,
    views: i64,
    archived_at: DateTime<Utc>,
}

impl Default for ArchivedPeriodEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            month: "February".to_string(),
            year: 2025,
            views: 17,
            archived_at: Utc
                .with_ymd_and_hms(2025, 3, 1, 0, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }
    }
}

impl ArchivedPeriodEntityBuilder {
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn build(self) -> entity::archived_period::Model {
        entity::archived_period::Model {
            id: self.id,
            month: self.month,
            year: self.year,
            views: self.views,
            archived_at: self.archived_at,
        }
    }
}
