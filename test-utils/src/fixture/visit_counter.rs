//! Visit counter fixtures for in-memory test data.

use chrono::{DateTime, TimeZone, Utc};

/// Primary key of the singleton counter row.
///
/// Must equal the server's `data::visit_counter::COUNTER_ID`; a server test asserts this.
pub const COUNTER_ID: i32 = 1;

/// Creates a counter entity model with default values.
///
/// Defaults: March 2025 with 42 views.
pub fn entity() -> entity::visit_counter::Model {
    entity_builder().build()
}

/// Creates a counter entity builder for customization.
pub fn entity_builder() -> VisitCounterEntityBuilder {
    VisitCounterEntityBuilder::default()
}

/// Builder for counter entity models.
pub struct VisitCounterEntityBuilder {
    month: String,
    year: i32,
    views: i64,
    updated_at: DateTime<Utc>,
}

impl Default for VisitCounterEntityBuilder {
    fn default() -> Self {
        Self {
            month: "March".to_string(),
            year: 2025,
            views: 42,
            updated_at: Utc
                .with_ymd_and_hms(2025, 3, 15, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }
    }
}

impl VisitCounterEntityBuilder {
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

    pub fn build(self) -> entity::visit_counter::Model {
        entity::visit_counter::Model {
            id: COUNTER_ID,
            month: self.month,
            year: self.year,
            views: self.views,
            updated_at: self.updated_at,
        }
    }
}
