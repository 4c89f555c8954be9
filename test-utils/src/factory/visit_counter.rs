//! Visit counter factory for creating the singleton counter row.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture::visit_counter::COUNTER_ID;

/// Factory for creating the counter row with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::visit_counter::VisitCounterFactory;
///
/// let counter = VisitCounterFactory::new(&db)
///     .month("December")
///     .year(2024)
///     .views(10)
///     .build()
///     .await?;
/// ```
pub struct VisitCounterFactory<'a> {
    db: &'a DatabaseConnection,
    month: String,
    year: i32,
    views: i64,
    updated_at: DateTime<Utc>,
}

impl<'a> VisitCounterFactory<'a> {
    /// Creates a new VisitCounterFactory with default values.
    ///
    /// Defaults:
    /// - month: `"January"`
    /// - year: `2025`
    /// - views: `0`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            month: "January".to_string(),
            year: 2025,
            views: 0,
            updated_at: Utc::now(),
        }
    }

    /// Sets the English month name stored on the counter.
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    /// Sets the calendar year stored on the counter.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the view count.
    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    /// Builds and inserts the counter entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created counter entity
    /// - `Err(DbErr)` - Database error during insertion (e.g. a counter already exists)
    pub async fn build(self) -> Result<entity::visit_counter::Model, DbErr> {
        entity::visit_counter::ActiveModel {
            id: ActiveValue::Set(COUNTER_ID),
            month: ActiveValue::Set(self.month),
            year: ActiveValue::Set(self.year),
            views: ActiveValue::Set(self.views),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the counter row for the given period and view count.
///
/// # Arguments
/// - `db` - Database connection
/// - `month` - English month name, e.g. `"March"`
/// - `year` - Calendar year
/// - `views` - View count
///
/// # Returns
/// - `Ok(Model)` - The created counter entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_counter(
    db: &DatabaseConnection,
    month: &str,
    year: i32,
    views: i64,
) -> Result<entity::visit_counter::Model, DbErr> {
    VisitCounterFactory::new(db)
        .month(month)
        .year(year)
        .views(views)
        .build()
        .await
}
