//! Archived period factory for creating historical month rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an archived period row.
///
/// # Arguments
/// - `db` - Database connection
/// - `month` - English month name, e.g. `"February"`
/// - `year` - Calendar year
/// - `views` - Final view count of the month
///
/// # Returns
/// - `Ok(Model)` - The created archive entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_archived_period(
    db: &DatabaseConnection,
    month: &str,
    year: i32,
    views: i64,
) -> Result<entity::archived_period::Model, DbErr> {
    entity::archived_period::ActiveModel {
        id: ActiveValue::NotSet,
        month: ActiveValue::Set(month.to_string()),
        year: ActiveValue::Set(year),
        views: ActiveValue::Set(views),
        archived_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
