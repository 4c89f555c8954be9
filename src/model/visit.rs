use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Running count for the active calendar month.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VisitCountDto {
    /// English month name, e.g. "March".
    pub month: String,
    pub views: i64,
}

/// Final count of a completed calendar month.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArchivedPeriodDto {
    pub month: String,
    pub year: i32,
    pub views: i64,
}
