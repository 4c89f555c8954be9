//! Visit marker issuance.
//!
//! A marker is an opaque random token handed to a client after its first counted visit of
//! the month. Nothing is stored server side: the marker's expiry at month end is what lets
//! the same client be counted again in the next month.

use rand::Rng;

use crate::server::{
    error::AppError,
    model::{period::Period, visit::VisitMarker},
};

/// Length of a marker token. 44 alphanumeric characters carry about 262 bits of entropy.
const MARKER_LENGTH: usize = 44;

/// Issues a fresh marker expiring at the last millisecond of `period`.
///
/// # Arguments
/// - `period` - Month the visit was counted in
///
/// # Returns
/// - `Ok(VisitMarker)` - Marker with a random token and month-end expiry
/// - `Err(AppError::InternalError)` - `period` lies outside the representable date range
pub fn issue(period: Period) -> Result<VisitMarker, AppError> {
    let expires_at = period.last_instant().ok_or_else(|| {
        AppError::InternalError(format!("No representable month end for {}", period))
    })?;

    Ok(VisitMarker {
        token: generate_token(),
        expires_at,
    })
}

/// Generates a random alphanumeric token from the thread-local CSPRNG.
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..MARKER_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
