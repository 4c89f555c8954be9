//! Typed access to the visit marker cookie.
//!
//! Wraps `tower_cookies::Cookies` so handlers never deal with the cookie name or its
//! attributes directly. The browser discards the cookie at its expiry, so any marker still
//! presented is treated as valid for the current month.

use time::OffsetDateTime;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};

use crate::server::{error::AppError, model::visit::VisitMarker};

/// Name of the cookie carrying the visit marker.
pub const VISIT_MARKER_COOKIE: &str = "visitor";

/// Visit marker cookie management.
pub struct MarkerCookie<'a> {
    cookies: &'a Cookies,
}

impl<'a> MarkerCookie<'a> {
    pub fn new(cookies: &'a Cookies) -> Self {
        Self { cookies }
    }

    /// Whether the request carried a non-empty marker cookie.
    pub fn has_marker(&self) -> bool {
        self.cookies
            .get(VISIT_MARKER_COOKIE)
            .is_some_and(|cookie| !cookie.value().is_empty())
    }

    /// Sets the marker cookie on the response.
    ///
    /// The cookie is `HttpOnly`, `Secure`, `SameSite=None` so it is sent on cross-site
    /// requests from the website, and expires at the marker's month end.
    ///
    /// # Arguments
    /// - `marker` - Marker issued for the counted visit
    ///
    /// # Returns
    /// - `Ok(())` - Cookie added to the response
    /// - `Err(AppError::InternalError)` - Expiry not representable as a cookie date
    pub fn issue(&self, marker: &VisitMarker) -> Result<(), AppError> {
        let expires = to_offset_date_time(marker)?;

        let cookie = Cookie::build((VISIT_MARKER_COOKIE, marker.token.clone()))
            .http_only(true)
            .secure(true)
            .same_site(SameSite::None)
            .path("/")
            .expires(expires)
            .build();

        self.cookies.add(cookie);

        Ok(())
    }
}

fn to_offset_date_time(marker: &VisitMarker) -> Result<OffsetDateTime, AppError> {
    let millis = marker.expires_at.timestamp_subsec_millis() as u16;

    OffsetDateTime::from_unix_timestamp(marker.expires_at.timestamp())
        .and_then(|dt| dt.replace_millisecond(millis))
        .map_err(|e| AppError::InternalError(format!("Invalid marker expiry: {}", e)))
}
