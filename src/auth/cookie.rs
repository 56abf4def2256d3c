//! Defines functions for handling the session cookie.
//!
//! The session cookie is an encrypted private cookie whose value is the
//! session's expiry date-time. A request is authenticated if the cookie
//! decrypts, parses, and has not expired yet.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

pub(crate) const COOKIE_SESSION: &str = "session";
/// The default duration for which session cookies are valid.
pub(crate) const DEFAULT_COOKIE_DURATION: Duration = Duration::minutes(30);

/// Add a session cookie to the cookie jar, indicating that the user has
/// logged in.
///
/// Sets the expiry of the session to `duration` from the current time.
///
/// Returns the cookie jar with the cookie added.
///
/// # Errors
/// Returns an [Error::InvalidSessionExpiry] if the expiry time cannot be
/// formatted.
pub(crate) fn set_session_cookie(
    jar: PrivateCookieJar,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let expiry = OffsetDateTime::now_utc() + duration;
    let expiry_string = expiry
        .format(&Rfc3339)
        .map_err(|_| Error::InvalidSessionExpiry(expiry.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_SESSION, expiry_string))
            .expires(expiry)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

/// Set the session cookie to an invalid value and set its max age to zero,
/// which should delete the cookie on the client side.
pub(crate) fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Check that `jar` holds an unexpired session cookie.
///
/// # Errors
/// This function will return a:
/// - [Error::CookieMissing] if the session cookie is absent or the session
///   has expired,
/// - [Error::InvalidSessionExpiry] if the cookie's value cannot be parsed as
///   a date-time.
pub(crate) fn validate_session(jar: &PrivateCookieJar) -> Result<(), Error> {
    let cookie = jar.get(COOKIE_SESSION).ok_or(Error::CookieMissing)?;

    let expiry = OffsetDateTime::parse(cookie.value_trimmed(), &Rfc3339)
        .map_err(|_| Error::InvalidSessionExpiry(cookie.value_trimmed().to_owned()))?;

    if expiry <= OffsetDateTime::now_utc() {
        return Err(Error::CookieMissing);
    }

    Ok(())
}
