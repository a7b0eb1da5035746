//! Cookie encoding for session markers.
//!
//! Markers live in `document.cookie` so they survive reloads; the app reads
//! them once at startup with [`parse_markers`] and writes each change with
//! [`marker_cookie`] / [`expired_marker_cookie`].

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use shared_types::{MarkerKey, MarkerStore, SessionMarkers};

fn base(key: MarkerKey, value: &str) -> cookie::CookieBuilder<'static> {
    Cookie::build((key.storage_name(), value.to_string()))
        .path("/")
        .same_site(SameSite::None)
        .secure(true)
}

/// `Set-Cookie`-style string persisting `value` for `max_age_days`.
pub fn marker_cookie(key: MarkerKey, value: &str, max_age_days: i64) -> String {
    base(key, value)
        .max_age(Duration::days(max_age_days.max(0)))
        .build()
        .encoded()
        .to_string()
}

/// Cookie string that deletes the marker.
pub fn expired_marker_cookie(key: MarkerKey) -> String {
    base(key, "")
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

/// Read the markers out of a `document.cookie` string. Unknown cookies and
/// undecodable pairs are ignored.
pub fn parse_markers(document_cookie: &str) -> SessionMarkers {
    let mut markers = SessionMarkers::default();
    for parsed in Cookie::split_parse_encoded(document_cookie.to_string()) {
        let Ok(c) = parsed else { continue };
        if let Some(key) = MarkerKey::from_storage_name(c.name()) {
            markers.set(key, c.value());
        }
    }
    markers
}
