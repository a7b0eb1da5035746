use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{MarkerKey, MarkerStore, MenuVisibility, Role, SessionMarkers};

/// Session state shared by every route: the persisted markers and the role
/// the last verification returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub markers: Signal<SessionMarkers>,
    pub role: Signal<Option<Role>>,
    /// Set by a sign-out in this tab; consumed by the next login page.
    signed_out: Signal<bool>,
    max_age_days: i64,
}

impl SessionContext {
    pub fn new(markers: Signal<SessionMarkers>, max_age_days: i64) -> Self {
        Self {
            markers,
            role: Signal::new(None),
            signed_out: Signal::new(false),
            max_age_days,
        }
    }

    /// Marker store that writes through to browser cookies.
    pub fn store(&self) -> BrowserMarkerStore {
        BrowserMarkerStore {
            markers: self.markers,
            max_age_days: self.max_age_days,
        }
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role.set(role);
    }

    /// Forget the role and remember that the user just signed out.
    pub fn mark_signed_out(&mut self) {
        self.role.set(None);
        self.signed_out.set(true);
    }

    /// Whether a sign-out happened since the last call; resets the flag.
    pub fn take_signed_out(&mut self) -> bool {
        let was = *self.signed_out.peek();
        if was {
            self.signed_out.set(false);
        }
        was
    }
}

/// [`MarkerStore`] over the in-memory marker signal, mirrored to
/// `document.cookie` on every change.
#[derive(Clone, Copy)]
pub struct BrowserMarkerStore {
    markers: Signal<SessionMarkers>,
    max_age_days: i64,
}

impl BrowserMarkerStore {
    fn persist(&self, key: MarkerKey) {
        let cookie = match self.markers.peek().value(key) {
            Some(value) => client::markers::marker_cookie(key, value, self.max_age_days),
            None => client::markers::expired_marker_cookie(key),
        };
        let write = document::eval(&cookie_write_script(cookie));
        spawn(async move {
            if let Err(e) = write.join::<bool>().await {
                tracing::warn!(
                    error = ?e,
                    marker = key.storage_name(),
                    "Could not write session cookie"
                );
            }
        });
    }
}

impl MarkerStore for BrowserMarkerStore {
    fn snapshot(&self) -> SessionMarkers {
        self.markers.peek().clone()
    }

    fn set(&mut self, key: MarkerKey, value: &str) {
        self.markers.write().set(key, value);
        self.persist(key);
    }

    fn remove(&mut self, key: MarkerKey) {
        self.markers.write().remove(key);
        self.persist(key);
    }
}

/// Script assigning one cookie; it answers `true` so the write can be awaited.
fn cookie_write_script(cookie: String) -> String {
    let literal = serde_json::Value::String(cookie).to_string();
    format!("document.cookie = {literal}; return true;")
}

/// Read the markers persisted by an earlier visit.
pub async fn read_browser_markers() -> SessionMarkers {
    match document::eval("return document.cookie;").join::<String>().await {
        Ok(raw) => client::markers::parse_markers(&raw),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read session cookies");
            SessionMarkers::default()
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Role from the most recent session check, if any.
pub fn use_role() -> Option<Role> {
    use_session().role.read().clone()
}

pub fn use_is_privileged() -> bool {
    use_role().map(|role| role.is_privileged()).unwrap_or(false)
}

/// Sidebar sections for the current role; nothing before verification.
pub fn use_menu_visibility() -> MenuVisibility {
    use_role()
        .map(|role| MenuVisibility::for_role(&role))
        .unwrap_or(MenuVisibility {
            maintenance: false,
            attendance_control: false,
            change_project: false,
        })
}
