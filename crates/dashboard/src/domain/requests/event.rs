use serde::Deserialize;
use shared::model::User;

/// One discrete user action, read as a single JSON line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    Login { user: User },
    /// Raw page identifier; unknown values are stale links and fall back to the dashboard.
    RequestPage { page: String },
    UpdateProfile { user: User },
    Logout,
    Metrics,
}
