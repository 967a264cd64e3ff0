//! Blocking user notifications.

use estante_client::ApiError;
use web_sys::window;

/// Blocking message box. Confirmations and every failure route through here.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking yes/no dialog; `false` when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Surface a failed backend call.
///
/// A conflict already carries its operation-specific, user-facing message
/// and is shown alone; anything else is prefixed with what we were doing.
pub fn surface(context: &str, err: &ApiError) {
    match err {
        ApiError::Conflict(conflict) => alert(&conflict.to_string()),
        other => alert(&format!("{context}: {other}")),
    }
}
