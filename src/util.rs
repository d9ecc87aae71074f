// Small helpers shared by the components

use crate::error::ClientError;

/// `["a", "b"]` -> `["1. a", "2. b"]`
pub fn numbered_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e))
        .collect()
}

/// Blocking browser alert; the page waits until the user dismisses it.
pub fn notify_blocking(message: &str) -> Result<(), ClientError> {
    let win = web_sys::window().ok_or(ClientError::MissingWindow)?;
    win.alert_with_message(message)
        .map_err(|e| ClientError::Notify(format!("{e:?}")))
}
