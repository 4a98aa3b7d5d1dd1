//! Blocking `window.alert` for validation failures.

/// Show `message` in a blocking browser alert. Logged when no window exists.
pub fn show(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
            return;
        }
    }
    log::warn!("alert without window: {}", message.trim_end());
}
