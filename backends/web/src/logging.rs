use std::sync::Once;

static LOGGING_INSTALLED: Once = Once::new();

/// Routes panics and `tracing` events to the browser console (idempotent).
///
/// Leaves an already-installed global subscriber in place.
pub fn install_logging() {
    LOGGING_INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();
        if tracing_wasm::try_set_as_global_default().is_err() {
            tracing::debug!("a tracing subscriber is already installed");
        }
    });
}
