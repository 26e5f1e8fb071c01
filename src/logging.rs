//! Log and panic routing.
//!
//! In the browser this hands off to the web backend, which writes to the
//! console. Elsewhere `tracing` events go to stderr through a `fmt` layer
//! filtered by `RUST_LOG` (default `info`), and panics are reported as
//! `tracing` errors before the previous hook runs.

#[cfg(not(target_arch = "wasm32"))]
use std::panic::{self, PanicHookInfo};
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Once;

#[cfg(not(target_arch = "wasm32"))]
static PANIC_HOOK_INSTALLED: Once = Once::new();
#[cfg(not(target_arch = "wasm32"))]
static TRACING_INSTALLED: Once = Once::new();

/// Installs the panic hook and the tracing subscriber (idempotent).
pub fn install() {
    #[cfg(target_arch = "wasm32")]
    gridsearch_web::install_logging();

    #[cfg(not(target_arch = "wasm32"))]
    {
        install_panic_forwarder();
        install_tracing();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let console = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("gridsearch: a tracing subscriber is already installed");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_forwarder() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            forward_panic(info);
            previous(info);
        }));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn forward_panic(info: &PanicHookInfo<'_>) {
    let message = extract_panic_message(info);
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_default();

    tracing::error!(
        target: "gridsearch::panic",
        message = %message,
        location = %location,
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn install_is_idempotent() {
        install();
        install();
        assert!(TRACING_INSTALLED.is_completed());
        assert!(PANIC_HOOK_INSTALLED.is_completed());
    }
}
