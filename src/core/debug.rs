//! Lightweight debug logging gated by ARITHKIT_DEBUG=1 or `--debug`.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("ARITHKIT_DEBUG").ok().as_deref() == Some("1"))
}

/// Force logging on. Only effective before the first `is_enabled` call.
pub fn enable() {
    let _ = ENABLED.set(true);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[debug] {}", format_args!($($arg)*)); }
    }};
}
