//! Console logging
//!
//! `log!` / `log_warn!` take `format!`-style arguments. On wasm32 they go to the
//! browser console through `web_sys`; on native targets they compile down to
//! a format-args check so call sites stay type-checked in tests.

/// Write an info line to the browser console.
#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($t)*);
        }
    }};
}

/// Write a warning line to the browser console.
#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($t)*);
        }
    }};
}
