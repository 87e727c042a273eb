//! Console logging
//!
//! wasm32: forwards to `console.log` in the host page.
//! Native: arguments are type-checked but nothing is written, so tests and
//! benches stay quiet.
//!
//! Usage:
//! ```rust
//! use dicethrow_engine::console_log;
//!
//! let frame = 42;
//! console_log!("frame {}: stopped", frame);
//! ```

/// Log a formatted line to the browser console (no-op off wasm32)
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
