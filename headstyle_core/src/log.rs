/// Logs a message to the browser console.
///
/// On non-wasm targets, prints to `stderr` so native test runs still surface
/// the output.
pub fn console_log(msg: impl AsRef<str>) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg.as_ref()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", msg.as_ref());
    }
}

/// Logs an error message to the browser console.
///
/// On non-wasm targets, prints to `stderr`.
pub fn console_error(msg: impl AsRef<str>) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg.as_ref()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "ERROR: {}", msg.as_ref());
    }
}
