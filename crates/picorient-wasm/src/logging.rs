//! Host logger for the bindings.
//!
//! In the browser diagnostics go to the developer console. Native builds
//! (used when running the unit tests) fall back to `tracing`.

#[cfg(target_arch = "wasm32")]
pub(crate) use console::ConsoleLogger as HostLogger;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use picorient_core::TracingLogger as HostLogger;

#[cfg(target_arch = "wasm32")]
mod console {
    use picorient_core::Logger;
    use wasm_bindgen::JsValue;

    /// Writes to `console.debug` / `console.warn`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ConsoleLogger;

    impl Logger for ConsoleLogger {
        fn debug(&self, operation: &'static str, message: &str) {
            web_sys::console::debug_1(&JsValue::from_str(&format!("[{}] {}", operation, message)));
        }

        fn warn(&self, operation: &'static str, message: &str) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("[{}] {}", operation, message)));
        }
    }
}
