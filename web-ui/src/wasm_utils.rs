//! Diagnostics that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    pub fn console_log(s: &str) {
        web_sys::console::log_1(&s.into());
    }

    pub fn console_error(s: &str) {
        web_sys::console::error_1(&s.into());
    }

    pub fn set_panic_hook() {
        // Panics show up in the browser console instead of as "unreachable executed".
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn console_log(s: &str) {
        tracing::info!("{}", s);
    }

    pub fn console_error(s: &str) {
        tracing::error!("{}", s);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
