//! Platform abstraction layer
//!
//! Browser-specific implementations of the core's collaborators. Native
//! builds use `persistence::FileStore` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new run, from the wall clock
pub fn run_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}
