//! # terapia
//!
//! Client-side data layer for the Terapia therapist/client check-in
//! prototype. Weekly check-ins, homework and journal entries live in the
//! browser's `localStorage`; there is no server.
//!
//! The crate builds for WASM (`hydrate`) and for native/SSR targets. Only the
//! `hydrate` build touches browser storage; every other build runs against a
//! detached backend where reads come back empty and writes are dropped.

pub mod clock;
pub mod config;
pub mod error;
pub mod forms;
pub mod ids;
pub mod roster;
pub mod seed;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;
pub mod util;

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::Store;

/// WASM entry point: install console logging and the panic hook.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("terapia client initialized");
}
