//! Host capabilities (storage, system signal, document surface)
//!
//! Each capability is a trait with an in-memory implementation usable
//! natively and in tests, plus a browser implementation on wasm32.

pub mod signal;
pub mod storage;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use signal::*;
pub use storage::*;
pub use surface::*;
