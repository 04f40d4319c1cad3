//! MeshTopo WebAssembly Bindings
//!
//! JavaScript/TypeScript API for topology extraction built with wasm-bindgen.

use wasm_bindgen::prelude::*;

mod api;
mod utils;

pub use api::TopologyAPI;
pub use utils::set_panic_hook as init_panic_hook;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the version of MeshTopo
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
