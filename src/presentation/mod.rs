pub mod actions;
pub mod formatting;
pub mod wasm_api;
