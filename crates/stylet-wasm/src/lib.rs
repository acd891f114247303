//! WASM bindings for the Stylet compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen.
//! Returns the generated JavaScript text or throws on error.

use wasm_bindgen::prelude::*;

/// Compile Stylet source to JavaScript.
///
/// Throws a JS error if parsing or code generation fails.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<String, JsError> {
    let program =
        stylet_parser::Parser::parse(source).map_err(|e| JsError::new(&e.to_string()))?;

    stylet_codegen::transform(&program).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
